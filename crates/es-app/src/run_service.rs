//! Full design run: load, combustion, sizing stages, save.

use std::path::{Path, PathBuf};
use std::time::Instant;

use es_combustion::{CeaProcess, CombustionSolver, PrescribedCombustion, copy_case_files};
use es_fluids::FluidModel;
use es_project::DesignDocument;
use es_sizing::Stage;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::pipeline;
use crate::progress::{RunProgressEvent, RunStage};

/// Output document encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

/// Request to execute a design run.
pub struct RunRequest<'a> {
    pub input_path: &'a Path,
    pub case_name: &'a str,
    /// Defaults to the input document's directory.
    pub output_dir: Option<&'a Path>,
    /// CEA executable. Without one, combustion products must be in the document.
    pub cea_executable: Option<&'a Path>,
    pub format: OutputFormat,
    pub fluid: &'a dyn FluidModel,
}

/// Response from a design run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub document: DesignDocument,
    pub output_path: PathBuf,
    /// CEA deck and listing copied next to the output document.
    pub cea_files: Vec<PathBuf>,
    pub total_time_s: f64,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent::stage(
            stage,
            started.elapsed().as_secs_f64(),
            message,
        ));
    }
}

/// Output file path for a case: `output_<case>.<ext>`.
pub fn output_path(dir: &Path, case_name: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("output_{}.{}", case_name, format.extension()))
}

/// Execute a design run.
pub fn run_design(request: &RunRequest) -> AppResult<RunResponse> {
    run_design_with_progress(request, None)
}

/// Execute a design run and stream progress events.
pub fn run_design_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    if request.case_name.trim().is_empty() {
        return Err(AppError::InvalidInput("case name must not be empty".to_string()));
    }

    emit_progress(
        &mut progress_cb,
        RunStage::LoadingDocument,
        started,
        Some(format!("Loading {}", request.input_path.display())),
    );
    let mut doc = es_project::load(request.input_path)?;

    let output_dir = match request.output_dir {
        Some(dir) => dir.to_path_buf(),
        None => request
            .input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    if !output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&output_dir).map_err(|source| AppError::OutputWrite {
            path: output_dir.clone(),
            source,
        })?;
    }

    emit_progress(
        &mut progress_cb,
        RunStage::SolvingCombustion,
        started,
        Some("Solving combustion products".to_string()),
    );
    let combustion_request = pipeline::combustion_request(&doc)?;
    let mut cea_files = Vec::new();
    let products = match request.cea_executable {
        Some(exe) => {
            // CEA looks for its thermo/transport libraries next to the executable.
            let work_dir = exe
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let process = CeaProcess::new(exe, work_dir, request.case_name);
            let products = process.solve(&combustion_request)?;
            cea_files = copy_case_files(&process, &output_dir)?;
            if pipeline::has_products(&doc) {
                warn!("overwriting combustion products already present in the document");
            }
            products
        }
        None => PrescribedCombustion::new(pipeline::prescribed_products(&doc)?)
            .solve(&combustion_request)?,
    };
    pipeline::apply_products(&mut doc, &products);

    for stage in Stage::ORDER {
        emit_progress(&mut progress_cb, stage.into(), started, None);
        pipeline::run_stage(&mut doc, request.fluid, stage)?;
    }

    emit_progress(
        &mut progress_cb,
        RunStage::SavingDocument,
        started,
        Some("Writing design document".to_string()),
    );
    let output_path = output_path(&output_dir, request.case_name, request.format);
    match request.format {
        OutputFormat::Yaml => es_project::save_yaml(&output_path, &doc)?,
        OutputFormat::Json => es_project::save_json(&output_path, &doc)?,
    }
    info!(path = %output_path.display(), "design document written");

    let total_time_s = started.elapsed().as_secs_f64();
    emit_progress(&mut progress_cb, RunStage::Completed, started, None);

    Ok(RunResponse {
        document: doc,
        output_path,
        cea_files,
        total_time_s,
    })
}
