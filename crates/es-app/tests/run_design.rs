//! End-to-end design runs with offline collaborators.

use std::path::{Path, PathBuf};

use es_app::{AppError, OutputFormat, RunProgressEvent, RunRequest, RunStage, run_design_with_progress};
use es_core::units::{kgpm3, pas};
use es_fluids::{FixedFluidModel, Species};

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("es_app_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn oxygen() -> FixedFluidModel {
    FixedFluidModel::new().with(Species::O2, kgpm3(33.2), pas(2.1e-5))
}

fn collect_events(request: &RunRequest<'_>) -> (es_app::AppResult<es_app::RunResponse>, Vec<RunProgressEvent>) {
    let mut events = Vec::new();
    let result = run_design_with_progress(request, Some(&mut |event| events.push(event)));
    (result, events)
}

#[test]
fn prescribed_run_writes_output_document() {
    let out_dir = scratch_dir("prescribed");
    let fluid = oxygen();
    let request = RunRequest {
        input_path: &data("input_prescribed.yaml"),
        case_name: "smoke",
        output_dir: Some(&out_dir),
        cea_executable: None,
        format: OutputFormat::Yaml,
        fluid: &fluid,
    };

    let (result, events) = collect_events(&request);
    let response = result.expect("prescribed run should succeed");

    assert_eq!(response.output_path, out_dir.join("output_smoke.yaml"));
    assert!(response.cea_files.is_empty());

    let saved = es_project::load_yaml(&response.output_path).unwrap();
    assert_eq!(saved, response.document);
    assert!(saved.engine.expansion_ratio.unwrap() > 1.0);
    assert!(saved.injector.ox_injector_area.unwrap() > 0.0);
    assert!(saved.plumbing.fuel_pressure_drop.unwrap() > 0.0);
    assert_eq!(saved.propellants.ox_density, Some(33.2));
    assert_eq!(saved.engine.exhaust_gamma, Some(1.2));
    assert_eq!(saved.engine.exhaust_molar_mass, Some(0.0225));
    assert_eq!(saved.engine.fuel_mass_flow, Some(0.42));
    assert_eq!(saved.engine.ox_mass_flow, Some(0.63));

    let stages: Vec<RunStage> = events.iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        [
            RunStage::LoadingDocument,
            RunStage::SolvingCombustion,
            RunStage::SizingNozzle,
            RunStage::SizingInjector,
            RunStage::SizingPlumbing,
            RunStage::SavingDocument,
            RunStage::Completed,
        ]
    );
}

#[test]
fn json_output_is_selected_by_format() {
    let out_dir = scratch_dir("json");
    let fluid = oxygen();
    let request = RunRequest {
        input_path: &data("input_prescribed.yaml"),
        case_name: "json",
        output_dir: Some(&out_dir),
        cea_executable: None,
        format: OutputFormat::Json,
        fluid: &fluid,
    };
    let response = es_app::run_design(&request).unwrap();
    assert_eq!(response.output_path, out_dir.join("output_json.json"));
    assert_eq!(es_project::load_json(&response.output_path).unwrap(), response.document);
}

#[test]
fn input_without_products_needs_cea() {
    let out_dir = scratch_dir("noproducts");
    let fluid = oxygen();
    let request = RunRequest {
        input_path: &data("input.yaml"),
        case_name: "noproducts",
        output_dir: Some(&out_dir),
        cea_executable: None,
        format: OutputFormat::Yaml,
        fluid: &fluid,
    };
    let err = es_app::run_design(&request).unwrap_err();
    assert!(matches!(err, AppError::MissingField { section: "engine", .. }), "{err:?}");
    assert!(!out_dir.join("output_noproducts.yaml").exists());
}

#[test]
fn fluid_backend_failure_names_the_stage() {
    let out_dir = scratch_dir("nofluid");
    let fluid = FixedFluidModel::new();
    let request = RunRequest {
        input_path: &data("input_prescribed.yaml"),
        case_name: "nofluid",
        output_dir: Some(&out_dir),
        cea_executable: None,
        format: OutputFormat::Yaml,
        fluid: &fluid,
    };
    let err = es_app::run_design(&request).unwrap_err();
    assert_eq!(err.stage(), Some(es_sizing::Stage::Injector));
}

#[cfg(unix)]
const LISTING: &str = "
 T, K                             3201.45  3016.98  2131.66
 M, (1/n)                          21.977   22.105   22.604
 GAMMAs                            1.1312   1.1325   1.1804
 Isp, M/SEC                                 1153.7   2400.3
";

/// A stand-in CEA executable that reads the case name and writes a listing.
#[cfg(unix)]
fn fake_cea(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-cea");
    let script = format!("#!/bin/sh\nread case\ncat > \"$case.out\" <<'EOF'\n{LISTING}EOF\n");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn cea_run_fills_products_and_copies_case_files() {
    let cea_dir = scratch_dir("cea_bin");
    let out_dir = scratch_dir("cea_out");
    let exe = fake_cea(&cea_dir);
    let fluid = oxygen();
    let request = RunRequest {
        input_path: &data("input.yaml"),
        case_name: "cea",
        output_dir: Some(&out_dir),
        cea_executable: Some(&exe),
        format: OutputFormat::Yaml,
        fluid: &fluid,
    };

    let response = es_app::run_design(&request).unwrap();
    let engine = &response.document.engine;
    assert_eq!(engine.exhaust_gamma, Some(1.1312));
    assert_eq!(engine.chamber_temp, Some(3201.45));
    assert!((engine.exhaust_molar_mass.unwrap() - 0.021977).abs() < 1e-12);

    // 2500 N at 2400.3 m/s, split 1.5 : 1
    let total = 2500.0 / 2400.3;
    assert!((engine.fuel_mass_flow.unwrap() - total / 2.5).abs() < 1e-12);
    assert!((engine.ox_mass_flow.unwrap() - total * 1.5 / 2.5).abs() < 1e-12);

    assert!(out_dir.join("cea.inp").exists());
    assert!(out_dir.join("cea.out").exists());
    assert_eq!(response.cea_files.len(), 2);
}

#[cfg(unix)]
#[test]
fn cea_failure_is_a_combustion_error() {
    let cea_dir = scratch_dir("cea_fail");
    let exe = cea_dir.join("fail-cea");
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::write(&exe, "#!/bin/sh\nexit 3\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    let fluid = oxygen();
    let request = RunRequest {
        input_path: &data("input.yaml"),
        case_name: "fail",
        output_dir: Some(&cea_dir),
        cea_executable: Some(&exe),
        format: OutputFormat::Yaml,
        fluid: &fluid,
    };
    let err = es_app::run_design(&request).unwrap_err();
    assert!(matches!(err, AppError::Combustion(_)), "{err:?}");
}
