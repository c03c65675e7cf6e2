use clap::{Parser, Subcommand};
use es_app::{AppResult, OutputFormat, RunProgressEvent, RunRequest, RunStage, run_service};
use es_fluids::CoolPropModel;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "es-cli")]
#[command(about = "Preliminary sizing of liquid rocket engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run combustion, nozzle, injector and plumbing sizing
    Run {
        /// Path to the design document (YAML or JSON)
        input_path: PathBuf,
        /// Case name, used for output and CEA file names
        #[arg(long, default_value = "default")]
        case: String,
        /// Directory for the output document (defaults to the input's directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// CEA executable; without it the document must carry combustion products
        #[arg(long)]
        cea: Option<PathBuf>,
        /// Write the output document as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Validate design document syntax and values
    Validate {
        /// Path to the design document
        input_path: PathBuf,
    },
    /// Exhaust velocity and expansion ratio over a chamber-pressure range
    Sweep {
        /// Path to the design document (must carry combustion products)
        input_path: PathBuf,
        /// First chamber pressure [bar]
        #[arg(long)]
        from: f64,
        /// Last chamber pressure [bar]
        #[arg(long)]
        to: f64,
        /// Number of points
        #[arg(long, default_value_t = 10)]
        points: usize,
    },
}

fn main() -> AppResult<()> {
    // RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input_path,
            case,
            output_dir,
            cea,
            json,
        } => cmd_run(
            &input_path,
            &case,
            output_dir.as_deref(),
            cea.as_deref(),
            if json {
                OutputFormat::Json
            } else {
                OutputFormat::Yaml
            },
        ),
        Commands::Validate { input_path } => cmd_validate(&input_path),
        Commands::Sweep {
            input_path,
            from,
            to,
            points,
        } => cmd_sweep(&input_path, from, to, points),
    }
}

fn cmd_validate(input_path: &Path) -> AppResult<()> {
    println!("Validating design document: {}", input_path.display());
    let doc = es_app::load_document(input_path)?;
    println!("✓ Document is valid");
    if es_app::has_prescribed_products(&doc) {
        println!("  Combustion products present; runs without CEA");
    } else {
        println!("  No combustion products; run with --cea");
    }
    Ok(())
}

fn cmd_run(
    input_path: &Path,
    case_name: &str,
    output_dir: Option<&Path>,
    cea_executable: Option<&Path>,
    format: OutputFormat,
) -> AppResult<()> {
    println!("Engine sizing, case '{}'", case_name);
    tracing::debug!(
        input = %input_path.display(),
        cea = cea_executable.is_some(),
        "starting design run"
    );

    let fluid = CoolPropModel::new();
    let request = RunRequest {
        input_path,
        case_name,
        output_dir,
        cea_executable,
        format,
        fluid: &fluid,
    };

    let response = run_service::run_design_with_progress(&request, Some(&mut render_progress))?;

    let e = &response.document.engine;
    let i = &response.document.injector;
    let p = &response.document.plumbing;
    println!("✓ Sizing completed in {:.3} s", response.total_time_s);
    print_value("Exhaust velocity", e.exhaust_velocity, "m/s");
    print_value("Specific impulse", e.specific_impulse, "s");
    print_value("Expansion ratio", e.expansion_ratio, "");
    print_value("Throat radius", e.throat_radius, "m");
    print_value("Exit radius", e.exit_radius, "m");
    print_value("Chamber length", e.chamber_length, "m");
    print_value("Ox injector hole radius", i.ox_injector_radius, "m");
    print_value("Fuel line pressure drop", p.fuel_pressure_drop, "bar");
    print_value("Ox line pressure drop", p.ox_pressure_drop, "bar");
    for file in &response.cea_files {
        println!("  CEA file: {}", file.display());
    }
    println!("Output written to {}", response.output_path.display());
    Ok(())
}

fn cmd_sweep(input_path: &Path, from: f64, to: f64, points: usize) -> AppResult<()> {
    let doc = es_app::load_document(input_path)?;
    let rows = es_app::chamber_pressure_sweep(&doc, from, to, points)?;

    println!("{:>12} {:>14} {:>12}", "Pc [bar]", "v_e [m/s]", "Ae/At");
    for row in rows {
        println!(
            "{:>12.3} {:>14.2} {:>12.4}",
            row.chamber_pressure, row.exhaust_velocity, row.expansion_ratio
        );
    }
    Ok(())
}

fn render_progress(event: RunProgressEvent) {
    let label = match event.stage {
        RunStage::LoadingDocument => "loading",
        RunStage::SolvingCombustion => "combustion",
        RunStage::SizingNozzle => "nozzle",
        RunStage::SizingInjector => "injector",
        RunStage::SizingPlumbing => "plumbing",
        RunStage::SavingDocument => "saving",
        RunStage::Completed => return,
    };
    match event.message {
        Some(msg) => println!("  [{:>7.3}s] {:<10} {}", event.elapsed_wall_s, label, msg),
        None => println!("  [{:>7.3}s] {}", event.elapsed_wall_s, label),
    }
}

fn print_value(label: &str, value: Option<f64>, unit: &str) {
    if let Some(v) = value {
        println!("  {:<24} {:>12.5e} {}", label, v, unit);
    }
}
