//! NASA CEA subprocess backend.
//!
//! Writes a rocket-problem input deck, runs the CEA executable with the case
//! name on stdin, and reads chamber properties back from the `.out` listing.

use crate::error::{CombustionError, CombustionResult};
use crate::model::{CombustionProducts, CombustionRequest, CombustionSolver};
use es_core::units::{k, kgps};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Values read from a CEA rocket-problem listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeaOutput {
    /// Chamber temperature [K]
    pub chamber_temperature_k: f64,
    /// Chamber molar mass [g/mol]
    pub molar_mass_g_per_mol: f64,
    /// Chamber isentropic exponent
    pub gamma: f64,
    /// Specific impulse at the exit station [m/s]
    pub exit_isp_mps: f64,
}

/// Runs a CEA executable as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct CeaProcess {
    executable: PathBuf,
    work_dir: PathBuf,
    case_name: String,
}

impl CeaProcess {
    pub fn new(
        executable: impl Into<PathBuf>,
        work_dir: impl Into<PathBuf>,
        case_name: impl Into<String>,
    ) -> Self {
        Self {
            executable: executable.into(),
            work_dir: work_dir.into(),
            case_name: case_name.into(),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.work_dir.join(format!("{}.inp", self.case_name))
    }

    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(format!("{}.out", self.case_name))
    }

    fn write_deck(&self, request: &CombustionRequest) -> CombustionResult<()> {
        let path = self.input_path();
        let deck = write_input_deck(&self.case_name, request);
        std::fs::write(&path, deck).map_err(|source| CombustionError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote CEA input deck");
        Ok(())
    }

    fn run_executable(&self) -> CombustionResult<()> {
        let mut child = Command::new(&self.executable)
            .current_dir(&self.work_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CombustionError::Spawn {
                path: self.executable.clone(),
                source,
            })?;

        // CEA prompts for the case name (input file without extension).
        // A process that exits without reading is judged by its exit status below.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = writeln!(stdin, "{}", self.case_name)
        {
            debug!(error = %e, "CEA closed stdin before reading the case name");
        }

        let output = child
            .wait_with_output()
            .map_err(|source| CombustionError::Io {
                path: self.executable.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CombustionError::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn read_listing(&self) -> CombustionResult<CeaOutput> {
        let path = self.output_path();
        if !path.exists() {
            return Err(CombustionError::MissingOutput { path });
        }
        let text = std::fs::read_to_string(&path).map_err(|source| CombustionError::Io {
            path: path.clone(),
            source,
        })?;
        parse_output(&text)
    }
}

impl CombustionSolver for CeaProcess {
    fn name(&self) -> &str {
        "CEA"
    }

    fn solve(&self, request: &CombustionRequest) -> CombustionResult<CombustionProducts> {
        request.validate()?;
        self.write_deck(request)?;
        info!(executable = %self.executable.display(), case = %self.case_name, "running CEA");
        self.run_executable()?;
        let output = self.read_listing()?;
        debug!(?output, "parsed CEA listing");
        products_from_output(&output, request)
    }
}

/// Render the rocket-problem input deck for a request.
pub fn write_input_deck(case_name: &str, request: &CombustionRequest) -> String {
    let p_bar = es_core::units::conventions::pa_to_bar(request.chamber_pressure.value);
    format!(
        "prob case={case} rocket equilibrium\n\
         \x20 p,bar={p_bar}\n\
         \x20 pi/p={pi_p}\n\
         \x20 o/f={of}\n\
         react\n\
         \x20 fuel={fuel} wt%=100 t,k={tf}\n\
         \x20 oxid={ox} wt%=100 t,k={to}\n\
         output siunits\n\
         end\n",
        case = case_name,
        pi_p = request.pressure_ratio(),
        of = request.mixture_ratio,
        fuel = request.fuel,
        tf = request.fuel_temperature.value,
        ox = request.oxidizer,
        to = request.oxidizer_temperature.value,
    )
}

/// Convert a parsed listing to the products the sizing pipeline consumes.
///
/// Total mass flow is thrust over exit specific impulse, split by mixture ratio.
pub fn products_from_output(
    output: &CeaOutput,
    request: &CombustionRequest,
) -> CombustionResult<CombustionProducts> {
    let total = request.thrust / output.exit_isp_mps;
    if !total.is_finite() || total <= 0.0 {
        return Err(CombustionError::Malformed {
            what: format!("exit Isp {} m/s gives no usable mass flow", output.exit_isp_mps),
        });
    }
    let (fuel, ox) = CombustionProducts::split_mass_flow(kgps(total), request.mixture_ratio);
    Ok(CombustionProducts {
        gamma: output.gamma,
        molar_mass: output.molar_mass_g_per_mol * 1e-3,
        chamber_temperature: k(output.chamber_temperature_k),
        fuel_mass_flow: fuel,
        ox_mass_flow: ox,
    })
}

/// Parse a CEA rocket-problem listing.
///
/// Uses the chamber (first) column of `T, K`, `M, (1/n)` and `GAMMAs`, and
/// the exit (last) column of `Isp, M/SEC`.
pub fn parse_output(text: &str) -> CombustionResult<CeaOutput> {
    let chamber_temperature_k = first_value(row(text, "T, K")?, "T, K")?;
    let molar_mass_g_per_mol = first_value(row(text, "M, (1/n)")?, "M, (1/n)")?;
    let gamma = first_value(row(text, "GAMMAs")?, "GAMMAs")?;
    let exit_isp_mps = last_value(row(text, "Isp, M/SEC")?, "Isp, M/SEC")?;

    if gamma <= 1.0 {
        return Err(CombustionError::Malformed {
            what: format!("GAMMAs = {gamma} is not greater than 1"),
        });
    }
    for (what, value) in [
        ("T, K", chamber_temperature_k),
        ("M, (1/n)", molar_mass_g_per_mol),
        ("Isp, M/SEC", exit_isp_mps),
    ] {
        if value <= 0.0 {
            return Err(CombustionError::Malformed {
                what: format!("{what} = {value} is not positive"),
            });
        }
    }

    Ok(CeaOutput {
        chamber_temperature_k,
        molar_mass_g_per_mol,
        gamma,
        exit_isp_mps,
    })
}

/// Numeric fields following the first line that starts with `label`.
fn row(text: &str, label: &str) -> CombustionResult<Vec<f64>> {
    let line = text
        .lines()
        .map(str::trim_start)
        .find(|line| line.starts_with(label))
        .ok_or_else(|| CombustionError::Malformed {
            what: format!("row '{label}' not found"),
        })?;

    line[label.len()..]
        .split_whitespace()
        .map(|field| {
            parse_number(field).ok_or_else(|| CombustionError::Malformed {
                what: format!("row '{label}': cannot parse '{field}'"),
            })
        })
        .collect()
}

fn first_value(values: Vec<f64>, label: &str) -> CombustionResult<f64> {
    values
        .first()
        .copied()
        .ok_or_else(|| CombustionError::Malformed {
            what: format!("row '{label}' has no values"),
        })
}

fn last_value(values: Vec<f64>, label: &str) -> CombustionResult<f64> {
    values
        .last()
        .copied()
        .ok_or_else(|| CombustionError::Malformed {
            what: format!("row '{label}' has no values"),
        })
}

/// Parse a CEA field, including its compact exponent form (`1.2345-3`).
fn parse_number(field: &str) -> Option<f64> {
    if let Ok(v) = field.parse::<f64>() {
        return Some(v);
    }
    let split = field
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-' || c == '+')
        .map(|(i, _)| i)?;
    let (mantissa, exponent) = field.split_at(split);
    mantissa.parse::<f64>().ok()?;
    let exponent: i32 = exponent.parse().ok()?;
    format!("{mantissa}e{exponent}").parse().ok()
}

/// Copy the deck and listing of a finished run into `dir`.
pub fn copy_case_files(process: &CeaProcess, dir: &Path) -> CombustionResult<Vec<PathBuf>> {
    let mut copied = Vec::new();
    for src in [process.input_path(), process.output_path()] {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = dir.join(name);
        if dst == src {
            continue;
        }
        std::fs::copy(&src, &dst).map_err(|source| CombustionError::Io {
            path: src.clone(),
            source,
        })?;
        copied.push(dst);
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_core::units::bar;

    const LISTING: &str = "
              THEORETICAL ROCKET PERFORMANCE ASSUMING EQUILIBRIUM

                                 CHAMBER   THROAT     EXIT
 Pinf/P                            1.0000   1.7671   19.738
 P, BAR                            20.000   11.318   1.0133
 T, K                             3201.45  3016.98  2131.66
 RHO, KG/CU M                    1.6512 0 9.9040-1 8.4114-2
 M, (1/n)                          21.977   22.105   22.604
 GAMMAs                            1.1312   1.1325   1.1804
 SON VEL,M/SEC                     1189.6   1153.7    965.3

 PERFORMANCE PARAMETERS

 Ae/At                                      1.0000   3.2318
 CSTAR, M/SEC                               1742.9   1742.9
 CF                                         0.6619   1.3772
 Ivac, M/SEC                                2153.8   2621.7
 Isp, M/SEC                                 1153.7   2400.3
";

    fn request() -> CombustionRequest {
        CombustionRequest {
            fuel: "C2H5OH(L)".into(),
            fuel_temperature: k(298.15),
            oxidizer: "O2".into(),
            oxidizer_temperature: k(290.0),
            chamber_pressure: bar(20.0),
            ambient_pressure: bar(1.01325),
            mixture_ratio: 1.5,
            thrust: 2400.3,
        }
    }

    #[test]
    fn parses_chamber_and_exit_columns() {
        let out = parse_output(LISTING).unwrap();
        assert_eq!(out.chamber_temperature_k, 3201.45);
        assert_eq!(out.molar_mass_g_per_mol, 21.977);
        assert_eq!(out.gamma, 1.1312);
        assert_eq!(out.exit_isp_mps, 2400.3);
    }

    #[test]
    fn compact_exponents_are_parsed() {
        assert_eq!(parse_number("9.9040-1"), Some(9.9040e-1));
        assert_eq!(parse_number("1.5+2"), Some(150.0));
        assert_eq!(parse_number("2.1977-2"), Some(0.021977));
        assert_eq!(parse_number("3.3333-3"), Some(3.3333e-3));
        assert_eq!(parse_number("-2.5"), Some(-2.5));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn missing_row_is_malformed() {
        let text = LISTING.replace("GAMMAs", "GAMMA?");
        assert!(matches!(
            parse_output(&text),
            Err(CombustionError::Malformed { .. })
        ));
    }

    #[test]
    fn products_convert_units_and_split_flow() {
        let out = parse_output(LISTING).unwrap();
        let products = products_from_output(&out, &request()).unwrap();
        assert!((products.molar_mass - 0.021977).abs() < 1e-12);
        assert!((products.total_mass_flow().value - 1.0).abs() < 1e-12);
        assert!((products.ox_mass_flow.value - 0.6).abs() < 1e-12);
        assert_eq!(products.chamber_temperature.value, 3201.45);
    }

    #[test]
    fn input_deck_contains_operating_point() {
        let deck = write_input_deck("default", &request());
        assert!(deck.starts_with("prob case=default rocket equilibrium\n"));
        assert!(deck.contains("  p,bar=20\n"));
        assert!(deck.contains("  o/f=1.5\n"));
        assert!(deck.contains("  fuel=C2H5OH(L) wt%=100 t,k=298.15\n"));
        assert!(deck.contains("  oxid=O2 wt%=100 t,k=290\n"));
        assert!(deck.trim_end().ends_with("end"));
    }
}
