//! # Pontoon Calculator CLI
//!
//! Terminal front end for pontoon_core. Collects the twelve design inputs
//! (interactive prompts with defaults, or a JSON design file), evaluates the
//! design, optionally auto-sizes diameter/length first, and prints either a
//! text report or JSON.
//!
//! ## Usage
//!
//! ```text
//! pontoon_cli [--input design.json] [--defaults] [--optimize]
//!             [--water fresh|salt] [--json] [--verbose]
//! ```
//!
//! Log level comes from `PONTOON_LOG` (error, warn, info, debug, trace);
//! `--verbose` forces debug.

mod logger;

use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use pontoon_core::report::{ChartData, JsonReport, ReportRenderer, TextReport};
use pontoon_core::{evaluate, optimize, CalcError, CalcResult, DesignInput, WaterBody};

const USAGE: &str = "\
Usage: pontoon_cli [OPTIONS]

Options:
  --input <FILE>    Read the design from a JSON file (missing fields use defaults)
  --defaults        Skip prompts and use the default design
  --optimize        Replace diameter/length with the sizing suggestion before evaluating
  --water <BODY>    Override water density: fresh (62.4 pcf) or salt (64.0 pcf)
  --json            Print the input and result as JSON
  --verbose         Enable debug logging
  --help            Show this message";

/// Parsed command-line options
#[derive(Debug, Default)]
struct Options {
    input_path: Option<String>,
    use_defaults: bool,
    optimize: bool,
    water: Option<WaterBody>,
    json: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CalcResult<Options> {
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let path = args
                    .next()
                    .ok_or_else(|| CalcError::invalid_input("--input", "", "Expected a file path"))?;
                opts.input_path = Some(path);
            }
            "--water" => {
                let body = args
                    .next()
                    .ok_or_else(|| CalcError::invalid_input("--water", "", "Expected 'fresh' or 'salt'"))?;
                opts.water = Some(WaterBody::from_str_flexible(&body)?);
            }
            "--defaults" => opts.use_defaults = true,
            "--optimize" => opts.optimize = true,
            "--json" => opts.json = true,
            "--verbose" | "-v" => opts.verbose = true,
            "--help" | "-h" => opts.help = true,
            other => return Err(CalcError::invalid_input("argument", other, "Unknown option")),
        }
    }
    Ok(opts)
}

fn prompt<T: FromStr + Display>(label: &str, default: T) -> T {
    print!("{} [{}]: ", label, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    parse_or(&input, default)
}

/// Blank or unparsable answers keep the default.
fn parse_or<T: FromStr>(input: &str, default: T) -> T {
    input.trim().parse().unwrap_or(default)
}

/// Ask for every field, offering the current value as the default.
fn prompt_design(base: DesignInput) -> DesignInput {
    println!("Mission Requirements");
    let payload_lb = prompt("  Payload Weight (lbs)", base.payload_lb);
    let safety_factor = prompt("  Safety Factor", base.safety_factor);
    let submersion_pct = prompt("  Submersion Percentage (%)", base.submersion_pct);

    println!("Pontoon Geometry");
    let diameter_in = prompt("  Pontoon Diameter (inches)", base.diameter_in);
    let length_ft = prompt("  Total Length (ft)", base.length_ft);
    let cone_pct = prompt("  Cone Length (% of total)", base.cone_pct);

    println!("Materials");
    let foam_density_pcf = prompt("  Foam Density (lb/ft³)", base.foam_density_pcf);
    let coating_weight_psf = prompt("  Coating Weight (lb/ft²)", base.coating_weight_psf);
    let water_density_pcf = prompt("  Water Density (lb/ft³)", base.water_density_pcf);

    println!("Frame Structure");
    let cross_beam_length_ft = prompt("  Cross Beam Length (ft)", base.cross_beam_length_ft);
    let num_cross_beams = prompt("  Number of Cross Beams", base.num_cross_beams);
    let tube_weight_plf = prompt("  Aluminum Tube Weight (lb/ft)", base.tube_weight_plf);
    println!();

    DesignInput {
        payload_lb,
        safety_factor,
        submersion_pct,
        diameter_in,
        length_ft,
        cone_pct,
        foam_density_pcf,
        coating_weight_psf,
        water_density_pcf,
        cross_beam_length_ft,
        num_cross_beams,
        tube_weight_plf,
    }
}

fn load_design(path: &str) -> CalcResult<DesignInput> {
    let json = fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    DesignInput::from_json(&json)
}

fn collect_input(opts: &Options) -> CalcResult<DesignInput> {
    let mut input = match &opts.input_path {
        Some(path) => load_design(path)?,
        None if opts.use_defaults || opts.json => DesignInput::default(),
        None => prompt_design(DesignInput::default()),
    };
    if let Some(water) = opts.water {
        input = input.in_water(water);
    }
    Ok(input)
}

fn run(opts: &Options) -> CalcResult<()> {
    let mut input = collect_input(opts)?;
    log::info!("design input: {:?}", input);

    if opts.optimize {
        let size = optimize(&input)?;
        log::info!("auto-optimized to {}\" x {:.2} ft", size.diameter_in, size.length_ft);
        if !opts.json {
            println!(
                "Auto-Optimize: diameter {}\" (was {:.1}\"), length {:.2} ft (was {:.2} ft)",
                size.diameter_in, input.diameter_in, size.length_ft, input.length_ft
            );
            println!();
        }
        input = size.apply_to(&input);
    }

    let result = evaluate(&input)?;

    if opts.json {
        println!("{}", JsonReport.render(&input, &result)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  PONTOON DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("{}", TextReport::detailed().render(&input, &result)?);
    println!();

    let chart = ChartData::from_result(&input, &result);
    println!("{}", chart.title);
    let scale = if chart.y_max > 0.0 { 40.0 / chart.y_max } else { 0.0 };
    for bar in &chart.bars {
        let width = (bar.value.max(0.0) * scale).round() as usize;
        println!("  {:<22} {} {:.1}", bar.label, "█".repeat(width), bar.value);
    }
    println!();
    println!("{}", chart.explanation());
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", result.status);
    println!("═══════════════════════════════════════");

    Ok(())
}

fn main() -> ExitCode {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if opts.help {
        println!("Pontoon Boat Design Calculator");
        println!();
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    logger::init(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let opts = parse_args(args(&["--optimize", "--json", "--water", "fresh", "-i", "boat.json"])).unwrap();
        assert!(opts.optimize);
        assert!(opts.json);
        assert_eq!(opts.water, Some(WaterBody::Fresh));
        assert_eq!(opts.input_path.as_deref(), Some("boat.json"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--input"])).is_err());
        assert!(parse_args(args(&["--water", "swamp"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_defaults_with_water_override() {
        let opts = parse_args(args(&["--defaults", "--water", "fresh"])).unwrap();
        let input = collect_input(&opts).unwrap();
        assert_eq!(input.water_density_pcf, 62.4);
        assert_eq!(input.diameter_in, 12.0);
    }

    #[test]
    fn test_prompt_answer_parsing() {
        assert_eq!(parse_or("  250\n", 100.0), 250.0);
        assert_eq!(parse_or("\n", 1.8), 1.8);
        assert_eq!(parse_or("six\n", 4u32), 4);
        assert_eq!(parse_or("-2\n", 4u32), 4);
        assert_eq!(parse_or("6\n", 4u32), 6);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_design("/nonexistent/pontoon-design.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
