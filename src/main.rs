mod report;
mod telemetry;

use hvac_load::{compute_thermal_load_with, BuildingDescription, CalculatorForm, DesignFactors};
use report::render_summary;
use std::error::Error;
use std::io::Read;
use tracing::info;

const USAGE: &str = "usage: hvac-load <input.json | -> [--form] [--json] [--factors <file.json>]";

/// Options parsed from the command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    /// Path to the building record, or `-` for stdin.
    input: String,
    /// Treat the input as raw calculator form text.
    form: bool,
    /// Print the full result as JSON instead of a report.
    json: bool,
    /// Optional design factors file.
    factors: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut input = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--form" => options.form = true,
            "--json" => options.json = true,
            "--factors" => {
                options.factors = Some(args.next().ok_or("--factors needs a file path")?);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ if input.is_none() => input = Some(arg.clone()),
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }
    options.input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(options)
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init_tracing();

    let options = parse_args(std::env::args().skip(1))?;

    // Design factors default to the published safety margins unless a file
    // overrides them.
    let factors = match &options.factors {
        Some(path) => DesignFactors::from_path(path)?,
        None => DesignFactors::default(),
    };

    // Raw form text goes through the same coercion the web calculator applies
    // before the estimator ever sees it.
    let text = read_input(&options.input)?;
    let building: BuildingDescription = if options.form {
        serde_json::from_str::<CalculatorForm>(&text)?.to_description()?
    } else {
        serde_json::from_str(&text)?
    };
    info!(input = %options.input, "estimating thermal load");

    let result = compute_thermal_load_with(&building, &factors)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_summary(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn parses_flags_in_any_order() {
        let options =
            parse_args(args(&["--json", "house.json", "--factors", "f.json"])).expect("valid");
        assert_eq!(
            options,
            Options {
                input: "house.json".into(),
                form: false,
                json: true,
                factors: Some("f.json".into()),
            }
        );
    }

    #[test]
    fn rejects_missing_input_and_unknown_flags() {
        assert_eq!(parse_args(args(&[])), Err(USAGE.to_owned()));
        assert!(parse_args(args(&["a.json", "--verbose"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(args(&["a.json", "--factors"])).is_err());
    }
}
