//! `tutor-cli`: solve one problem and print the workbook as text or JSON.

mod config;
mod render;
mod wire;

use clap::Parser;
use config::{parse_level, CliConfig};
use std::collections::BTreeMap;
use std::process::ExitCode;
use tutor_catalog::{ParamValue, Params};
use tutor_engine::{SolveRequest, Tutor};

#[derive(Parser, Debug)]
#[command(
    name = "tutor-cli",
    about = "Classify, solve and explain a formula-based math problem"
)]
struct Cli {
    /// The problem text, e.g. "Find the area of a triangle with base 6 and height 8."
    problem: String,

    /// Optional scenario text consulted by the classifier.
    #[arg(long)]
    scenario: Option<String>,

    /// Force a problem type (e.g. "circle_measures"); unknown names fall
    /// back to pattern classification.
    #[arg(long = "type")]
    problem_type: Option<String>,

    /// Caller-supplied parameter, key=value; repeatable. Wins over
    /// extracted values.
    #[arg(long = "param")]
    params: Vec<String>,

    /// Explanation level: basic, intermediate, detailed, scaffolded.
    #[arg(long)]
    level: Option<String>,

    /// Emit the full JSON envelope instead of text.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,
}

fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let value = match value.parse::<f64>() {
        Ok(n) => ParamValue::Number(n),
        Err(_) => ParamValue::Text(value.to_string()),
    };
    Ok((key.to_string(), value))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = CliConfig::load();
    if let Some(level) = &cli.level {
        if parse_level(level).is_none() {
            eprintln!("unknown explanation level '{level}'");
            return ExitCode::FAILURE;
        }
        config.explanation_level = level.clone();
    }

    let mut parameters = Params::new();
    for raw in &cli.params {
        match parse_param(raw) {
            Ok((key, value)) => {
                parameters.insert(key, value);
            }
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            }
        }
    }

    let tutor = Tutor::new(config.to_options());
    let request = SolveRequest {
        problem: cli.problem,
        scenario: cli.scenario,
        parameters,
        problem_type: cli.problem_type,
        context: BTreeMap::new(),
    };

    match tutor.solve(&request) {
        Ok(solved) => {
            if cli.json {
                match serde_json::to_string_pretty(&wire::to_json(&solved)) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("serialization failed: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render::render_text(&solved));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param_number_and_text() {
        let (key, value) = parse_param("height=10").unwrap();
        assert_eq!(key, "height");
        assert_eq!(value, ParamValue::Number(10.0));

        let (_, value) = parse_param("equation=1/x = 2").unwrap();
        assert!(matches!(value, ParamValue::Text(_)));
    }

    #[test]
    fn test_parse_param_rejects_bare_key() {
        assert!(parse_param("height").is_err());
    }
}
