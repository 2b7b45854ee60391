use std::fs;
use std::process::ExitCode;

use blockstate_merger::{build_templates, TemplateError};

const DEFAULT_INPUT: &str = "snbt_convert.txt";
const DEFAULT_OUTPUT: &str = "block_state_templates.json";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let input = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    match run(input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output: &str) -> Result<(), TemplateError> {
    let contents = fs::read_to_string(input)?;
    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let store = build_templates(&lines)?;

    // Serialize fully before touching the output file; a failed run must
    // not leave partial output behind.
    let json = serde_json::to_string_pretty(&store)?;
    fs::write(output, json)?;

    eprintln!(
        "Merged {} records into {} template groups -> {}",
        store.record_count(),
        store.len(),
        output
    );
    Ok(())
}
