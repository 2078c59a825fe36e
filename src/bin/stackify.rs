//! Command-line interface for stackify
//! This binary recovers structure from a stack trace dump and prints the
//! outermost error's frame groups.
//!
//! Usage:
//!   stackify parse `<path>` [--lib `<prefix>`]... [--format `<format>`]  - Parse a trace file
//!
//! Pass `-` as the path to read the trace from stdin.

use clap::{Arg, ArgAction, Command};
use stackify::stackify::Stackifier;
use std::io::Read;

fn main() {
    let matches = Command::new("stackify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for recovering structure from stack trace dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a trace dump and print its frame groups")
                .arg(
                    Arg::new("path")
                        .help("Path to the trace file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("lib")
                        .long("lib")
                        .short('l')
                        .help("Library prefix to group by (repeatable, priority by order)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('pretty' or 'json')")
                        .default_value("pretty"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").map(String::as_str).unwrap_or("-");
            let libraries: Vec<String> = parse_matches
                .get_many::<String>("lib")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let format = parse_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("pretty");
            handle_parse_command(path, libraries, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, libraries: Vec<String>, format: &str) {
    let trace = match read_trace(path) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let stackifier = Stackifier::builder().libraries(libraries).build();
    let result = match stackifier.stackify(&trace) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match format {
        "pretty" => print!("{}", result.pretty_string()),
        "json" => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("Error: unknown format '{}' (expected 'pretty' or 'json')", other);
            std::process::exit(1);
        }
    }
}

fn read_trace(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}
