//! Command-line interface for coderecon
//! This binary scans a scraped listings page for marker-prefixed offer codes
//! and reconciles them against a reference code list.
//!
//! Usage:
//!   coderecon `<page>` [--codes `<file>`] [--marker `<char>`] [--format `<format>`]

use clap::{Arg, Command};
use coderecon::recon::pipeline::{self, ReconRequest};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("coderecon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reconcile a known offer-code list against a scraped listings page")
        .arg_required_else_help(true)
        .arg(
            Arg::new("page")
                .help("Path to the scraped page (HTML or any text)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("codes")
                .long("codes")
                .short('c')
                .help("File of whitespace-separated reference codes (default: embedded list)"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .short('m')
                .help("Character preceding codes on the page")
                .default_value("#"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' or 'json'")
                .default_value("text"),
        )
        .get_matches();

    let page = matches.get_one::<String>("page").expect("page is required");
    let marker_arg = matches.get_one::<String>("marker").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let mut chars = marker_arg.chars();
    let marker = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Marker must be a single character, got {:?}", marker_arg);
            std::process::exit(1);
        }
    };

    let mut request = ReconRequest::new(page);
    request.marker = marker;
    request.codes = matches.get_one::<String>("codes").map(PathBuf::from);

    let report = pipeline::run(&request).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format.as_str() {
        "text" => print!("{}", report.text(marker)),
        "json" => {
            let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                eprintln!("Error formatting report: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: text, json");
            std::process::exit(1);
        }
    }
}
