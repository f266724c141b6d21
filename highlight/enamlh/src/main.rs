//! Enaml highlighter CLI.
//!
//! Thin driver over `enaml_highlight`: scans files and prints the token
//! stream, either as readable `label<TAB>text` lines or as JSON records for
//! downstream tooling.

use std::process::exit;

use enaml_highlight::{mode, RuleSet, Scope};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "tokens" => {
            let Some(path) = args.get(2).filter(|a| !a.starts_with('-')) else {
                eprintln!("Usage: enamlh tokens <file.enaml> [--json]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --json    Emit one JSON record per token");
                exit(1);
            };
            let json = args.iter().skip(3).any(|a| a == "--json");
            tokens_command(path, json);
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: enamlh check <file.enaml>");
                exit(1);
            };
            check_command(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Enaml syntax highlighter");
    eprintln!();
    eprintln!("Usage: enamlh <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokens <file.enaml> [--json]   Print the token stream for a file");
    eprintln!("  check <file.enaml>             Scan and report error tokens");
    eprintln!("  help                           Show this message");
}

fn load_rules() -> RuleSet<Scope> {
    match mode() {
        Ok(rules) => rules,
        Err(err) => {
            // Only reachable if the built-in table is edited and broken.
            eprintln!("error: invalid highlight rules: {err}");
            exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            exit(1);
        }
    }
}

fn tokens_command(path: &str, json: bool) {
    let rules = load_rules();
    let source = read_source(path);

    for token in rules.scan(&source) {
        if json {
            let record = serde_json::json!({
                "label": token.label().name(),
                "text": token.text(),
                "len": token.len(),
            });
            println!("{record}");
        } else {
            println!("{}\t{}", token.label().name(), token.text().escape_debug());
        }
    }
}

/// Scan a file line by line (exercising the incremental path) and report
/// how it lexed. Exit status 1 when any input failed to match or a
/// multi-line string never closed.
fn check_command(path: &str) {
    let rules = load_rules();
    let source = read_source(path);

    let mut scan = rules.start();
    let mut tokens = 0usize;
    let mut errors = 0usize;
    for line in source.split_inclusive('\n') {
        for token in rules.scan_chunk(&mut scan, line) {
            tokens += 1;
            if token.label() == Scope::Error {
                errors += 1;
            }
        }
    }
    let unterminated = scan.has_pending();
    if scan.finish().is_some() {
        tokens += 1;
    }
    tracing::debug!(tokens, errors, unterminated, "scan complete");

    println!("{path}: {tokens} tokens, {errors} error tokens");
    if unterminated {
        println!("{path}: unterminated multi-line string at end of input");
    }
    if errors > 0 || unterminated {
        exit(1);
    }
}
