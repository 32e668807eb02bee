//! CLI tool to dump or validate the token streams of IMP source files.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: implex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print the tokens of each file, one per line");
        eprintln!("  check   Check that each file lexes without errors");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  implex tokens main.imp");
        eprintln!("  RUST_LOG=trace implex check main.imp");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "tokens" | "check") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let tokens = match imp_lex::tokenize_file(path) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        if command == "tokens" {
            for token in &tokens {
                println!(
                    "{}:{}\t{token}",
                    token.location.line, token.location.column
                );
            }
        } else {
            eprintln!("{path}: ok ({} token(s))", tokens.len());
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
