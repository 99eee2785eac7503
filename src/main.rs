use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode};

use validator::{display_error, parser::parser::check};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: validator <source file>...");
        return ExitCode::FAILURE;
    }

    let mut failed = false;

    for path in &args[1..] {
        let source = match read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("{}: {}", path, error);
                failed = true;
                continue;
            }
        };

        match check(&source) {
            Ok(()) => println!("{}: Parsed Successfully!", path),
            Err(error) => {
                println!("{}:", path);
                display_error(&error, &PathBuf::from(path), &source);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
