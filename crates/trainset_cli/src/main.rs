//! CLI smoke entry point for trainset_core.
//!
//! # Responsibility
//! - Verify core linkage (`trainset_cli` with no arguments).
//! - Expose the text codec and archive for quick manual checks.
//!
//! Usage:
//! - `trainset_cli`
//! - `trainset_cli encode <name> <code>`
//! - `trainset_cli archive <name> <code>`
//! - `trainset_cli decode < input.txt`

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use trainset_core::codec::archive;
use trainset_core::{read_train, write_train, CodecError, LoggingConfig, Train, TrainKind};

const EXIT_CODEC_ERROR: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    if let Err(err) = LoggingConfig::from_env().apply() {
        eprintln!("logging disabled: {err}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);
    let result = match command {
        None => {
            println!("trainset_core ping={}", trainset_core::ping());
            println!("trainset_core version={}", trainset_core::core_version());
            return ExitCode::SUCCESS;
        }
        Some("encode") => parse_train(&args[1..]).map(|train| {
            let stdout = io::stdout();
            write_train(&mut stdout.lock(), &train)
        }),
        Some("archive") => parse_train(&args[1..]).map(|train| {
            archive::save(&train).map(|json| println!("{json}"))
        }),
        Some("decode") => Ok(decode_stdin(&mut io::stdin().lock())),
        Some(_) => Err(usage()),
    };

    match result {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_CODEC_ERROR)
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Builds a train from `<name> <code>`; the code is written unchecked so
/// the encoders' own validation is what the user sees.
fn parse_train(args: &[String]) -> Result<Train, String> {
    let [name, code] = args else {
        return Err(usage());
    };
    let code: i32 = code
        .trim()
        .parse()
        .map_err(|err| format!("kind code must be an integer: {err}"))?;

    let mut train = Train::new(name, TrainKind::Local);
    train.set_kind_code_unchecked(code);
    Ok(train)
}

fn decode_stdin<R: BufRead>(reader: &mut R) -> Result<(), CodecError> {
    let mut train = Train::default();
    read_train(reader, &mut train)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{train}")?;
    Ok(())
}

fn usage() -> String {
    "usage: trainset_cli [encode <name> <code> | archive <name> <code> | decode]".to_string()
}
