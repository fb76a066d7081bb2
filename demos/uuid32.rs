//! Simple command that prints one or '-n count' Base32 UUIDs, or converts between the UUID and
//! Base32 forms
//!
//! ```text
//! uuid32 [-n count]
//! uuid32 encode <uuid>...
//! uuid32 decode <base32>...
//! ```
//!
//! Set `RUST_LOG=debug` to trace what the command does.

use std::{env, io, io::Write, process::ExitCode};

enum Command {
    Generate(usize),
    Encode(Vec<String>),
    Decode(Vec<String>),
}

fn main() -> io::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                let program = program.as_deref().unwrap_or("uuid32");
                eprintln!("Error: {}", message);
                eprintln!("Usage: {} [-n count]", program);
                eprintln!("       {} encode <uuid>...", program);
                eprintln!("       {} decode <base32>...", program);
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    let mut status = ExitCode::SUCCESS;
    match command {
        Command::Generate(count) => {
            log::debug!("generating {} identifiers", count);
            for _ in 0..count {
                writeln!(buf, "{}", uuid32::generate_base32())?;
            }
        }
        Command::Encode(inputs) => {
            for e in inputs {
                match uuid32::encode(&e) {
                    Ok(encoded) => writeln!(buf, "{}", encoded)?,
                    Err(err) => {
                        log::warn!("skipping '{}': {}", e, err);
                        status = ExitCode::FAILURE;
                    }
                }
            }
        }
        Command::Decode(inputs) => {
            for e in inputs {
                match uuid32::decode(&e) {
                    Ok(decoded) => writeln!(buf, "{}", decoded)?,
                    Err(err) => {
                        log::warn!("skipping '{}': {}", e, err);
                        status = ExitCode::FAILURE;
                    }
                }
            }
        }
    }
    buf.flush()?;

    Ok(status)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let Some(first) = args.next() else {
        return Ok(Command::Generate(1));
    };

    match first.as_str() {
        "encode" | "decode" => {
            let inputs: Vec<String> = args.collect();
            if inputs.is_empty() {
                return Err(format!("subcommand '{}' needs at least one argument", first));
            }
            Ok(if first == "encode" {
                Command::Encode(inputs)
            } else {
                Command::Decode(inputs)
            })
        }
        "-n" => {
            let Some(n_arg) = args.next() else {
                return Err("argument to option 'n' missing".to_owned());
            };
            let Ok(count) = n_arg.parse() else {
                return Err(format!("invalid argument to option 'n': '{}'", n_arg));
            };
            if let Some(arg) = args.next() {
                return Err(if arg == "-n" {
                    "option 'n' given more than once".to_owned()
                } else {
                    format!("unrecognized argument '{}'", arg)
                });
            }
            Ok(Command::Generate(count))
        }
        _ => Err(format!("unrecognized argument '{}'", first)),
    }
}
