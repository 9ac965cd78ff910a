//! `construct` - compiles the Construct language into x86-64 NASM assembly.
//!
//! Usage: `construct -i <input.con> -o <output.asm>`
//!
//! Flags are hand-parsed rather than via `clap`: a missing or unknown
//! flag prints a single diagnostic line and exits 0 (not `clap`'s usage
//! block and exit code 2), matching `handle_flags`'s behavior in the
//! source this is ported from.

use anyhow::{Context, Result};
use std::fs;
use std::process::ExitCode;

struct Args {
    input: String,
    output: String,
}

/// Scans `argv` for `-i <path>` and `-o <path>` in either order. Returns
/// `None` (rather than an error) on anything malformed, since every
/// failure mode here prints the same single line and exits 0.
fn parse_args(argv: &[String]) -> Option<Args> {
    let mut input = None;
    let mut output = None;
    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-i" => {
                input = Some(argv.get(i + 1)?.clone());
                i += 2;
            }
            "-o" => {
                output = Some(argv.get(i + 1)?.clone());
                i += 2;
            }
            _ => return None,
        }
    }
    Some(Args {
        input: input?,
        output: output?,
    })
}

fn main() -> Result<ExitCode> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Some(args) => args,
        None => {
            println!("Some flag(s) not set");
            return Ok(ExitCode::SUCCESS);
        }
    };

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input))?;

    let nasm = construct::compile(&source)?;

    fs::write(&args.output, nasm)
        .with_context(|| format!("failed to write output file {}", args.output))?;

    Ok(ExitCode::SUCCESS)
}
