//! Error taxonomy for the compiler.
//!
//! One variant per trigger condition in the spec's error-handling design.
//! All errors are fatal: the first one aborts the pipeline.

use std::fmt;

/// An error raised anywhere in the lex/parse/desugar/emit pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// CLI flags missing or malformed.
    Flag(String),
    /// A line failed its grammar.
    Syntax(String),
    /// Indentation grew by more than one level between consecutive tokens.
    IndentationJump { from: i32, to: i32 },
    /// A `syscall` name is absent from the syscall table.
    UnknownSyscall(String),
    /// An internal invariant was violated (unreachable variant, bad state).
    InvalidArgument(String),
    /// The input file could not be read, or the output file could not be written.
    Io(String),
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::Flag(msg) => write!(f, "{msg}"),
            ConstructError::Syntax(msg) => write!(f, "{msg}"),
            ConstructError::IndentationJump { from, to } => {
                write!(
                    f,
                    "Syntax error: extra indentation: indentation jumped from {from} to {to}!"
                )
            }
            ConstructError::UnknownSyscall(name) => {
                write!(f, "Unknown syscall name: {name}")
            }
            ConstructError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            ConstructError::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConstructError {}

/// Wraps a [`ConstructError::Syntax`], [`ConstructError::IndentationJump`],
/// or [`ConstructError::UnknownSyscall`] with the `Line <n> [<source line>]:
/// <message>` context the spec requires. These three are exactly the kinds
/// `parse_line` can raise from within a single source line, the same call
/// the original's line-context `catch` block wraps uniformly; every other
/// variant is raised outside that call and is left untouched.
pub fn with_line_context(err: ConstructError, line_no: usize, source_line: &str) -> ConstructError {
    match err {
        ConstructError::Syntax(msg) => {
            ConstructError::Syntax(format!("Line {line_no} [{source_line}]: {msg}"))
        }
        ConstructError::IndentationJump { from, to } => ConstructError::Syntax(format!(
            "Line {line_no} [{source_line}]: Syntax error: extra indentation: indentation jumped from {from} to {to}!"
        )),
        ConstructError::UnknownSyscall(name) => ConstructError::Syntax(format!(
            "Line {line_no} [{source_line}]: Unknown syscall name: {name}"
        )),
        other => other,
    }
}

pub type Result<T> = std::result::Result<T, ConstructError>;
