//! `construct`: compiles the Construct language into x86-64 NASM assembly.
//!
//! [`compile`] runs the full pipeline: lex, delinearize, desugar, then
//! normalize and linearize into NASM text. Ported from `construct.cpp`'s
//! `main`, split into a library entry point so both the CLI driver and
//! the integration tests drive the same path.

pub mod context;
pub mod delinearize;
pub mod desugar;
pub mod error;
pub mod lexer;
pub mod linearize;
pub mod marshal;
pub mod regs;
pub mod strutil;
pub mod syscalls;
pub mod token;

use context::CompileContext;
use error::Result;
use token::Token;

/// Compiles `source` (Construct text) into NASM assembly text.
pub fn compile(source: &str) -> Result<String> {
    let flat = lexer::parse_construct(source)?;
    let mut tokens = delinearize::delinearize(flat);
    tokens.insert(0, Token::cmd1("global", "_start", 0));

    let mut ctx = CompileContext::new();
    desugar::desugar(&mut tokens, &mut ctx)?;

    linearize::set_indentation(&mut tokens, -1);
    linearize::linearize(&mut tokens);

    Ok(linearize::emit(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_empty_function_to_start_label_and_ret() {
        let out = compile("section .text\nfunction main():\n\tret").unwrap();
        assert_eq!(out, "global _start\nsection .text\n_start:\nret\n");
    }

    #[test]
    fn surfaces_lexer_errors_with_line_context() {
        let err = compile("mov rax,").unwrap_err();
        assert!(err.to_string().starts_with("Line 0 ["));
    }
}
