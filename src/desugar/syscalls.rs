//! `apply_syscalls` (§4.5 pass 5): lowers a syscall invocation into its
//! argument-marshalling sequence, `mov rax, NUMBER`, and `syscall`.
//!
//! Ported from `reconstruct.cpp`'s `apply_syscalls`, same shape as
//! [`crate::desugar::funcalls::apply_funcalls`] including the clean
//! in-place replacement instead of the original's insert-after-self
//! splice. The syscall number is moved into `rax` *after* argument
//! marshalling, matching the original's emission order exactly (`rax`
//! is never one of the six argument registers, so ordering the two
//! steps either way produces identical register contents, but this
//! keeps fidelity with the source it's ported from).

use crate::context::CompileContext;
use crate::marshal::marshal_args;
use crate::token::{Token, TokenKind};

pub fn apply_syscalls(tokens: &mut Vec<Token>, ctx: &CompileContext) {
    for token in tokens.iter_mut() {
        apply_syscalls(&mut token.children, ctx);
    }
    let original = std::mem::take(tokens);
    for token in original {
        if let TokenKind::Syscall { number, args } = &token.kind {
            let indentation = token.indentation;
            tokens.extend(marshal_args(args, ctx.bitwidth(), indentation));
            tokens.push(Token::cmd2("mov", "rax", number.to_string(), indentation));
            tokens.push(Token::cmd("syscall", indentation));
        } else {
            tokens.push(token);
        }
    }
}
