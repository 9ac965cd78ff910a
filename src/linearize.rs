//! Indentation normalization, linearization, and NASM emission (§4.8, C7).
//!
//! Ported from `reconstruct.cpp`'s `set_indentation`/`linearize_tokens`/
//! `tokens_to_nasm`. The original's `linearize_tokens` mutates the vector
//! it's iterating via raw-iterator insert/erase; this port rebuilds the
//! sibling list instead, which is the same rebuild-and-splice idiom used
//! in the funcall/syscall desugar passes.

use crate::token::{Token, TokenKind};

/// Overwrites every child's indentation with `parent.indentation + 1`,
/// post-order, discarding whatever the desugar passes left in place.
pub fn set_indentation(tokens: &mut [Token], parent_indentation: i32) {
    for token in tokens.iter_mut() {
        token.indentation = parent_indentation + 1;
        set_indentation(&mut token.children, token.indentation);
    }
}

/// Flattens every `If`/`While`/`Function` node into its sibling list in
/// source position, repeating until no structural node remains at any
/// level (a structural node's children can themselves be structural,
/// e.g. a function containing an if).
pub fn linearize(tokens: &mut Vec<Token>) {
    loop {
        let original = std::mem::take(tokens);
        let mut any_structural = false;
        for mut token in original {
            if token.is_structural() {
                any_structural = true;
                tokens.append(&mut token.children);
            } else {
                tokens.push(token);
            }
        }
        if !any_structural {
            break;
        }
    }
}

/// Renders the flattened token list as NASM source text.
pub fn emit(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        match &token.kind {
            TokenKind::Section { name } => {
                output.push_str("section ");
                output.push_str(name);
            }
            TokenKind::Tag { name } => {
                output.push_str(name);
                output.push(':');
            }
            TokenKind::Cmd {
                command,
                arg1,
                arg2,
            } => {
                output.push_str(command);
                if let Some(a1) = arg1 {
                    output.push(' ');
                    output.push_str(a1);
                }
                if let Some(a2) = arg2 {
                    output.push_str(", ");
                    output.push_str(a2);
                }
            }
            TokenKind::Data { line } => {
                output.push_str(line);
            }
            TokenKind::Macro { .. }
            | TokenKind::Funcall { .. }
            | TokenKind::Syscall { .. }
            | TokenKind::If { .. }
            | TokenKind::While { .. }
            | TokenKind::Function { .. } => continue,
        }
        output.push('\n');
    }
    output
}
