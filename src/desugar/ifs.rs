//! `apply_ifs` (§4.5 pass 2): lowers a conditional block into a compare
//! and an inverted conditional jump past the block.
//!
//! Ported from `reconstruct.cpp`'s `apply_ifs`. Recurses into every
//! token's children first (post-order), so a nested `if` is already
//! lowered by the time its parent is rewritten.

use crate::context::CompileContext;
use crate::token::{Token, TokenKind};

pub fn apply_ifs(tokens: &mut [Token], ctx: &mut CompileContext) {
    for token in tokens.iter_mut() {
        apply_ifs(&mut token.children, ctx);
        if let TokenKind::If { condition } = &token.kind {
            let indentation = token.indentation + 1;
            let label = format!("endif{}", ctx.next_if());

            let mut body = Vec::with_capacity(2 + token.children.len() + 1);
            body.push(Token::cmd2(
                "cmp",
                condition.arg1.clone(),
                condition.arg2.clone(),
                indentation,
            ));
            body.push(Token::cmd1(
                format!("j{}", condition.op.inverse().as_str()),
                label.clone(),
                indentation,
            ));
            body.append(&mut token.children);
            body.push(Token::tag(label, indentation));

            token.children = body;
        }
    }
}
