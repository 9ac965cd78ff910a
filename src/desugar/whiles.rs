//! `apply_whiles` (§4.5 pass 3): lowers a loop block into a labeled
//! compare/branch/jump-back structure.
//!
//! Ported from `reconstruct.cpp`'s `apply_whiles`. Recurses into children
//! first, same post-order shape as [`crate::desugar::ifs::apply_ifs`].

use crate::context::CompileContext;
use crate::token::{Token, TokenKind};

pub fn apply_whiles(tokens: &mut [Token], ctx: &mut CompileContext) {
    for token in tokens.iter_mut() {
        apply_whiles(&mut token.children, ctx);
        if let TokenKind::While { condition } = &token.kind {
            let indentation = token.indentation + 1;
            let n = ctx.next_while();
            let start = format!("startwhile{n}");
            let end = format!("endwhile{n}");

            let mut body = Vec::with_capacity(3 + token.children.len() + 2);
            body.push(Token::tag(start.clone(), indentation));
            body.push(Token::cmd2(
                "cmp",
                condition.arg1.clone(),
                condition.arg2.clone(),
                indentation,
            ));
            body.push(Token::cmd1(
                format!("j{}", condition.op.inverse().as_str()),
                end.clone(),
                indentation,
            ));
            body.append(&mut token.children);
            body.push(Token::cmd1("jmp", start, indentation));
            body.push(Token::tag(end, indentation));

            token.children = body;
        }
    }
}
