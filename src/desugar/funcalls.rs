//! `apply_funcalls` (§4.5 pass 4): lowers a function call into its
//! argument-marshalling sequence followed by `call NAME`.
//!
//! Ported from `reconstruct.cpp`'s `apply_funcalls`. The original splices
//! the new tokens into the list it is iterating via
//! `it = tokens.insert(it + 1, ...) - 1`, leaving the original `Funcall`
//! token in place as an inert sibling (harmless, since emission skips
//! that kind, but not a shape worth reproducing). This port instead
//! rebuilds the sibling list once, replacing each `Funcall` node with its
//! expansion in place.

use crate::context::CompileContext;
use crate::marshal::marshal_args;
use crate::token::{Token, TokenKind};

pub fn apply_funcalls(tokens: &mut Vec<Token>, ctx: &CompileContext) {
    for token in tokens.iter_mut() {
        apply_funcalls(&mut token.children, ctx);
    }
    let original = std::mem::take(tokens);
    for token in original {
        if let TokenKind::Funcall { name, args } = &token.kind {
            let indentation = token.indentation;
            tokens.extend(marshal_args(args, ctx.bitwidth(), indentation));
            tokens.push(Token::cmd1("call", name.clone(), indentation));
        } else {
            tokens.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::parse_construct;

    fn parse(src: &str) -> Vec<Token> {
        crate::delinearize::delinearize(parse_construct(src).unwrap())
    }

    #[test]
    fn plain_call_lowers_to_movs_and_call() {
        let mut tokens = parse("call helper(1, 2)");
        let ctx = CompileContext::new();
        apply_funcalls(&mut tokens, &ctx);
        assert_eq!(tokens.len(), 3); // two movs + call
        assert!(matches!(&tokens[2].kind,
            TokenKind::Cmd { command, arg1, .. }
            if command == "call" && arg1.as_deref() == Some("helper")));
    }

    #[test]
    fn call_inside_if_body_is_lowered_in_place() {
        let mut tokens = parse("if rax e 0:\n\tcall helper(1)");
        let ctx = CompileContext::new();
        apply_funcalls(&mut tokens, &ctx);
        let body = &tokens[0].children;
        assert_eq!(body.len(), 2); // one mov + call
        assert!(matches!(&body[1].kind,
            TokenKind::Cmd { command, .. } if command == "call"));
    }

    #[test]
    fn swap_call_uses_marshalling_push_pop() {
        let mut tokens = parse("call f(rsi, rdi)");
        let ctx = CompileContext::new();
        apply_funcalls(&mut tokens, &ctx);
        // push, mov, pop, call
        assert_eq!(tokens.len(), 4);
        assert!(matches!(&tokens[0].kind, TokenKind::Cmd { command, .. } if command == "push"));
        assert!(matches!(&tokens[3].kind,
            TokenKind::Cmd { command, arg1, .. }
            if command == "call" && arg1.as_deref() == Some("f")));
    }
}
