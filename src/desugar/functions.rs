//! `apply_functions` (§4.5 pass 1): lowers a `Function` node's header into
//! its body.
//!
//! Ported from `reconstruct.cpp`'s `apply_functions`. `main` is renamed to
//! the ELF entry point `_start`; each parameter becomes a `Macro` binding
//! its name to the argument register it arrives in, so later macro
//! substitution rewrites every use of the parameter name in the body.
//! A trailing `ret` is appended.
//!
//! Unlike every other structural pass in this module, the original does
//! not recurse into a function's children before doing its own rewrite --
//! confirmed by diffing its loop body against `apply_ifs`/`apply_whiles`/
//! `apply_funcalls`/`apply_syscalls`, none of which skip that recursive
//! call. A `function` nested inside another `function` is therefore left
//! untouched by this pass, a limitation this port preserves rather than
//! silently fixes.

use crate::context::CompileContext;
use crate::error::ConstructError;
use crate::regs::reg_for_index;
use crate::token::{Token, TokenKind};

const ENTRY_POINT: &str = "_start";

/// Runs pass 1 over every top-level token, rewriting `Function` nodes
/// in place. Does not recurse into any node's children.
pub fn apply_functions(tokens: &mut [Token], ctx: &CompileContext) -> Result<(), ConstructError> {
    for token in tokens {
        if let TokenKind::Function { name, params } = &token.kind {
            let label = if name == "main" {
                ENTRY_POINT.to_string()
            } else {
                name.clone()
            };
            let indentation = token.indentation + 1;
            let bitwidth = ctx.bitwidth();

            let mut param_macros = Vec::with_capacity(params.len());
            for (j, (param_name, _declared_width)) in params.iter().enumerate() {
                let reg = reg_for_index(j as u8, bitwidth)?;
                param_macros.push(Token::new(
                    TokenKind::Macro {
                        name: param_name.clone(),
                        value: reg.to_string(),
                    },
                    indentation,
                ));
            }

            let mut body = Vec::with_capacity(1 + param_macros.len() + token.children.len() + 1);
            body.push(Token::tag(label.clone(), indentation));
            body.extend(param_macros);
            body.append(&mut token.children);
            body.push(Token::cmd("ret", indentation));

            token.kind = TokenKind::Function {
                name: label,
                params: params.clone(),
            };
            token.children = body;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::parse_construct;

    fn parse(src: &str) -> Vec<Token> {
        crate::delinearize::delinearize(parse_construct(src).unwrap())
    }

    #[test]
    fn main_renamed_to_start_with_ret_appended() {
        let mut tokens = parse("function main():\n\tmov rax, 1");
        let ctx = CompileContext::new();
        apply_functions(&mut tokens, &ctx).unwrap();
        let TokenKind::Function { name, .. } = &tokens[0].kind else {
            panic!("expected Function");
        };
        assert_eq!(name, "_start");
        let children = &tokens[0].children;
        assert!(matches!(&children[0].kind, TokenKind::Tag { name } if name == "_start"));
        assert!(matches!(&children[1].kind, TokenKind::Cmd { command, .. } if command == "mov"));
        assert!(matches!(&children[2].kind, TokenKind::Cmd { command, .. } if command == "ret"));
    }

    #[test]
    fn non_main_keeps_its_own_name() {
        let mut tokens = parse("function helper():\n\tret");
        let ctx = CompileContext::new();
        apply_functions(&mut tokens, &ctx).unwrap();
        let TokenKind::Function { name, .. } = &tokens[0].kind else {
            panic!("expected Function");
        };
        assert_eq!(name, "helper");
    }

    #[test]
    fn parameters_bind_to_argument_registers_in_order() {
        let mut tokens = parse("function add(a: dq, b: dq):\n\tret");
        let ctx = CompileContext::new();
        apply_functions(&mut tokens, &ctx).unwrap();
        let children = &tokens[0].children;
        // tag, then macro a -> rdi, macro b -> rsi, then the original ret.
        assert!(matches!(&children[1].kind,
            TokenKind::Macro { name, value } if name == "a" && value == "rdi"));
        assert!(matches!(&children[2].kind,
            TokenKind::Macro { name, value } if name == "b" && value == "rsi"));
    }

    #[test]
    fn seventh_parameter_has_no_register_and_errors() {
        let mut tokens = parse(
            "function many(a: dq, b: dq, c: dq, d: dq, e: dq, f: dq, g: dq):\n\tret",
        );
        let ctx = CompileContext::new();
        let err = apply_functions(&mut tokens, &ctx).unwrap_err();
        assert!(matches!(err, ConstructError::InvalidArgument(_)));
    }

    #[test]
    fn does_not_recurse_into_nested_function() {
        let mut tokens = parse("function outer():\n\tfunction inner():\n\t\tret");
        let ctx = CompileContext::new();
        apply_functions(&mut tokens, &ctx).unwrap();
        // The nested `function` token is still a Function, unlowered: its
        // body was never visited by this pass.
        let outer_children = &tokens[0].children;
        let nested = outer_children
            .iter()
            .find(|t| matches!(t.kind, TokenKind::Function { .. }))
            .expect("nested function token survives untouched");
        assert!(matches!(&nested.kind, TokenKind::Function { name, .. } if name == "inner"));
    }

    #[test]
    fn declared_parameter_width_does_not_affect_register_spelling() {
        // The parameter's own declared width ("dd" = 32-bit) is parsed and
        // stored, but register binding always uses the context's single
        // program-wide bitwidth (default 64), not the per-parameter one.
        let mut tokens = parse("function f(a: dd):\n\tret");
        let ctx = CompileContext::new();
        apply_functions(&mut tokens, &ctx).unwrap();
        let children = &tokens[0].children;
        assert!(matches!(&children[1].kind,
            TokenKind::Macro { value, .. } if value == "rdi"));
    }
}
