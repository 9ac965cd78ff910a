//! `apply_macros` (§4.5 pass 6, §4.6 substitution rule): the final
//! desugar pass.
//!
//! A single walk carrying the list of macros discovered so far. On a
//! `Macro` node the binding is recorded (the node itself is left in the
//! tree; emission filters it out). On every other node, each
//! substitutable text field is rewritten to a fixpoint under every known
//! binding. Macros are visible to every sibling and descendant that
//! follows their definition in the same chain -- not lexically scoped to
//! a block -- so the accumulated list is threaded forward into `If`/
//! `While`/`Function` children rather than reset per nesting level. This
//! is what makes parameter macros injected by `apply_functions` visible
//! to the function body: they're the first children recursed into.
//!
//! Ported from `reconstruct.cpp`'s `apply_macros`/`find_macro_in_arg`.

use crate::token::{Token, TokenKind};

/// Runs the macro pass over a sibling list, given the macros already known
/// from earlier in the enclosing chain. Returns the updated known-macro
/// list so a caller threading multiple top-level sibling lists (there is
/// only ever one, in practice) could chain further calls.
pub fn apply_macros(tokens: &mut [Token], known: &mut Vec<(String, String)>) {
    for token in tokens.iter_mut() {
        if let TokenKind::Macro { name, value } = &token.kind {
            known.push((name.clone(), value.clone()));
            continue;
        }
        for field in token.substitutable_fields_mut() {
            *field = substitute_fixpoint(field, known);
        }
        apply_macros(&mut token.children, known);
    }
}

/// Repeatedly substitutes every known macro into `text` until no known
/// name matches at an identifier boundary anywhere in the result.
fn substitute_fixpoint(text: &str, known: &[(String, String)]) -> String {
    let mut current = text.to_string();
    loop {
        match find_first_match(&current, known) {
            Some((start, end, value)) => {
                current.replace_range(start..end, &value);
            }
            None => return current,
        }
    }
}

/// Finds the earliest identifier-boundary match of any known macro name in
/// `text`, scanning byte positions left to right and, at each position,
/// known macros in definition order (matching the original's nested-loop
/// scan order). Digits are not boundary characters: `!x` can match inside
/// `x1`, a deliberately preserved quirk.
fn find_first_match(text: &str, known: &[(String, String)]) -> Option<(usize, usize, String)> {
    for start in 0..text.len() {
        if !text.is_char_boundary(start) {
            continue;
        }
        for (name, value) in known {
            if name.is_empty() {
                continue;
            }
            let end = start + name.len();
            if end > text.len() || !text.is_char_boundary(end) {
                continue;
            }
            if &text[start..end] != name {
                continue;
            }
            if !boundary_before(text, start) && !boundary_after(text, end) {
                return Some((start, end, value.clone()));
            }
        }
    }
    None
}

fn is_boundary_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether the character immediately before `pos` is a boundary char.
/// `pos == 0` means "no character there", which `next_back()` reports as
/// `None`; `is_some_and` treats that as `false` with no panic-shaped call.
fn boundary_before(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().is_some_and(is_boundary_char)
}

/// Whether the character immediately after `pos` is a boundary char.
/// `pos == text.len()` means "no character there", handled the same way
/// as [`boundary_before`].
fn boundary_after(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().is_some_and(is_boundary_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::parse_construct;

    fn parse(src: &str) -> Vec<Token> {
        crate::delinearize::delinearize(parse_construct(src).unwrap())
    }

    #[test]
    fn parameter_macro_substitutes_in_body() {
        let mut tokens = parse("!a rdi\nadd a, 1");
        let mut known = Vec::new();
        apply_macros(&mut tokens, &mut known);
        assert!(matches!(&tokens[1].kind,
            TokenKind::Cmd { arg1, .. } if arg1.as_deref() == Some("rdi")));
    }

    #[test]
    fn digits_are_not_boundary_characters() {
        // Macro "x" must match inside "x1", per the preserved quirk.
        let mut tokens = parse("!x rax\nmov x1, 1");
        let mut known = Vec::new();
        apply_macros(&mut tokens, &mut known);
        assert!(matches!(&tokens[1].kind,
            TokenKind::Cmd { arg1, .. } if arg1.as_deref() == Some("rax1")));
    }

    #[test]
    fn underscore_and_alpha_are_boundary_characters() {
        let mut tokens = parse("!x rax\nmov my_x, 1");
        let mut known = Vec::new();
        apply_macros(&mut tokens, &mut known);
        // "my_x" has 'y' and '_' adjacent to a hypothetical match of "x" at
        // the end -- but here "x" only occurs preceded by '_', which is a
        // boundary char, so no substitution should occur.
        assert!(matches!(&tokens[1].kind,
            TokenKind::Cmd { arg1, .. } if arg1.as_deref() == Some("my_x")));
    }

    #[test]
    fn macro_visible_to_later_sibling_and_its_descendants() {
        let mut tokens = parse("!a rdi\nif a e 0:\n\tmov a, 1");
        let mut known = Vec::new();
        apply_macros(&mut tokens, &mut known);
        let TokenKind::If { condition } = &tokens[1].kind else {
            panic!("expected If")
        };
        assert_eq!(condition.arg1, "rdi");
        assert!(matches!(&tokens[1].children[0].kind,
            TokenKind::Cmd { arg1, .. } if arg1.as_deref() == Some("rdi")));
    }

    #[test]
    fn substitution_is_fixpoint_over_chained_macros() {
        // !a b, then !b rdi: using "a" after both definitions resolves
        // transitively through the re-scan-from-zero fixpoint.
        let mut tokens = parse("!a b\n!b rdi\nmov a, 1");
        let mut known = Vec::new();
        apply_macros(&mut tokens, &mut known);
        assert!(matches!(&tokens[2].kind,
            TokenKind::Cmd { arg1, .. } if arg1.as_deref() == Some("rdi")));
    }
}
