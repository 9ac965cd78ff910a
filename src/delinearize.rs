//! Delinearizer (§C5): reconstructs nesting from indentation.
//!
//! Ported from `original_source/src/deconstruct.cpp`'s
//! `delinearize_tokens`, which threads a `std::stack<con_token*>` of
//! open parents through the flat token list. A plain `Vec` used as a
//! stack (push/pop from the back) is the idiomatic Rust equivalent, and
//! is the same structure the teacher reaches for worklists in
//! `crates/builder`.

use crate::token::Token;

/// Synthetic root indentation, one below any real token's indentation.
const ROOT_INDENTATION: i32 = -1;

/// Reconstructs a tree from a flat, indentation-annotated token stream.
/// Returns the top-level children; the synthetic root is discarded.
pub fn delinearize(tokens: Vec<Token>) -> Vec<Token> {
    let mut root = Token::new(
        crate::token::TokenKind::Section {
            name: "__root__".to_string(),
        },
        ROOT_INDENTATION,
    );

    // `parent_stack` holds indices into a side table of "open" nodes,
    // mirroring the original's stack of raw pointers. We instead walk a
    // path of indices from the root so each push/pop is a plain Vec
    // operation with no aliasing.
    let mut path: Vec<usize> = Vec::new(); // indices, root-relative, one per nesting level

    for token in tokens {
        let parent_indentation = indentation_at(&root, &path);
        let delta = token.indentation - parent_indentation;
        if delta <= 0 {
            let pop_count = (-delta + 1) as usize;
            for _ in 0..pop_count {
                path.pop();
            }
        }
        let is_structural = token.is_structural();
        let parent = node_at_mut(&mut root, &path);
        parent.children.push(token);
        if is_structural {
            path.push(parent.children.len() - 1);
        }
    }

    root.children
}

fn indentation_at(root: &Token, path: &[usize]) -> i32 {
    node_at(root, path).indentation
}

fn node_at<'a>(root: &'a Token, path: &[usize]) -> &'a Token {
    let mut node = root;
    for &idx in path {
        node = &node.children[idx];
    }
    node
}

fn node_at_mut<'a>(root: &'a mut Token, path: &[usize]) -> &'a mut Token {
    let mut node = root;
    for &idx in path {
        node = &mut node.children[idx];
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::parse_construct;
    use crate::token::TokenKind;

    #[test]
    fn flat_tokens_stay_flat() {
        let tokens = parse_construct("section .text\nret").unwrap();
        let tree = delinearize(tokens);
        assert_eq!(tree.len(), 2);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn nests_under_structural_parent() {
        let src = "function main():\n\tmov rax, 1\n\tret";
        let tokens = parse_construct(src).unwrap();
        let tree = delinearize(tokens);
        assert_eq!(tree.len(), 1);
        assert!(matches!(tree[0].kind, TokenKind::Function { .. }));
        assert_eq!(tree[0].children.len(), 2);
    }

    #[test]
    fn pops_back_out_on_dedent() {
        let src = "function main():\n\tif rax e 0:\n\t\tmov rbx, 1\n\tret";
        let tokens = parse_construct(src).unwrap();
        let tree = delinearize(tokens);
        assert_eq!(tree.len(), 1);
        let func = &tree[0];
        assert_eq!(func.children.len(), 2); // if, ret
        assert!(matches!(func.children[0].kind, TokenKind::If { .. }));
        assert_eq!(func.children[0].children.len(), 1);
        assert!(matches!(func.children[1].kind, TokenKind::Cmd { .. }));
    }
}
