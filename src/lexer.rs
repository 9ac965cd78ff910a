//! Line-oriented lexer/parser (§C4).
//!
//! Ported from `original_source/src/deconstruct.cpp`'s `parse_construct`/
//! `parse_line`/`get_token_type`/`parse_*` family. The classification
//! order, the per-kind grammars, and the indentation-sanity check are
//! copied exactly, including a couple of quirks the original's `split`
//! produces as a side effect (documented inline where they matter).

use crate::error::{with_line_context, ConstructError, Result};
use crate::strutil::{self, split, split_first};
use crate::syscalls::syscall_number;
use crate::token::{Bitwidth, Comparison, Condition, Token, TokenKind};

/// Parses an entire source file into a flat, indentation-annotated token
/// stream. Lines with no ASCII letter and no `!` are skipped outright
/// (blank/comment-free lines); every other line must parse.
pub fn parse_construct(code: &str) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut in_data = false;

    for (i, raw_line) in code.split('\n').enumerate() {
        if !raw_line
            .chars()
            .any(|c| c.is_ascii_alphabetic() || c == '!')
        {
            continue;
        }

        let token = parse_line_checked(raw_line, in_data, &tokens)
            .map_err(|e| with_line_context(e, i, raw_line))?;

        if let TokenKind::Section { name } = &token.kind {
            if name == ".data" || name == ".bss" {
                in_data = true;
            } else if name == ".text" {
                in_data = false;
            }
        }
        tokens.push(token);
    }

    Ok(tokens)
}

fn parse_line_checked(raw_line: &str, in_data: bool, tokens: &[Token]) -> Result<Token> {
    let indentation = get_line_indentation(raw_line);
    let canon = canonicalize(raw_line);
    let kind = parse_line(&canon, in_data)?;
    let token = Token::new(kind, indentation);

    if let Some(prev) = tokens.last() {
        if token.indentation - prev.indentation > 1 {
            return Err(ConstructError::IndentationJump {
                from: prev.indentation,
                to: token.indentation,
            });
        }
    }

    Ok(token)
}

/// Counts leading tab characters. Spaces never count toward indentation.
fn get_line_indentation(line: &str) -> i32 {
    line.chars().take_while(|&c| c == '\t').count() as i32
}

/// Drops all tabs and collapses runs of spaces to a single space, without
/// trimming leading/trailing spaces (matching the original's character-by-
/// character pass, which only suppresses a space when the *previous*
/// emitted character was also a space).
fn canonicalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut caught_space = false;
    for c in line.chars() {
        let is_space = c == ' ';
        if c == '\t' || (is_space && caught_space) {
            continue;
        }
        out.push(c);
        caught_space = is_space;
    }
    out
}

fn first_word(line: &str) -> &str {
    line.split(' ').next().unwrap_or("")
}

fn parse_line(line: &str, in_data: bool) -> Result<TokenKind> {
    let word0 = first_word(line);
    if word0 == "section" {
        return parse_section(line);
    }
    if !line.contains(' ') && line.ends_with(':') {
        return parse_tag(line);
    }
    if word0 == "while" {
        return parse_while(line);
    }
    if word0 == "if" {
        return parse_if(line);
    }
    if word0 == "function" {
        return parse_function(line);
    }
    if line.starts_with('!') {
        return parse_macro(line);
    }
    if word0 == "call" && line.contains('(') && line.contains(')') {
        return parse_funcall(line);
    }
    if word0 == "syscall" && line.contains('(') && line.contains(')') {
        return parse_syscall(line);
    }
    if in_data {
        return Ok(TokenKind::Data {
            line: line.to_string(),
        });
    }
    parse_cmd(line)
}

fn parse_section(line: &str) -> Result<TokenKind> {
    let parts = split(line, " ");
    let name = parts
        .get(1)
        .ok_or_else(|| ConstructError::Syntax("Invalid syntax".to_string()))?;
    Ok(TokenKind::Section {
        name: name.clone(),
    })
}

fn parse_tag(line: &str) -> Result<TokenKind> {
    let name = &line[..line.len() - 1];
    if name.is_empty() {
        return Err(ConstructError::Syntax("Invalid syntax".to_string()));
    }
    Ok(TokenKind::Tag {
        name: name.to_string(),
    })
}

fn parse_condition(line: &str) -> Result<Condition> {
    let parts = split(line, " :");
    if parts.len() != 4 {
        return Err(ConstructError::Syntax("Invalid syntax".to_string()));
    }
    let op = Comparison::parse(&parts[2])
        .ok_or_else(|| ConstructError::Syntax(format!("Invalid comparison: {}", parts[2])))?;
    Ok(Condition {
        arg1: parts[1].clone(),
        op,
        arg2: parts[3].clone(),
    })
}

fn parse_while(line: &str) -> Result<TokenKind> {
    Ok(TokenKind::While {
        condition: parse_condition(line)?,
    })
}

fn parse_if(line: &str) -> Result<TokenKind> {
    Ok(TokenKind::If {
        condition: parse_condition(line)?,
    })
}

fn parse_function(line: &str) -> Result<TokenKind> {
    let parts = split(line, "()");
    if parts.len() != 2 && parts.len() != 3 {
        return Err(ConstructError::Syntax("Invalid syntax".to_string()));
    }
    if strutil::strip(&parts[parts.len() - 1], " ") != ":" {
        return Err(ConstructError::Syntax("Invalid syntax".to_string()));
    }

    let header = split(&parts[0], " ");
    if header.len() != 2 || header[0] != "function" {
        return Err(ConstructError::Syntax("Invalid syntax".to_string()));
    }
    let name = header[1].clone();

    let mut params = Vec::new();
    if parts.len() == 3 {
        for arg_len in split(&parts[1], ",") {
            let pieces = split(&arg_len, ":");
            if pieces.len() != 2 {
                return Err(ConstructError::Syntax("Invalid syntax".to_string()));
            }
            let param_name = strutil::collapse(&pieces[0], ' ');
            let width_kw = strutil::collapse(&pieces[1], ' ');
            let bitwidth = Bitwidth::from_width_keyword(&width_kw).ok_or_else(|| {
                ConstructError::Syntax(format!(
                    "Invalid function argument length: {width_kw}"
                ))
            })?;
            params.push((param_name, bitwidth));
        }
    }

    Ok(TokenKind::Function { name, params })
}

fn parse_cmd(line: &str) -> Result<TokenKind> {
    let comma_split = split(line, ",");
    if comma_split.len() > 2 {
        return Err(ConstructError::Syntax(format!(
            "Syntax error: extra commas: the line has {} lines!",
            comma_split.len() - 1
        )));
    }
    if line.ends_with(',') {
        return Err(ConstructError::Syntax(
            "Syntax error: second argument does not exist!".to_string(),
        ));
    }

    let mut arg2: Option<String> = None;
    let arg2_exists = comma_split.len() == 2;
    if arg2_exists {
        arg2 = Some(strutil::collapse(&comma_split[1], ' '));
    }

    let head_split = split_first(&comma_split[0], " ");
    if head_split.is_empty() {
        return Err(ConstructError::Syntax(
            "Syntax error: command and first argument do not exist!".to_string(),
        ));
    }
    let command = head_split[0].clone();
    let arg1 = if head_split.len() == 2 {
        Some(strutil::collapse(&head_split[1], ' '))
    } else {
        if arg2_exists {
            return Err(ConstructError::Syntax(
                "Syntax error: first argument does not exist!".to_string(),
            ));
        }
        None
    };

    Ok(TokenKind::Cmd {
        command,
        arg1,
        arg2,
    })
}

fn parse_macro(line: &str) -> Result<TokenKind> {
    let parts = split(line, " !");
    if parts.len() != 2 {
        return Err(ConstructError::Syntax("Invalid syntax".to_string()));
    }
    Ok(TokenKind::Macro {
        name: parts[0].clone(),
        value: parts[1].clone(),
    })
}

/// Splits a `NAME (a1, a2, ...)` style line into `["call"/"syscall", name,
/// args...]`. Note that because `split` drops empty pieces, an empty
/// argument slot (`f(a,,b)`) is silently absorbed rather than ever
/// reaching the "empty argument" check below -- a quirk inherited
/// verbatim from the original implementation.
fn split_call_like(line: &str) -> Vec<String> {
    split(line, " (),")
}

fn parse_funcall(line: &str) -> Result<TokenKind> {
    let parts = split_call_like(line);
    let name = parts
        .get(1)
        .ok_or_else(|| ConstructError::Syntax("Invalid syntax".to_string()))?
        .clone();
    let mut args = Vec::new();
    for arg in &parts[2..] {
        if arg.is_empty() {
            return Err(ConstructError::Syntax("Invalid syntax".to_string()));
        }
        args.push(arg.clone());
    }
    Ok(TokenKind::Funcall { name, args })
}

fn parse_syscall(line: &str) -> Result<TokenKind> {
    let parts = split_call_like(line);
    let name = parts
        .get(1)
        .ok_or_else(|| ConstructError::Syntax("Invalid syntax".to_string()))?;
    let number = syscall_number(name).ok_or_else(|| ConstructError::UnknownSyscall(name.clone()))?;
    let mut args = Vec::new();
    for arg in &parts[2..] {
        if arg.is_empty() {
            return Err(ConstructError::Syntax("Invalid syntax".to_string()));
        }
        args.push(arg.clone());
    }
    Ok(TokenKind::Syscall { number, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_free_lines() {
        let tokens = parse_construct("\n\t\n   \n").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn parses_section() {
        let tokens = parse_construct("section .text").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0].kind, TokenKind::Section { name } if name == ".text"));
    }

    #[test]
    fn parses_tag() {
        let tokens = parse_construct("main:").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Tag { name } if name == "main"));
    }

    #[test]
    fn parses_while_condition() {
        let tokens = parse_construct("while rax l 10:").unwrap();
        match &tokens[0].kind {
            TokenKind::While { condition } => {
                assert_eq!(condition.arg1, "rax");
                assert_eq!(condition.op, Comparison::L);
                assert_eq!(condition.arg2, "10");
            }
            _ => panic!("expected While"),
        }
    }

    #[test]
    fn parses_function_with_params() {
        let tokens = parse_construct("function add(a: dq, b: dq):").unwrap();
        match &tokens[0].kind {
            TokenKind::Function { name, params } => {
                assert_eq!(name, "add");
                assert_eq!(params.len(), 2);
                assert_eq!(params[0].0, "a");
                assert_eq!(params[0].1, Bitwidth::Bit64);
            }
            _ => panic!("expected Function"),
        }
    }

    #[test]
    fn parses_function_without_params() {
        let tokens = parse_construct("function main():").unwrap();
        match &tokens[0].kind {
            TokenKind::Function { name, params } => {
                assert_eq!(name, "main");
                assert!(params.is_empty());
            }
            _ => panic!("expected Function"),
        }
    }

    #[test]
    fn parses_cmd_with_two_args() {
        let tokens = parse_construct("mov rax, 1").unwrap();
        match &tokens[0].kind {
            TokenKind::Cmd {
                command,
                arg1,
                arg2,
            } => {
                assert_eq!(command, "mov");
                assert_eq!(arg1.as_deref(), Some("rax"));
                assert_eq!(arg2.as_deref(), Some("1"));
            }
            _ => panic!("expected Cmd"),
        }
    }

    #[test]
    fn parses_cmd_bare() {
        let tokens = parse_construct("ret").unwrap();
        match &tokens[0].kind {
            TokenKind::Cmd {
                command,
                arg1,
                arg2,
            } => {
                assert_eq!(command, "ret");
                assert!(arg1.is_none());
                assert!(arg2.is_none());
            }
            _ => panic!("expected Cmd"),
        }
    }

    #[test]
    fn trailing_comma_is_syntax_error() {
        let err = parse_construct("mov rax,").unwrap_err();
        assert!(matches!(err, ConstructError::Syntax(_)));
    }

    #[test]
    fn extra_commas_is_syntax_error() {
        let err = parse_construct("mov rax, 1, 2").unwrap_err();
        assert!(matches!(err, ConstructError::Syntax(_)));
    }

    #[test]
    fn parses_macro() {
        let tokens = parse_construct("!a rdi").unwrap();
        match &tokens[0].kind {
            TokenKind::Macro { name, value } => {
                assert_eq!(name, "a");
                assert_eq!(value, "rdi");
            }
            _ => panic!("expected Macro"),
        }
    }

    #[test]
    fn parses_funcall() {
        let tokens = parse_construct("call f(rsi, rdi)").unwrap();
        match &tokens[0].kind {
            TokenKind::Funcall { name, args } => {
                assert_eq!(name, "f");
                assert_eq!(args, &vec!["rsi".to_string(), "rdi".to_string()]);
            }
            _ => panic!("expected Funcall"),
        }
    }

    #[test]
    fn parses_syscall() {
        let tokens = parse_construct("syscall exit(0)").unwrap();
        match &tokens[0].kind {
            TokenKind::Syscall { number, args } => {
                assert_eq!(*number, 60);
                assert_eq!(args, &vec!["0".to_string()]);
            }
            _ => panic!("expected Syscall"),
        }
    }

    #[test]
    fn unknown_syscall_errors_with_line_context() {
        // parse_construct wraps every parse_line error uniformly, so an
        // UnknownSyscall raised mid-line comes back as a Syntax error
        // carrying the same "Line <n> [<source>]:" prefix as any other.
        let err = parse_construct("syscall not_a_syscall(0)").unwrap_err();
        assert!(matches!(err, ConstructError::Syntax(_)));
        assert!(err.to_string().starts_with("Line 0 [syscall not_a_syscall(0)]:"));
    }

    #[test]
    fn data_mode_tracks_sections() {
        let src = "section .data\nfoo db 1\nsection .text\nret";
        let tokens = parse_construct(src).unwrap();
        assert!(matches!(&tokens[1].kind, TokenKind::Data { .. }));
        assert!(matches!(&tokens[3].kind, TokenKind::Cmd { .. }));
    }

    #[test]
    fn indentation_jump_is_rejected() {
        let src = "function main():\n\t\tret";
        let err = parse_construct(src).unwrap_err();
        assert!(matches!(err, ConstructError::Syntax(msg) if msg.contains("extra indentation")));
    }

    #[test]
    fn error_carries_line_context() {
        let err = parse_construct("mov rax,").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Line 0 [mov rax,]:"));
    }
}
