//! The token model (§C3).
//!
//! The original implementation represents a token as a struct holding one
//! raw pointer per possible payload variant plus a discriminant, with a
//! constructor/destructor `switch` that allocates/frees whichever pointer
//! matches the discriminant (`construct_types.h`'s `con_token`). Design
//! note §9 flags this as the one redesign this crate must make: a real
//! tagged union, one active payload per discriminant, which Rust's `enum`
//! gives for free — there is no `if (ptr != null)` branch to get wrong and
//! no manual destructor, since dropping a `Token` recursively drops its
//! `children` and its single active payload automatically.

/// The closed set of comparison operators `if`/`while` conditions use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    E,
    Ne,
    L,
    G,
    Le,
    Ge,
}

impl Comparison {
    pub fn parse(s: &str) -> Option<Comparison> {
        match s {
            "e" => Some(Comparison::E),
            "ne" => Some(Comparison::Ne),
            "l" => Some(Comparison::L),
            "g" => Some(Comparison::G),
            "le" => Some(Comparison::Le),
            "ge" => Some(Comparison::Ge),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::E => "e",
            Comparison::Ne => "ne",
            Comparison::L => "l",
            Comparison::G => "g",
            Comparison::Le => "le",
            Comparison::Ge => "ge",
        }
    }

    /// `e<->ne, l<->ge, g<->le`. Involutive: `inverse(inverse(op)) == op`.
    pub fn inverse(self) -> Comparison {
        match self {
            Comparison::E => Comparison::Ne,
            Comparison::Ne => Comparison::E,
            Comparison::L => Comparison::Ge,
            Comparison::Ge => Comparison::L,
            Comparison::G => Comparison::Le,
            Comparison::Le => Comparison::G,
        }
    }
}

/// Operand bitwidth. Default for the whole program is 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitwidth {
    Bit8,
    Bit16,
    Bit32,
    Bit64,
}

impl Bitwidth {
    pub fn from_width_keyword(s: &str) -> Option<Bitwidth> {
        match s {
            "db" => Some(Bitwidth::Bit8),
            "dw" => Some(Bitwidth::Bit16),
            "dd" => Some(Bitwidth::Bit32),
            "dq" => Some(Bitwidth::Bit64),
            _ => None,
        }
    }
}

/// An `if`/`while` condition: `arg1 OP arg2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub arg1: String,
    pub op: Comparison,
    pub arg2: String,
}

/// The active payload of a [`Token`]. Exactly one variant is ever live for
/// a given token, enforced by the type system instead of a discriminant +
/// nullable-pointer convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Section {
        name: String,
    },
    Tag {
        name: String,
    },
    While {
        condition: Condition,
    },
    If {
        condition: Condition,
    },
    Function {
        name: String,
        params: Vec<(String, Bitwidth)>,
    },
    Cmd {
        command: String,
        arg1: Option<String>,
        arg2: Option<String>,
    },
    Macro {
        name: String,
        value: String,
    },
    Funcall {
        name: String,
        args: Vec<String>,
    },
    Syscall {
        number: u16,
        args: Vec<String>,
    },
    Data {
        line: String,
    },
}

/// A node in the token tree. `children` is only ever populated for
/// `If`/`While`/`Function` nodes (source-level nesting, then the
/// desugar-pass-injected preamble/body/postamble sequences), but lives on
/// every token so passes can splice uniformly without matching on kind
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub indentation: i32,
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(kind: TokenKind, indentation: i32) -> Token {
        Token {
            kind,
            indentation,
            children: Vec::new(),
        }
    }

    pub fn cmd(command: impl Into<String>, indentation: i32) -> Token {
        Token::new(
            TokenKind::Cmd {
                command: command.into(),
                arg1: None,
                arg2: None,
            },
            indentation,
        )
    }

    pub fn cmd1(command: impl Into<String>, arg1: impl Into<String>, indentation: i32) -> Token {
        Token::new(
            TokenKind::Cmd {
                command: command.into(),
                arg1: Some(arg1.into()),
                arg2: None,
            },
            indentation,
        )
    }

    pub fn cmd2(
        command: impl Into<String>,
        arg1: impl Into<String>,
        arg2: impl Into<String>,
        indentation: i32,
    ) -> Token {
        Token::new(
            TokenKind::Cmd {
                command: command.into(),
                arg1: Some(arg1.into()),
                arg2: Some(arg2.into()),
            },
            indentation,
        )
    }

    pub fn tag(name: impl Into<String>, indentation: i32) -> Token {
        Token::new(
            TokenKind::Tag {
                name: name.into(),
            },
            indentation,
        )
    }

    /// Whether this token kind is one of the three structural kinds that
    /// may own children: `If`, `While`, `Function`.
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::If { .. } | TokenKind::While { .. } | TokenKind::Function { .. }
        )
    }

    /// Mutable access to every text field macro substitution may rewrite:
    /// `Cmd::arg1`/`arg2` and `If`/`While`'s `condition.arg1`/`arg2`. Every
    /// other kind has no substitutable text fields and yields nothing.
    pub fn substitutable_fields_mut(&mut self) -> Vec<&mut String> {
        match &mut self.kind {
            TokenKind::Cmd { arg1, arg2, .. } => {
                let mut fields = Vec::with_capacity(2);
                if let Some(a) = arg1 {
                    fields.push(a);
                }
                if let Some(a) = arg2 {
                    fields.push(a);
                }
                fields
            }
            TokenKind::If { condition } | TokenKind::While { condition } => {
                vec![&mut condition.arg1, &mut condition.arg2]
            }
            _ => Vec::new(),
        }
    }
}
