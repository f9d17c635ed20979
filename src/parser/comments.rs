//! `/** ... */` comment extraction from JavaScript source.
//!
//! A small character scanner, not a tokenizer: it tracks string literals,
//! template literals and `//` line comments so that comment markers inside
//! them are not picked up. Regex literals are not recognised.

use regex::Regex;
use std::sync::LazyLock;

static RE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*?[ \t]?").unwrap());

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment { doc: bool, start: usize },
    Str(char),
}

/// Collect the unwrapped text of every documentation comment, in order.
pub fn extract(source: &str) -> Vec<String> {
    let mut comments = Vec::new();
    let mut state = State::Code;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match state {
            State::Code => match c {
                '/' => match chars.peek() {
                    Some(&(_, '/')) => {
                        chars.next();
                        state = State::LineComment;
                    }
                    Some(&(_, '*')) => {
                        chars.next();
                        let rest = &source[i + 2..];
                        // `/**/` is an empty plain comment, `/***` a banner
                        let doc = rest.starts_with('*')
                            && !rest.starts_with("*/")
                            && !rest.starts_with("**");
                        if doc {
                            chars.next();
                        }
                        let start = if doc { i + 3 } else { i + 2 };
                        state = State::BlockComment { doc, start };
                    }
                    _ => {}
                },
                '\'' | '"' | '`' => state = State::Str(c),
                _ => {}
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment { doc, start } => {
                if c == '*' && matches!(chars.peek(), Some(&(_, '/'))) {
                    chars.next();
                    if doc {
                        comments.push(unwrap(&source[start..i]));
                    }
                    state = State::Code;
                }
            }
            State::Str(quote) => match c {
                '\\' => {
                    chars.next();
                }
                '\n' if quote != '`' => state = State::Code,
                _ if c == quote => state = State::Code,
                _ => {}
            },
        }
    }

    comments
}

/// Strip the leading `*` decoration of each comment line.
pub fn unwrap(body: &str) -> String {
    let lines: Vec<String> = body
        .lines()
        .map(|line| RE_DECORATION.replace(line, "").trim_end().to_string())
        .collect();
    lines.join("\n").trim().to_string()
}
