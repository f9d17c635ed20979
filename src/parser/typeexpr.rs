//! Closure-compiler type strings (`{Array.<string>}`, `{number=}`, ...) to
//! [`TypeExpression`].
//!
//! Only the shapes the mapper understands are built structurally; unions,
//! record types, function types and the like become `Unknown`.

use crate::record::TypeExpression;
use regex::Regex;
use std::sync::LazyLock;

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$.]*$").unwrap());

static RE_APPLICATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\.?<(.*)>$").unwrap());

pub fn parse(text: &str) -> TypeExpression {
    let text = text.trim();

    // Nullability markers carry no information for the model.
    if let Some(rest) = text.strip_prefix('?').or_else(|| text.strip_prefix('!')) {
        if !rest.is_empty() {
            return parse(rest);
        }
    }

    if let Some(rest) = text.strip_suffix('=') {
        return TypeExpression::optional(parse(rest));
    }

    if let Some(rest) = text.strip_suffix("[]") {
        return TypeExpression::array_of(vec![parse(rest)]);
    }

    if let Some(caps) = RE_APPLICATION.captures(text) {
        return TypeExpression::TypeApplication {
            base: Box::new(TypeExpression::name(&caps[1])),
            applications: split_top_level(&caps[2]).into_iter().map(parse).collect(),
        };
    }

    if RE_NAME.is_match(text) {
        return TypeExpression::name(text);
    }

    TypeExpression::Unknown
}

/// Split on commas that are not nested inside `<>`, `()`, `{}` or `[]`.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '{' | '[' => depth += 1,
            '>' | ')' | '}' | ']' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
