//! JSDoc tag parser: unwrapped comment text to [`AnnotationRecord`].
//!
//! Each line starting with `@word` opens a tag; following lines continue it
//! until the next tag line. How the tag body splits into type, name and
//! description depends on the title.

use super::typeexpr;
use crate::record::{AnnotationRecord, Tag, TypeExpression};
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z][A-Za-z0-9_]*)(?:[ \t]+(.*))?$").unwrap());

/// `{type} name description`
const TYPED_NAME_TITLES: &[&str] = &["param", "arg", "argument", "property", "prop", "config"];

/// `{type} description`
const TYPED_TITLES: &[&str] = &["returns", "return"];

/// `name description`
const NAME_TITLES: &[&str] = &["name", "module", "requires"];

/// Parse one comment (decoration already removed).
pub fn parse(comment: &str) -> AnnotationRecord {
    let mut description = String::new();
    let mut open: Vec<(String, String)> = Vec::new();

    for line in comment.lines() {
        let trimmed = line.trim_start();
        if let Some(caps) = RE_TAG_LINE.captures(trimmed) {
            let body = caps.get(2).map_or("", |m| m.as_str());
            open.push((caps[1].to_string(), body.to_string()));
            continue;
        }
        match open.last_mut() {
            Some((_, body)) => {
                body.push('\n');
                body.push_str(line);
            }
            None => {
                if !description.is_empty() {
                    description.push('\n');
                }
                description.push_str(line);
            }
        }
    }

    AnnotationRecord {
        description: description.trim().to_string(),
        tags: open
            .into_iter()
            .map(|(title, body)| parse_tag(title, &body))
            .collect(),
    }
}

fn parse_tag(title: String, body: &str) -> Tag {
    let mut tag = Tag::new(title);
    let title = tag.title.as_str();

    if TYPED_NAME_TITLES.contains(&title) {
        let (ty, rest) = take_type(body);
        let (name, rest) = take_word(rest);
        tag.ty = ty;
        if let Some(inner) = name.strip_prefix('[').and_then(|n| n.strip_suffix(']')) {
            let (name, default) = match inner.split_once('=') {
                Some((n, d)) => (n.trim(), Some(d.trim().to_string())),
                None => (inner.trim(), None),
            };
            tag.name = non_empty(name);
            tag.default = default;
            tag.ty = Some(match tag.ty.take() {
                Some(opt @ TypeExpression::OptionalType { .. }) => opt,
                Some(other) => TypeExpression::optional(other),
                None => TypeExpression::optional(TypeExpression::Unknown),
            });
        } else {
            tag.name = non_empty(name);
        }
        tag.description = non_empty(rest);
    } else if TYPED_TITLES.contains(&title) {
        let (ty, rest) = take_type(body);
        tag.ty = ty;
        tag.description = non_empty(rest);
    } else if NAME_TITLES.contains(&title) {
        let (name, rest) = take_word(body);
        tag.name = non_empty(name);
        tag.description = non_empty(rest);
    } else {
        tag.description = non_empty(body);
    }

    tag
}

/// Leading `{...}` type with balanced braces.
fn take_type(body: &str) -> (Option<TypeExpression>, &str) {
    let trimmed = body.trim_start();
    if !trimmed.starts_with('{') {
        return (None, body);
    }
    let mut depth = 0;
    for (i, c) in trimmed.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let ty = typeexpr::parse(&trimmed[1..i]);
                    return (Some(ty), &trimmed[i + 1..]);
                }
            }
            _ => {}
        }
    }
    // Unbalanced: treat it all as description.
    (None, body)
}

/// Leading whitespace-delimited word. A `[...]` optional name may contain
/// spaces around its default (`[name = 'a b']`).
fn take_word(body: &str) -> (&str, &str) {
    let trimmed = body.trim_start();
    if trimmed.starts_with('[') {
        if let Some(end) = trimmed.find(']') {
            return (&trimmed[..=end], &trimmed[end + 1..]);
        }
    }
    match trimmed.find(char::is_whitespace) {
        Some(end) => (&trimmed[..end], &trimmed[end..]),
        None => (trimmed, ""),
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
