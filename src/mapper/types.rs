//! Type expression normalization.
//!
//! Reduces a structured type to a display string plus an optional flag.
//! Exactly one `OptionalType` layer is unwrapped, then one `Array`
//! application. Deeper nesting degrades to "no type" instead of failing.

use crate::record::TypeExpression;

/// Normalized view of a tag's type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedType {
    pub name: Option<String>,
    pub optional: bool,
}

pub fn normalize(expr: Option<&TypeExpression>) -> NormalizedType {
    let Some(expr) = expr else {
        return NormalizedType::default();
    };

    let (expr, optional) = match expr {
        TypeExpression::OptionalType { inner } => (inner.as_ref(), true),
        other => (other, false),
    };

    NormalizedType {
        name: type_name(expr),
        optional,
    }
}

fn type_name(expr: &TypeExpression) -> Option<String> {
    match expr {
        TypeExpression::NameExpression { name } => Some(name.clone()),
        TypeExpression::TypeApplication { base, applications } if is_array(base) => {
            let names: Vec<&str> = applications
                .iter()
                .filter_map(|app| match app {
                    TypeExpression::NameExpression { name } => Some(name.as_str()),
                    _ => None,
                })
                .collect();
            Some(format!("{}[]", names.join(",")))
        }
        _ => None,
    }
}

fn is_array(base: &TypeExpression) -> bool {
    matches!(base, TypeExpression::NameExpression { name } if name == "Array")
}
