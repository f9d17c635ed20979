//! Mapping errors.

use thiserror::Error;

/// Failure while building the documentation tree.
///
/// The mapper is tolerant of missing optional data; the only hard failure is
/// a record that is classified as a module, entity or method but carries no
/// `@name` tag to identify it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("{kind} record is missing required @{tag} tag{}", context_suffix(.context))]
    MissingRequiredTag {
        /// What the record was classified as ("module", "entity", "method").
        kind: &'static str,
        tag: &'static str,
        /// Record description or first tag text, to help locate the comment.
        context: Option<String>,
    },
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(text) => format!(" (near \"{}\")", text),
        None => String::new(),
    }
}
