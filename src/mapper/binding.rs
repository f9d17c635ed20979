//! Binding symbols of component attributes.
//!
//! A component binding is documented as `@param {type} name <` followed by
//! the description. The operator run (`@`, `&`, `<`, `=` or a combination
//! such as `<=`) ends up in the tag description and is moved to
//! [`Attribute::binding`] here.

use crate::model::Attribute;
use regex::Regex;
use std::sync::LazyLock;

static RE_BINDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[@&<=]+").unwrap());

static RE_LEADING_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\n\r]+").unwrap());

/// Move the first binding operator run out of the description.
///
/// Must run on a fully derived attribute; leaves it untouched when the
/// description carries no operator.
pub fn extract_binding(mut attribute: Attribute) -> Attribute {
    let Some(description) = attribute.description.take() else {
        return attribute;
    };

    let Some(found) = RE_BINDING.find(&description) else {
        attribute.description = Some(description);
        return attribute;
    };

    let mut rest = String::with_capacity(description.len());
    rest.push_str(&description[..found.start()]);
    rest.push_str(&description[found.end()..]);

    attribute.binding = Some(found.as_str().to_string());
    attribute.description = Some(strip_leading_breaks(&rest));
    attribute
}

/// Drop line breaks at the very start of a description.
pub fn strip_leading_breaks(text: &str) -> String {
    RE_LEADING_BREAKS.replace(text, "").into_owned()
}
