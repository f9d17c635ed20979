//! Tag classification by title, with synonym aliases.
//!
//! Each predicate answers "does this tag play role X?". Mismatches are simply
//! `false`; nothing here can fail.

use crate::record::Tag;

const DESCRIPTION: &[&str] = &["description", "desc"];
const DEPRECATED: &[&str] = &["deprecated"];
const METHOD_OF: &[&str] = &["methodOf"];
const MODULE: &[&str] = &["module"];
const NAME: &[&str] = &["name"];
const KIND: &[&str] = &["ngdoc", "yadop"];
const PARAM: &[&str] = &["param", "arg", "argument"];
const REQUIRES: &[&str] = &["requires"];
const RETURNS: &[&str] = &["returns", "return"];

/// Kind-marker values (and JSDoc tag titles) that denote a method.
pub const METHOD_KINDS: &[&str] = &["method", "function", "func"];

/// Kind-marker value that declares a module.
pub const MODULE_KIND: &str = "module";

fn titled(tag: &Tag, aliases: &[&str]) -> bool {
    aliases.contains(&tag.title.as_str())
}

pub fn is_description(tag: &Tag) -> bool {
    titled(tag, DESCRIPTION)
}

pub fn is_deprecated(tag: &Tag) -> bool {
    titled(tag, DEPRECATED)
}

/// `@methodOf Entity`: the owner's name is in the description.
pub fn is_method_of(tag: &Tag) -> bool {
    titled(tag, METHOD_OF)
}

/// `@module name`: the module's name is in the name field.
pub fn is_module(tag: &Tag) -> bool {
    titled(tag, MODULE)
}

pub fn is_name(tag: &Tag) -> bool {
    titled(tag, NAME)
}

/// `@ngdoc kind` / `@yadop kind`
pub fn is_kind(tag: &Tag) -> bool {
    titled(tag, KIND)
}

pub fn is_param(tag: &Tag) -> bool {
    titled(tag, PARAM)
}

pub fn is_requires(tag: &Tag) -> bool {
    titled(tag, REQUIRES)
}

pub fn is_returns(tag: &Tag) -> bool {
    titled(tag, RETURNS)
}

/// Kind marker whose value is `module`.
pub fn is_module_kind(tag: &Tag) -> bool {
    is_kind(tag) && tag.description.as_deref() == Some(MODULE_KIND)
}

/// Kind marker whose value is a method alias, or a bare `@method` flag.
pub fn is_method_kind(tag: &Tag) -> bool {
    let kind_value = is_kind(tag)
        && tag
            .description
            .as_deref()
            .is_some_and(|d| METHOD_KINDS.contains(&d));
    kind_value || titled(tag, METHOD_KINDS)
}
