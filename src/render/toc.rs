//! GitHub-flavored markdown anchors for the entity index.

/// `* [name](#slug) (kind)`
pub fn render_toc_item(name: &str, kind: &str) -> String {
    if kind.is_empty() {
        format!("* [{}](#{})", name, github_slug(name))
    } else {
        format!("* [{}](#{}) ({})", name, github_slug(name), kind)
    }
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
