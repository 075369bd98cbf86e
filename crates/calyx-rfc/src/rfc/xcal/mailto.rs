//! `mailto:` URIs for calendar addresses.
//!
//! Addresses are written as `mailto:` followed by the percent-encoded form of
//! `Name<email>`; the name part is empty when the contact has none.

use super::names::MAILTO_SCHEME;

/// Builds the `mailto:` URI for `email`, carrying `name` when present.
#[must_use]
pub fn to_mailto(email: &str, name: Option<&str>) -> String {
    let raw = format!("{}<{email}>", name.unwrap_or_default());
    format!("{MAILTO_SCHEME}{}", urlencoding::encode(&raw))
}

/// Splits a `mailto:` URI into email and optional display name.
///
/// Accepts both the wrapped `Name<email>` form and a bare address. Returns
/// `None` when `uri` is not a `mailto:` URI or does not decode to UTF-8.
#[must_use]
pub fn from_mailto(uri: &str) -> Option<(String, Option<String>)> {
    let encoded = uri.strip_prefix(MAILTO_SCHEME)?;
    let decoded = urlencoding::decode(encoded).ok()?;

    // The email cannot contain '<', so the last one opens it.
    if decoded.ends_with('>')
        && let Some(open) = decoded.rfind('<')
    {
        let name = &decoded[..open];
        let email = &decoded[open + 1..decoded.len() - 1];
        return Some((
            email.to_string(),
            (!name.is_empty()).then(|| name.to_string()),
        ));
    }

    Some((decoded.into_owned(), None))
}
