//! Free text stored on the model.

use crate::error::{RfcError, RfcResult};

/// The XML 1.0 `Char` production.
const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Rejects text that cannot appear in an XML document.
///
/// ## Errors
/// Returns `ValidationError` naming `field` and the first offending
/// character.
pub(crate) fn check_text(field: &str, value: &str) -> RfcResult<()> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        None => Ok(()),
        Some(c) => Err(RfcError::validation(format!(
            "{field} contains U+{:04X}, which XML does not allow",
            u32::from(c)
        ))),
    }
}
