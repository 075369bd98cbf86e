//! References to people: organizers, attendees and delegates.

use super::check_text;
use crate::error::{RfcError, RfcResult};
use crate::rfc::xcal::names::MAILTO_SCHEME;

/// Identifies a person by email address and/or directory URI.
///
/// At least one of email or URI is always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactReference {
    email: Option<String>,
    name: Option<String>,
    uri: Option<String>,
}

impl ContactReference {
    /// Creates a reference from an email address.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the address is empty, contains angle
    /// brackets or holds text XML cannot carry.
    pub fn new(email: impl Into<String>) -> RfcResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(RfcError::validation(
                "contact reference needs an email address or a URI",
            ));
        }
        if email.contains(['<', '>']) {
            return Err(RfcError::validation(format!(
                "email address {email:?} must not contain angle brackets"
            )));
        }
        check_text("email address", &email)?;

        Ok(Self {
            email: Some(email),
            name: None,
            uri: None,
        })
    }

    /// Creates a reference to a directory entry without an email address.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the URI is empty or a `mailto:` URI;
    /// email addresses go through [`Self::new`].
    pub fn from_uri(uri: impl Into<String>) -> RfcResult<Self> {
        let uri = uri.into();
        if uri.starts_with(MAILTO_SCHEME) {
            return Err(RfcError::validation(format!(
                "{uri:?} is an email address, not a directory URI"
            )));
        }
        Self {
            email: None,
            name: None,
            uri: None,
        }
        .with_uri(uri)
    }

    /// Sets the display name; an empty name clears it.
    ///
    /// ## Errors
    /// Returns `ValidationError` for text XML cannot carry.
    pub fn with_name(mut self, name: impl Into<String>) -> RfcResult<Self> {
        let name = name.into();
        check_text("contact name", &name)?;
        self.name = (!name.is_empty()).then_some(name);
        Ok(self)
    }

    /// Sets the directory URI.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the URI is empty or holds text XML
    /// cannot carry.
    pub fn with_uri(mut self, uri: impl Into<String>) -> RfcResult<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(RfcError::validation("directory URI must not be empty"));
        }
        check_text("directory URI", &uri)?;
        self.uri = Some(uri);
        Ok(self)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_reference() {
        let c = ContactReference::new("jane@example.org")
            .and_then(|c| c.with_name("Jane Doe"))
            .unwrap();
        assert_eq!(c.email(), Some("jane@example.org"));
        assert_eq!(c.name(), Some("Jane Doe"));
        assert_eq!(c.uri(), None);
    }

    #[test]
    fn uri_reference() {
        let c =
            ContactReference::from_uri("urn:uuid:dddaab06-0000-0000-eeb5-cc64ff7f0000").unwrap();
        assert_eq!(c.email(), None);
        assert_eq!(c.uri(), Some("urn:uuid:dddaab06-0000-0000-eeb5-cc64ff7f0000"));
    }

    #[test]
    fn missing_identifier_rejected() {
        assert!(matches!(
            ContactReference::new(""),
            Err(RfcError::ValidationError(_))
        ));
        assert!(matches!(
            ContactReference::from_uri("  "),
            Err(RfcError::ValidationError(_))
        ));
    }

    #[test]
    fn mailto_is_not_a_directory_uri() {
        assert!(matches!(
            ContactReference::from_uri("mailto:jane@example.org"),
            Err(RfcError::ValidationError(_))
        ));
    }

    #[test]
    fn angle_brackets_rejected() {
        assert!(ContactReference::new("Jane <jane@example.org>").is_err());
    }

    #[test]
    fn empty_name_clears() {
        let c = ContactReference::new("a@example.org")
            .and_then(|c| c.with_name("A"))
            .and_then(|c| c.with_name(""))
            .unwrap();
        assert_eq!(c.name(), None);
    }

    #[test]
    fn email_rejects_non_xml_text() {
        assert!(matches!(
            ContactReference::new("a\u{0}@example.org"),
            Err(RfcError::ValidationError(_))
        ));
    }

    #[test]
    fn name_rejects_non_xml_text() {
        let c = ContactReference::new("a@example.org").unwrap();
        assert!(matches!(
            c.with_name("A\u{7}"),
            Err(RfcError::ValidationError(_))
        ));
    }

    #[test]
    fn uri_rejects_non_xml_text() {
        assert!(matches!(
            ContactReference::from_uri("urn:uuid:\u{FFFF}"),
            Err(RfcError::ValidationError(_))
        ));
        let c = ContactReference::new("a@example.org").unwrap();
        assert!(c.with_uri("ldap://example.org/\u{1}").is_err());
    }
}
