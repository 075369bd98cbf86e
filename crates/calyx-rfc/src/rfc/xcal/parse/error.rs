//! xCal parse error types.

use std::fmt;

/// Result type for xCal parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while reading an xCal document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error kind.
    pub kind: ParseErrorKind,
    /// Slash-separated path of the element being read, e.g.
    /// `icalendar/vcalendar/components/vevent/properties/summary`.
    pub path: String,
    /// Error message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error without a location.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: String::new(),
            message: message.into(),
        }
    }

    /// Attaches the element path, keeping one that is already set.
    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        if self.path.is_empty() {
            self.path = path.into();
        }
        self
    }

    /// Creates an XML error.
    #[must_use]
    pub fn xml(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::XmlError, message)
    }

    /// Creates a missing element error.
    #[must_use]
    pub fn missing_element(name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingElement,
            format!("missing required element: {name}"),
        )
    }

    /// Creates an unexpected element error.
    #[must_use]
    pub fn unexpected_element(name: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedElement,
            format!("unexpected element: {name}"),
        )
    }

    #[must_use]
    pub fn unexpected_text(text: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedText,
            format!("unexpected text content: {text:?}"),
        )
    }

    /// Creates an unknown enumeration token error.
    #[must_use]
    pub fn unknown_token(what: &str, token: &str) -> Self {
        Self::new(
            ParseErrorKind::UnknownToken,
            format!("unknown {what} token: {token:?}"),
        )
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, message)
    }

    /// Creates an unsupported namespace error.
    #[must_use]
    pub fn unsupported_namespace(ns: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedNamespace,
            format!("unsupported namespace: {ns}"),
        )
    }

    /// Creates an unsupported version error.
    #[must_use]
    pub fn unsupported_version(version: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedVersion,
            format!("unsupported iCalendar version: {version}"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "{} at {}: {}", self.kind, self.path, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        Self::xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::new(ParseErrorKind::EncodingError, err.to_string())
    }
}

impl From<quick_xml::encoding::EncodingError> for ParseError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::new(ParseErrorKind::EncodingError, err.to_string())
    }
}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// XML parsing error.
    XmlError,
    /// Text could not be decoded.
    EncodingError,
    /// Missing required element.
    MissingElement,
    /// Element not allowed at this position.
    UnexpectedElement,
    /// Non-whitespace text where only elements are allowed.
    UnexpectedText,
    /// Enumerated value outside the known token table.
    UnknownToken,
    /// Malformed or out-of-range value.
    InvalidValue,
    /// Root element in a foreign namespace.
    UnsupportedNamespace,
    /// Calendar version other than 2.0.
    UnsupportedVersion,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XmlError => write!(f, "XML error"),
            Self::EncodingError => write!(f, "encoding error"),
            Self::MissingElement => write!(f, "missing element"),
            Self::UnexpectedElement => write!(f, "unexpected element"),
            Self::UnexpectedText => write!(f, "unexpected text"),
            Self::UnknownToken => write!(f, "unknown token"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::UnsupportedNamespace => write!(f, "unsupported namespace"),
            Self::UnsupportedVersion => write!(f, "unsupported version"),
        }
    }
}
