//! Token cursor over `quick-xml` events.
//!
//! Flattens the raw event stream into element starts, element ends and
//! merged text runs, with one token of lookahead and the path of open
//! elements for error reporting.

use std::collections::VecDeque;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use super::error::{ParseError, ParseResult};

/// A structural XML token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Element start; `namespace` is the URI declared on the element itself
    /// for its prefix, if any.
    Start {
        name: String,
        namespace: Option<String>,
    },
    End,
    /// Adjacent text, character data and references, decoded and merged.
    Text(String),
    Eof,
}

pub(crate) struct XmlCursor<'a> {
    reader: Reader<&'a [u8]>,
    queue: VecDeque<Token>,
    path: Vec<String>,
}

impl<'a> XmlCursor<'a> {
    pub(crate) fn new(doc: &'a str) -> Self {
        let mut reader = Reader::from_str(doc);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            queue: VecDeque::new(),
            path: Vec::new(),
        }
    }

    /// Slash-separated names of the open elements.
    pub(crate) fn path(&self) -> String {
        self.path.join("/")
    }

    /// Attaches the current path to `err`.
    pub(crate) fn error(&self, err: ParseError) -> ParseError {
        err.at(self.path())
    }

    pub(crate) fn peek(&mut self) -> ParseResult<&Token> {
        if self.queue.is_empty() {
            self.fill()?;
        }
        self.queue
            .front()
            .ok_or_else(|| self.error(ParseError::xml("token stream exhausted")))
    }

    pub(crate) fn next(&mut self) -> ParseResult<Token> {
        if self.queue.is_empty() {
            self.fill()?;
        }
        self.queue
            .pop_front()
            .ok_or_else(|| self.error(ParseError::xml("token stream exhausted")))
    }

    /// Consumes whitespace-only text.
    ///
    /// ## Errors
    /// Fails with `UnexpectedText` on text containing anything else.
    pub(crate) fn skip_whitespace(&mut self) -> ParseResult<()> {
        while let Token::Text(text) = self.peek()? {
            if !text.chars().all(char::is_whitespace) {
                let err = ParseError::unexpected_text(text);
                return Err(self.error(err));
            }
            self.next()?;
        }
        Ok(())
    }

    /// Enters the next child element of the current element.
    ///
    /// Returns `None`, leaving the end tag unconsumed, once the current
    /// element has no more children.
    pub(crate) fn next_child(&mut self) -> ParseResult<Option<String>> {
        Ok(self.next_child_ns()?.map(|(name, _)| name))
    }

    /// Like [`Self::next_child`], also returning the element's namespace.
    pub(crate) fn next_child_ns(&mut self) -> ParseResult<Option<(String, Option<String>)>> {
        self.skip_whitespace()?;
        match self.next()? {
            Token::Start { name, namespace } => {
                self.path.push(name.clone());
                Ok(Some((name, namespace)))
            }
            Token::End => {
                self.queue.push_front(Token::End);
                Ok(None)
            }
            Token::Eof => {
                if self.path.is_empty() {
                    Ok(None)
                } else {
                    Err(self.error(ParseError::xml("unexpected end of document")))
                }
            }
            Token::Text(_) => Err(self.error(ParseError::xml("text after whitespace"))),
        }
    }

    /// Enters the next child, which must be `expected`.
    pub(crate) fn enter(&mut self, expected: &str) -> ParseResult<()> {
        match self.next_child()? {
            Some(name) if name == expected => Ok(()),
            Some(name) => Err(self.error(ParseError::unexpected_element(&name))),
            None => Err(self.error(ParseError::missing_element(expected))),
        }
    }

    /// Consumes the end tag of the current element.
    ///
    /// ## Errors
    /// Fails with `UnexpectedElement` if another child follows.
    pub(crate) fn leave(&mut self) -> ParseResult<()> {
        match self.next_child()? {
            None => {
                self.next()?;
                self.path.pop();
                Ok(())
            }
            Some(name) => Err(self.error(ParseError::unexpected_element(&name))),
        }
    }

    /// Skips the rest of the current element, nested content included.
    pub(crate) fn skip_current(&mut self) -> ParseResult<()> {
        let mut depth = 0_usize;
        loop {
            match self.next()? {
                Token::Start { .. } => depth += 1,
                Token::End if depth == 0 => {
                    self.path.pop();
                    return Ok(());
                }
                Token::End => depth -= 1,
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(self.error(ParseError::xml("unexpected end of document")));
                }
            }
        }
    }

    /// Reads the text content of the current element verbatim, stopping
    /// before its end tag.
    ///
    /// ## Errors
    /// Fails with `UnexpectedElement` if the element has child elements.
    pub(crate) fn text(&mut self) -> ParseResult<String> {
        let mut out = String::new();
        loop {
            match self.next()? {
                Token::Text(text) => out.push_str(&text),
                Token::End => {
                    self.queue.push_front(Token::End);
                    return Ok(out);
                }
                Token::Start { name, .. } => {
                    self.path.push(name.clone());
                    return Err(self.error(ParseError::unexpected_element(&name)));
                }
                Token::Eof => {
                    return Err(self.error(ParseError::xml("unexpected end of document")));
                }
            }
        }
    }

    /// Pulls raw events until at least one token is queued.
    fn fill(&mut self) -> ParseResult<()> {
        let mut text: Option<String> = None;
        loop {
            let event = self
                .reader
                .read_event()
                .map_err(|e| self.error(ParseError::from(e)))?;
            let structural = match event {
                Event::Start(e) => Some(vec![self.start_token(&e)?]),
                Event::Empty(e) => Some(vec![self.start_token(&e)?, Token::End]),
                Event::End(_) => Some(vec![Token::End]),
                Event::Eof => Some(vec![Token::Eof]),
                Event::Text(e) => {
                    let decoded = self.reader.decoder().decode(e.as_ref())?;
                    text.get_or_insert_with(String::new).push_str(&decoded);
                    None
                }
                Event::CData(e) => {
                    let raw = std::str::from_utf8(e.as_ref())?;
                    text.get_or_insert_with(String::new).push_str(raw);
                    None
                }
                Event::GeneralRef(e) => {
                    let name = e.decode()?;
                    let resolved = resolve_reference(&name).ok_or_else(|| {
                        self.error(ParseError::invalid_value(format!(
                            "unknown entity reference &{name};"
                        )))
                    })?;
                    text.get_or_insert_with(String::new).push_str(&resolved);
                    None
                }
                // Declarations, comments and processing instructions
                _ => None,
            };

            if let Some(tokens) = structural {
                if let Some(text) = text {
                    self.queue.push_back(Token::Text(text));
                }
                self.queue.extend(tokens);
                return Ok(());
            }
        }
    }

    fn start_token(&self, e: &BytesStart<'_>) -> ParseResult<Token> {
        let name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
        let qname = e.name();
        let prefix = qname.prefix().map(|p| p.as_ref().to_vec());

        let mut namespace = None;
        for attr in e.attributes() {
            let attr = attr?;
            let key = attr.key.as_ref();
            let declares = match &prefix {
                Some(p) => key.strip_prefix(b"xmlns:") == Some(p.as_slice()),
                None => key == b"xmlns",
            };
            if declares {
                namespace = Some(std::str::from_utf8(&attr.value)?.to_owned());
            }
        }

        Ok(Token::Start { name, namespace })
    }
}

/// Resolves a predefined entity or a character reference (`#10`, `#x41`).
fn resolve_reference(name: &str) -> Option<String> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    resolve_predefined_entity(name).map(str::to_owned)
}
