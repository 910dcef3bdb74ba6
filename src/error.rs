use std::fmt::{Display, Formatter};

/// A parse error.
///
/// Parsing is all-or-nothing: when any of these is returned no part of the
/// document has been added to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `<` without a following `>`.
    UnclosedTag {
        /// Byte offset of the `<`.
        position: usize,
    },
    /// A closing tag that doesn't match the innermost open element.
    ///
    /// A closing tag at the top level, where only the synthetic root is
    /// open, is reported with the root name as `expected`.
    MismatchedCloseTag {
        /// Name of the element that is open.
        expected: String,
        /// Name found in the closing tag.
        found: String,
        /// Byte offset of the `<` of the closing tag.
        position: usize,
    },
    /// Input ended while an element was still open.
    UnclosedElement {
        /// Name of the innermost open element.
        name: String,
    },
}

impl ParseError {
    /// Byte offset in the input where the error was detected, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnclosedTag { position } => Some(*position),
            ParseError::MismatchedCloseTag { position, .. } => Some(*position),
            ParseError::UnclosedElement { .. } => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnclosedTag { position } => {
                write!(f, "unclosed tag at {}", position)
            }
            ParseError::MismatchedCloseTag {
                expected,
                found,
                position,
            } => write!(
                f,
                "closing tag </{}> at {} does not match open element <{}>",
                found, position, expected
            ),
            ParseError::UnclosedElement { name } => {
                write!(f, "element <{}> is never closed", name)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors returned by tree manipulation and the file convenience
/// operations.
#[derive(Debug)]
pub enum Error {
    /// The document text is malformed.
    Parse(ParseError),
    /// The file contents use an encoding we cannot decode.
    UnknownEncoding,
    /// An arena structure error, such as appending a node to its own
    /// descendant.
    NodeError(indextree::NodeError),
    /// I/O error while reading or writing a file.
    Io(std::io::Error),
}

impl Error {
    /// The parse error, if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::UnknownEncoding => write!(f, "unknown encoding"),
            Error::NodeError(e) => write!(f, "node error: {}", e),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::NodeError(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::NodeError(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
