use std::borrow::Cow;

use encoding_rs::Encoding;
use tracing::debug;
use xhtmlchardet::detect;

use crate::error::Error;

pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).ok()?;
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    Encoding::for_label(label.as_bytes())
}

/// Decode document bytes to text. A byte order mark takes precedence over
/// the detected encoding.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<'_, str>, Error> {
    let encoding = encoding(data, None).ok_or(Error::UnknownEncoding)?;
    let (text, used, had_errors) = encoding.decode(data);
    if had_errors {
        debug!(encoding = used.name(), "malformed byte sequences replaced");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_without_declaration() {
        let data = b"<a></a>";
        let enc = encoding(data, None).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_decode_utf8() {
        let data = "<a>caf\u{e9}</a>".as_bytes();
        assert_eq!(decode(data).unwrap(), "<a>caf\u{e9}</a>");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice(b"<a>1</a>");
        assert_eq!(decode(&data).unwrap(), "<a>1</a>");
    }

    #[test]
    fn test_decode_utf16_bom() {
        let mut data = vec![0xFF, 0xFE];
        for unit in "<a>1</a>".encode_utf16() {
            data.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode(&data).unwrap(), "<a>1</a>");
    }
}
