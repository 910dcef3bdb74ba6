use crate::xmlvalue::Attributes;

fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Split the interior of an opening tag into its name and attributes.
///
/// The name is the first whitespace-delimited token. The rest holds
/// `name="value"` pairs separated by commas; a pair may also start right
/// after the closing quote of the previous one. Inside a value `\"` does not
/// end the value and is kept verbatim. Anything that isn't a complete
/// pair is skipped, and a later duplicate overwrites an earlier one.
pub(crate) fn parse_tag(tag: &str) -> (&str, Attributes) {
    let tag = tag.trim_start_matches(is_whitespace);
    let name_end = tag.find(is_whitespace).unwrap_or(tag.len());
    let (name, rest) = tag.split_at(name_end);
    (name, parse_attributes(rest.trim_start_matches(is_whitespace)))
}

fn parse_attributes(s: &str) -> Attributes {
    let bytes = s.as_bytes();
    let mut attributes = Attributes::new();
    let mut name_start = 0;
    let mut name: Option<&str> = None;
    let mut value_start: Option<usize> = None;

    for (index, &c) in bytes.iter().enumerate() {
        let escaped = index
            .checked_sub(1)
            .and_then(|previous| bytes.get(previous))
            == Some(&b'\\');

        if let Some(start) = value_start {
            if c == b'"' && !escaped {
                if let Some(name) = name.take().filter(|name| !name.is_empty()) {
                    attributes.insert(name.to_string(), s[start..index].to_string());
                }
                value_start = None;
                name_start = index + 1;
            }
            continue;
        }

        match c {
            b',' => name_start = index + 1,
            b'=' => name = Some(s[name_start..index].trim_matches(is_whitespace)),
            b'"' if !escaped => value_start = Some(index + 1),
            _ => {}
        }
    }
    attributes
}
