use crate::ParseKeyPathError;

/// Yields the text between each `[` and the first `]` that follows it.
///
/// Anything outside of brackets is skipped. A bracket whose segment would
/// cross a line break does not open a segment.
pub(crate) struct KeyPathParser<'a> {
    input: &'a str,
}

impl<'a> KeyPathParser<'a> {
    #[inline]
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl<'a> Iterator for KeyPathParser<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let open = memchr::memchr(b'[', self.input.as_bytes())?;
            let rest = &self.input[open + 1..];

            match memchr::memchr2(b']', b'\n', rest.as_bytes()) {
                Some(idx) if rest.as_bytes()[idx] == b']' => {
                    self.input = &rest[idx + 1..];
                    return Some(&rest[..idx]);
                }
                Some(_) => self.input = rest,
                None => {
                    self.input = "";
                    return None;
                }
            }
        }
    }
}

pub(crate) fn parse_key_path(input: &str) -> Result<Vec<String>, ParseKeyPathError> {
    let segments = KeyPathParser::new(input)
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    if segments.is_empty() {
        return Err(ParseKeyPathError {
            input: input.to_string(),
        });
    }

    Ok(segments)
}
