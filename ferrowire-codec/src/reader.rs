/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Wire-format reader.
//!
//! The reader consumes line-oriented wire text and produces a [`WireFile`].
//! Each line holds one or more tagged records back to back; record widths
//! come from the registry, so the fixed lengths themselves are the only
//! intra-line delimiter. `{1500}` opens a message: meeting it while a
//! message is already open completes that message and starts the next.
//!
//! Reading is fail-fast and purely structural. The first unknown tag, short
//! record, or duplicate segment stops the reader with a [`ReadError`]
//! carrying the 1-based line number; content validation is left entirely to
//! [`FedwireMessage::validate`].
//!
//! Offsets are counted in characters, and a lone `\r` before the newline is
//! tolerated, so CRLF input reads the same as LF input.

use ferrowire_core::{ParseError, ReadError, TAG_LEN, Tag};
use ferrowire_message::{FedwireMessage, Segment, WireFile};
use ferrowire_registry::layout_for_code;

/// Wire-format reader over an in-memory buffer.
#[derive(Debug)]
pub struct Reader<'a> {
    /// Input text.
    input: &'a str,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given input text.
    #[inline]
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Reads the whole input into a [`WireFile`].
    ///
    /// # Errors
    /// The first [`ReadError`] found: an unrecognized tag, a record shorter
    /// than its registered length, or a segment kind repeated within one
    /// message.
    pub fn read(self) -> Result<WireFile, ReadError> {
        let mut file = WireFile::new();
        let mut current = FedwireMessage::new();
        let mut started = false;

        for (index, line) in self.input.lines().enumerate() {
            let line_no = index + 1;
            if line.is_empty() {
                continue;
            }
            let mut cursor = line;
            while !cursor.is_empty() {
                let (code, _) = take_runes(cursor, TAG_LEN).ok_or_else(|| {
                    ReadError::UnknownTag {
                        line: line_no,
                        code: cursor.to_string(),
                    }
                })?;
                let layout = layout_for_code(code).ok_or_else(|| ReadError::UnknownTag {
                    line: line_no,
                    code: code.to_string(),
                })?;
                let (record, rest) =
                    take_runes(cursor, layout.total_len()).ok_or_else(|| ReadError::Record {
                        line: line_no,
                        tag: layout.tag,
                        source: ParseError::TagWrongLength {
                            expected: layout.total_len(),
                            actual: cursor.chars().count(),
                        },
                    })?;

                let mut segment = Segment::for_tag(layout.tag);
                segment.parse(record).map_err(|source| ReadError::Record {
                    line: line_no,
                    tag: layout.tag,
                    source,
                })?;

                if layout.tag == Tag::SenderSupplied && started {
                    file.messages.push(current);
                    current = FedwireMessage::new();
                }
                started = true;
                current
                    .set_segment(segment)
                    .map_err(|source| ReadError::Message {
                        line: line_no,
                        source,
                    })?;

                cursor = rest;
            }
        }

        if started {
            file.messages.push(current);
        }
        Ok(file)
    }
}

/// Reads wire text into a [`WireFile`].
///
/// Convenience wrapper around [`Reader::read`].
///
/// # Errors
/// The first [`ReadError`] found.
pub fn read_file(input: &str) -> Result<WireFile, ReadError> {
    Reader::new(input).read()
}

/// Splits off the first `n` characters of `s`, or `None` if it has fewer.
fn take_runes(s: &str, n: usize) -> Option<(&str, &str)> {
    let mut iter = s.char_indices();
    for _ in 0..n {
        iter.next()?;
    }
    let boundary = iter.next().map_or(s.len(), |(idx, _)| idx);
    Some(s.split_at(boundary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowire_core::MessageError;

    const SINGLE: &str = concat!(
        "{1500}30        T \n",
        "{1510}1000\n",
        "{1520}20240101Source  000001\n",
        "{2000}000000001234\n",
        "{3100}121042882Wells Fargo NA    \n",
        "{3400}231380104Citadel           \n",
        "{3600}CTR   \n",
    );

    #[test]
    fn test_take_runes() {
        assert_eq!(take_runes("{1500}30", 6), Some(("{1500}", "30")));
        assert_eq!(take_runes("abc", 3), Some(("abc", "")));
        assert_eq!(take_runes("abc", 4), None);
        // Boundaries are character counts, not byte counts.
        assert_eq!(take_runes("®®cd", 2), Some(("®®", "cd")));
    }

    #[test]
    fn test_read_single_message() {
        let file = read_file(SINGLE).unwrap();
        assert_eq!(file.messages.len(), 1);
        let msg = &file.messages[0];
        assert_eq!(
            msg.amount.as_ref().map(|a| a.amount.as_str()),
            Some("000000001234")
        );
        msg.validate().unwrap();
    }

    #[test]
    fn test_read_packed_line() {
        let input = "{1500}30        T {1510}1000{2000}000000001234\n";
        let file = read_file(input).unwrap();
        assert_eq!(file.messages.len(), 1);
        let msg = &file.messages[0];
        assert!(msg.sender_supplied.is_some());
        assert!(msg.type_sub_type.is_some());
        assert!(msg.amount.is_some());
    }

    #[test]
    fn test_read_splits_messages_on_sender_supplied() {
        let input = format!("{SINGLE}{SINGLE}");
        let file = read_file(&input).unwrap();
        assert_eq!(file.messages.len(), 2);
        file.create().unwrap();
    }

    #[test]
    fn test_read_crlf_input() {
        let input = SINGLE.replace('\n', "\r\n");
        let file = read_file(&input).unwrap();
        assert_eq!(file.messages.len(), 1);
        file.messages[0].validate().unwrap();
    }

    #[test]
    fn test_read_empty_input() {
        let file = read_file("").unwrap();
        assert!(file.messages.is_empty());

        let file = read_file("\n\n").unwrap();
        assert!(file.messages.is_empty());
    }

    #[test]
    fn test_read_unknown_tag() {
        let input = "{1500}30        T \n{9999}whatever\n";
        let err = read_file(input).unwrap_err();
        assert_eq!(
            err,
            ReadError::UnknownTag {
                line: 2,
                code: "{9999}".to_string(),
            }
        );
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_read_tagless_fragment() {
        let err = read_file("{150\n").unwrap_err();
        assert_eq!(
            err,
            ReadError::UnknownTag {
                line: 1,
                code: "{150".to_string(),
            }
        );
    }

    #[test]
    fn test_read_short_record() {
        let err = read_file("{2000}123\n").unwrap_err();
        assert_eq!(
            err,
            ReadError::Record {
                line: 1,
                tag: Tag::Amount,
                source: ParseError::TagWrongLength {
                    expected: 18,
                    actual: 9,
                },
            }
        );
    }

    #[test]
    fn test_read_duplicate_segment() {
        let input = "{1500}30        T \n{2000}000000001234\n{2000}000000005678\n";
        let err = read_file(input).unwrap_err();
        assert_eq!(
            err,
            ReadError::Message {
                line: 3,
                source: MessageError::DuplicateSegment { tag: Tag::Amount },
            }
        );
    }

    #[test]
    fn test_reader_never_validates_content() {
        // A bad business function code parses fine; only validate flags it.
        let input = "{3600}XXX   \n";
        let file = read_file(input).unwrap();
        assert_eq!(file.messages.len(), 1);
        assert!(file.messages[0].validate().is_err());
    }
}
