/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Layout table types: field specifications and per-segment layouts.

use ferrowire_core::{TAG_LEN, Tag};

/// Charset class of a fixed-width field.
///
/// The class only affects validation. Serialization pads every field the same
/// way, on the right with spaces, so that parsed records re-serialize to the
/// exact bytes they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Printable ASCII, space through tilde.
    Alphanumeric,
    /// ASCII digits only.
    Numeric,
}

/// Specification of a single fixed-width field inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in JSON and in validation errors.
    pub name: &'static str,
    /// Width in characters.
    pub width: usize,
    /// Charset class checked by validation.
    pub charset: Charset,
    /// Whether validation requires a non-empty value.
    pub required: bool,
}

impl FieldSpec {
    /// Optional alphanumeric field.
    #[must_use]
    pub const fn alpha(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            charset: Charset::Alphanumeric,
            required: false,
        }
    }

    /// Required alphanumeric field.
    #[must_use]
    pub const fn alpha_req(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            charset: Charset::Alphanumeric,
            required: true,
        }
    }

    /// Optional numeric field.
    #[must_use]
    pub const fn numeric(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            charset: Charset::Numeric,
            required: false,
        }
    }

    /// Required numeric field.
    #[must_use]
    pub const fn numeric_req(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            charset: Charset::Numeric,
            required: true,
        }
    }
}

/// Fixed-width layout of one segment kind.
#[derive(Debug, Clone, Copy)]
pub struct SegmentLayout {
    /// Tag this layout belongs to.
    pub tag: Tag,
    /// Segment name as used for its message slot.
    pub name: &'static str,
    /// Ordered field table. Offsets follow from the widths.
    pub fields: &'static [FieldSpec],
}

impl SegmentLayout {
    /// Total record length in characters: tag plus all field widths.
    #[must_use]
    pub const fn total_len(&self) -> usize {
        let mut len = TAG_LEN;
        let mut i = 0;
        while i < self.fields.len() {
            len += self.fields[i].width;
            i += 1;
        }
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_constructors() {
        let f = FieldSpec::alpha_req("identifier", 34);
        assert_eq!(f.name, "identifier");
        assert_eq!(f.width, 34);
        assert_eq!(f.charset, Charset::Alphanumeric);
        assert!(f.required);

        let f = FieldSpec::numeric("amount", 12);
        assert_eq!(f.charset, Charset::Numeric);
        assert!(!f.required);
    }

    #[test]
    fn test_total_len_includes_tag() {
        static FIELDS: [FieldSpec; 2] = [
            FieldSpec::numeric_req("formatVersion", 2),
            FieldSpec::alpha("userRequestCorrelation", 8),
        ];
        let layout = SegmentLayout {
            tag: Tag::SenderSupplied,
            name: "senderSupplied",
            fields: &FIELDS,
        };
        assert_eq!(layout.total_len(), TAG_LEN + 10);
    }
}
