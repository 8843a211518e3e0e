/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! The generic fixed-width record engine.
//!
//! Every segment kind implements [`WireSegment`] by exposing its stored tag
//! and its field slots in layout order. Parsing, validation, and serialization
//! are provided methods driven entirely by the segment's
//! [`SegmentLayout`](ferrowire_registry::SegmentLayout): no segment carries
//! its own parsing code.
//!
//! The three operations form a round-trip contract:
//! - `parse` is permissive: it only rejects records of the wrong total length,
//!   then trims and stores every field, valid or not.
//! - `validate` is strict: tag equality first, then inclusion rules, then one
//!   charset pass and one required pass over the fields in layout order, then
//!   closed code sets. The first violation wins.
//! - `serialize` is total: it always produces a record of the registered
//!   length, truncating or padding as needed.
//!
//! Offsets are counted in characters, not bytes, so multibyte input cannot
//! shift field boundaries.

use ferrowire_core::{
    FieldError, FieldErrorKind, ParseError, TAG_LEN,
    format::{alpha_field, is_alphanumeric, is_numeric, parse_string_field},
};
use ferrowire_registry::{Charset, SegmentLayout};
use smallvec::SmallVec;

/// Borrowed field values of a segment, in layout order.
pub type FieldRefs<'a> = SmallVec<[&'a str; 12]>;

/// Mutable field slots of a segment, in layout order.
pub type FieldSlots<'a> = SmallVec<[&'a mut String; 12]>;

/// A fixed-width tagged record.
///
/// Implementations supply the stored tag and the field slots; the engine does
/// the rest. Field slots must match the layout table in count and order.
pub trait WireSegment {
    /// Returns the layout table for this segment kind.
    fn layout() -> &'static SegmentLayout;

    /// Returns the tag as stored. Empty storage means the canonical tag.
    fn stored_tag(&self) -> &str;

    /// Returns the mutable tag slot.
    fn stored_tag_mut(&mut self) -> &mut String;

    /// Returns the field values in layout order.
    fn fields(&self) -> FieldRefs<'_>;

    /// Returns the mutable field slots in layout order.
    fn fields_mut(&mut self) -> FieldSlots<'_>;

    /// Checks per-kind inclusion rules, such as fields that must stay empty.
    ///
    /// The default accepts everything.
    fn check_inclusion(&self) -> Result<(), FieldError> {
        Ok(())
    }

    /// Checks per-kind closed code sets.
    ///
    /// The default accepts everything.
    fn check_codes(&self) -> Result<(), FieldError> {
        Ok(())
    }

    /// Returns the effective tag: the stored tag, or the canonical tag for
    /// this kind when none has been stored yet.
    fn tag(&self) -> &str {
        let stored = self.stored_tag();
        if stored.is_empty() {
            Self::layout().tag.as_str()
        } else {
            stored
        }
    }

    /// Overwrites the stored tag.
    ///
    /// The canonical tag is stored as the empty string, so a segment that has
    /// only ever seen its own tag compares equal no matter how it was built.
    fn set_tag(&mut self, tag: &str) {
        if tag == Self::layout().tag.as_str() {
            self.stored_tag_mut().clear();
        } else {
            *self.stored_tag_mut() = tag.to_string();
        }
    }

    /// Parses a fixed-width record into this segment.
    ///
    /// All-or-nothing: the record length is checked against the registered
    /// total before any field is written. Content is not validated here;
    /// call [`validate`](WireSegment::validate) for that.
    ///
    /// # Arguments
    /// * `record` - The full record text, tag included
    ///
    /// # Errors
    /// [`ParseError::TagWrongLength`] if the character count differs from the
    /// registered record length.
    fn parse(&mut self, record: &str) -> Result<(), ParseError> {
        let layout = Self::layout();
        let expected = layout.total_len();
        let actual = record.chars().count();
        if actual != expected {
            return Err(ParseError::TagWrongLength { expected, actual });
        }
        let mut chars = record.chars();
        let tag: String = chars.by_ref().take(TAG_LEN).collect();
        self.set_tag(&tag);
        let slots = self.fields_mut();
        debug_assert_eq!(slots.len(), layout.fields.len());
        for (spec, slot) in layout.fields.iter().zip(slots) {
            let raw: String = chars.by_ref().take(spec.width).collect();
            *slot = parse_string_field(&raw);
        }
        Ok(())
    }

    /// Validates this segment's content.
    ///
    /// Checks run in a fixed order and stop at the first violation: tag
    /// equality, inclusion rules, charset of every field in layout order,
    /// required fields in layout order, closed code sets.
    ///
    /// # Errors
    /// The first [`FieldError`] found.
    fn validate(&self) -> Result<(), FieldError> {
        let layout = Self::layout();
        if self.tag() != layout.tag.as_str() {
            return Err(FieldError::new(
                "tag",
                FieldErrorKind::ValidTagForType,
                self.tag(),
            ));
        }
        self.check_inclusion()?;
        let values = self.fields();
        debug_assert_eq!(values.len(), layout.fields.len());
        for (spec, value) in layout.fields.iter().zip(values.iter()) {
            let ok = match spec.charset {
                Charset::Alphanumeric => is_alphanumeric(value),
                Charset::Numeric => is_numeric(value),
            };
            if !ok {
                return Err(FieldError::new(
                    spec.name,
                    FieldErrorKind::NonAlphanumeric,
                    *value,
                ));
            }
        }
        for (spec, value) in layout.fields.iter().zip(values.iter()) {
            if spec.required && value.is_empty() {
                return Err(FieldError::required(spec.name));
            }
        }
        self.check_codes()
    }

    /// Serializes this segment to its fixed-width wire form.
    ///
    /// The output is always exactly the registered record length: every field
    /// is truncated or right-padded with spaces to its registered width.
    fn serialize(&self) -> String {
        let layout = Self::layout();
        let mut out = String::with_capacity(layout.total_len());
        out.push_str(self.tag());
        for (spec, value) in layout.fields.iter().zip(self.fields()) {
            out.push_str(&alpha_field(value, spec.width));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowire_core::Tag;
    use ferrowire_registry::FieldSpec;
    use smallvec::smallvec;

    static TEST_FIELDS: [FieldSpec; 3] = [
        FieldSpec::numeric_req("account", 4),
        FieldSpec::alpha("label", 6),
        FieldSpec::alpha_req("kind", 2),
    ];

    static TEST_LAYOUT: SegmentLayout = SegmentLayout {
        tag: Tag::SenderReference,
        name: "senderReference",
        fields: &TEST_FIELDS,
    };

    #[derive(Default)]
    struct TestRecord {
        tag: String,
        account: String,
        label: String,
        kind: String,
    }

    impl WireSegment for TestRecord {
        fn layout() -> &'static SegmentLayout {
            &TEST_LAYOUT
        }

        fn stored_tag(&self) -> &str {
            &self.tag
        }

        fn stored_tag_mut(&mut self) -> &mut String {
            &mut self.tag
        }

        fn fields(&self) -> FieldRefs<'_> {
            smallvec![self.account.as_str(), self.label.as_str(), self.kind.as_str()]
        }

        fn fields_mut(&mut self) -> FieldSlots<'_> {
            smallvec![&mut self.account, &mut self.label, &mut self.kind]
        }
    }

    #[test]
    fn test_parse_trims_fields() {
        let mut rec = TestRecord::default();
        rec.parse("{3320}1234ab    XY").unwrap();
        // The canonical tag is stored as empty.
        assert_eq!(rec.tag, "");
        assert_eq!(rec.tag(), "{3320}");
        assert_eq!(rec.account, "1234");
        assert_eq!(rec.label, "ab");
        assert_eq!(rec.kind, "XY");
    }

    #[test]
    fn test_set_tag_normalizes_canonical() {
        let mut rec = TestRecord::default();
        rec.set_tag("{9999}");
        assert_eq!(rec.tag, "{9999}");
        rec.set_tag("{3320}");
        assert_eq!(rec.tag, "");
        assert_eq!(rec.tag(), "{3320}");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let mut rec = TestRecord::default();
        let err = rec.parse("{3320}1234").unwrap_err();
        assert_eq!(
            err,
            ParseError::TagWrongLength {
                expected: 18,
                actual: 10
            }
        );
        // Nothing was written.
        assert_eq!(rec.account, "");
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        let mut rec = TestRecord::default();
        // "®" is two bytes but one character; the record is 18 characters.
        rec.parse("{3320}1234®b    XY").unwrap();
        assert_eq!(rec.label, "®b");
        assert_eq!(rec.kind, "XY");
    }

    #[test]
    fn test_validate_checks_tag_first() {
        let mut rec = TestRecord::default();
        rec.account = "1234".to_string();
        rec.kind = "XY".to_string();
        rec.tag = "{9999}".to_string();
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "tag");
        assert_eq!(err.kind, FieldErrorKind::ValidTagForType);
        assert_eq!(err.value, "{9999}");
    }

    #[test]
    fn test_validate_charset_before_required() {
        let mut rec = TestRecord::default();
        // account is empty and required, label has a bad character; the
        // charset pass runs first.
        rec.label = "bad®".to_string();
        rec.kind = "XY".to_string();
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "label");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }

    #[test]
    fn test_validate_numeric_charset() {
        let mut rec = TestRecord::default();
        rec.account = "12a4".to_string();
        rec.kind = "XY".to_string();
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "account");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }

    #[test]
    fn test_validate_required() {
        let mut rec = TestRecord::default();
        rec.account = "1234".to_string();
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "kind");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_empty_segment_uses_canonical_tag() {
        let rec = TestRecord::default();
        assert_eq!(rec.tag(), "{3320}");
        assert_eq!(rec.serialize(), "{3320}            ");
    }

    #[test]
    fn test_serialize_round_trip() {
        let line = "{3320}1234net   OK";
        let mut rec = TestRecord::default();
        rec.parse(line).unwrap();
        assert_eq!(rec.serialize(), line);
    }

    #[test]
    fn test_serialize_truncates_overflow() {
        let mut rec = TestRecord::default();
        rec.account = "1234".to_string();
        rec.label = "much too long".to_string();
        rec.kind = "XY".to_string();
        let out = rec.serialize();
        assert_eq!(out.chars().count(), 18);
        assert_eq!(&out[6..], "1234much tXY");
    }
}
