/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Service message and incoming-appendix segments.
//!
//! {9000} is the operator service message. The {11xx} segments are stamped by
//! Fed applications onto delivered messages; outgoing messages never carry
//! them, so none of their fields is required.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use ferrowire_core::Tag;
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Service Message ({9000}), twelve free-form lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceMessage {
    #[serde(skip)]
    tag: String,
    /// Line one.
    pub line_one: String,
    /// Line two.
    pub line_two: String,
    /// Line three.
    pub line_three: String,
    /// Line four.
    pub line_four: String,
    /// Line five.
    pub line_five: String,
    /// Line six.
    pub line_six: String,
    /// Line seven.
    pub line_seven: String,
    /// Line eight.
    pub line_eight: String,
    /// Line nine.
    pub line_nine: String,
    /// Line ten.
    pub line_ten: String,
    /// Line eleven.
    pub line_eleven: String,
    /// Line twelve.
    pub line_twelve: String,
}

impl ServiceMessage {
    /// Returns an empty ServiceMessage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for ServiceMessage {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::ServiceMessage)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.line_one.as_str(),
            self.line_two.as_str(),
            self.line_three.as_str(),
            self.line_four.as_str(),
            self.line_five.as_str(),
            self.line_six.as_str(),
            self.line_seven.as_str(),
            self.line_eight.as_str(),
            self.line_nine.as_str(),
            self.line_ten.as_str(),
            self.line_eleven.as_str(),
            self.line_twelve.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.line_one,
            &mut self.line_two,
            &mut self.line_three,
            &mut self.line_four,
            &mut self.line_five,
            &mut self.line_six,
            &mut self.line_seven,
            &mut self.line_eight,
            &mut self.line_nine,
            &mut self.line_ten,
            &mut self.line_eleven,
            &mut self.line_twelve,
        ]
    }
}

/// Message Disposition ({1100}), stamped by the Fed on delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageDisposition {
    #[serde(skip)]
    tag: String,
    /// Format version of the delivered message.
    pub format_version: String,
    /// `T` for test, `P` for production.
    pub test_production_code: String,
    /// Duplication marker.
    pub message_duplication_code: String,
    /// Message status indicator.
    pub message_status_indicator: String,
}

impl MessageDisposition {
    /// Returns an empty MessageDisposition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for MessageDisposition {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::MessageDisposition)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.format_version.as_str(),
            self.test_production_code.as_str(),
            self.message_duplication_code.as_str(),
            self.message_status_indicator.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.format_version,
            &mut self.test_production_code,
            &mut self.message_duplication_code,
            &mut self.message_status_indicator,
        ]
    }
}

/// Receipt Time Stamp ({1110}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptTimeStamp {
    #[serde(skip)]
    tag: String,
    /// Receipt date, MMDD.
    pub receipt_date: String,
    /// Receipt time, HHMM.
    pub receipt_time: String,
    /// Receiving application identification.
    pub receipt_application_identification: String,
}

impl ReceiptTimeStamp {
    /// Returns an empty ReceiptTimeStamp.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for ReceiptTimeStamp {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::ReceiptTimeStamp)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.receipt_date.as_str(),
            self.receipt_time.as_str(),
            self.receipt_application_identification.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.receipt_date,
            &mut self.receipt_time,
            &mut self.receipt_application_identification,
        ]
    }
}

/// Output Message Accountability Data ({1120}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputMessageAccountabilityData {
    #[serde(skip)]
    tag: String,
    /// Output cycle date, CCYYMMDD.
    pub output_cycle_date: String,
    /// Output destination identifier.
    pub output_destination_id: String,
    /// Output sequence number.
    pub output_sequence_number: String,
    /// Output date, MMDD.
    pub output_date: String,
    /// Output time, HHMM.
    pub output_time: String,
    /// Output application identification.
    pub output_application_identification: String,
}

impl OutputMessageAccountabilityData {
    /// Returns an empty OutputMessageAccountabilityData.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for OutputMessageAccountabilityData {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::OutputMessageAccountabilityData)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.output_cycle_date.as_str(),
            self.output_destination_id.as_str(),
            self.output_sequence_number.as_str(),
            self.output_date.as_str(),
            self.output_time.as_str(),
            self.output_application_identification.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.output_cycle_date,
            &mut self.output_destination_id,
            &mut self.output_sequence_number,
            &mut self.output_date,
            &mut self.output_time,
            &mut self.output_application_identification,
        ]
    }
}

/// Error ({1130}), stamped by the Fed when a message is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorWire {
    #[serde(skip)]
    tag: String,
    /// Error category.
    pub error_category: String,
    /// Error code within the category.
    pub error_code: String,
    /// Human-readable error description.
    pub error_description: String,
}

impl ErrorWire {
    /// Returns an empty ErrorWire.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for ErrorWire {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::ErrorWire)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.error_category.as_str(),
            self.error_code.as_str(),
            self.error_description.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.error_category,
            &mut self.error_code,
            &mut self.error_description,
        ]
    }
}
