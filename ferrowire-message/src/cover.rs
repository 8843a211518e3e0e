/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Cover payment segments {7033} through {7072}.
//!
//! All of these carry SWIFT-sourced text. The 186-character segments
//! serialize five of the six cover payment lines and require the sixth to be
//! empty; {7070} serializes four and requires the last two to be empty;
//! {7072} is the only one wide enough for all six.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use crate::types::CoverPayment;
use ferrowire_core::{FieldError, Tag};
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Currency Instructed Amount ({7033}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyInstructedAmount {
    #[serde(skip)]
    tag: String,
    /// SWIFT field tag.
    pub swift_field_tag: String,
    /// Amount, digits only.
    pub amount: String,
}

impl CurrencyInstructedAmount {
    /// Returns an empty CurrencyInstructedAmount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for CurrencyInstructedAmount {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::CurrencyInstructedAmount)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.swift_field_tag.as_str(), self.amount.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.swift_field_tag, &mut self.amount]
    }
}

/// Ordering Customer ({7050}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderingCustomer {
    #[serde(skip)]
    tag: String,
    /// The ordering customer cover payment block.
    pub cover_payment: CoverPayment,
}

impl OrderingCustomer {
    /// Returns an empty OrderingCustomer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for OrderingCustomer {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::OrderingCustomer)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(5)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(5)
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        self.cover_payment.check_no_line_six()
    }
}

/// Ordering Institution ({7052}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderingInstitution {
    #[serde(skip)]
    tag: String,
    /// The ordering institution cover payment block.
    pub cover_payment: CoverPayment,
}

impl OrderingInstitution {
    /// Returns an empty OrderingInstitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for OrderingInstitution {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::OrderingInstitution)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(5)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(5)
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        self.cover_payment.check_no_line_six()
    }
}

/// Intermediary Institution ({7056}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntermediaryInstitution {
    #[serde(skip)]
    tag: String,
    /// The intermediary institution cover payment block.
    pub cover_payment: CoverPayment,
}

impl IntermediaryInstitution {
    /// Returns an empty IntermediaryInstitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for IntermediaryInstitution {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::IntermediaryInstitution)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(5)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(5)
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        self.cover_payment.check_no_line_six()
    }
}

/// Institution Account ({7057}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionAccount {
    #[serde(skip)]
    tag: String,
    /// The account institution cover payment block.
    pub cover_payment: CoverPayment,
}

impl InstitutionAccount {
    /// Returns an empty InstitutionAccount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for InstitutionAccount {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::InstitutionAccount)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(5)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(5)
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        self.cover_payment.check_no_line_six()
    }
}

/// Beneficiary Customer ({7059}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeneficiaryCustomer {
    #[serde(skip)]
    tag: String,
    /// The beneficiary customer cover payment block.
    pub cover_payment: CoverPayment,
}

impl BeneficiaryCustomer {
    /// Returns an empty BeneficiaryCustomer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for BeneficiaryCustomer {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::BeneficiaryCustomer)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(5)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(5)
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        self.cover_payment.check_no_line_six()
    }
}

/// Remittance Information ({7070}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Remittance {
    #[serde(skip)]
    tag: String,
    /// The remittance cover payment block, lines one through four.
    pub cover_payment: CoverPayment,
}

impl Remittance {
    /// Returns an empty Remittance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for Remittance {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::Remittance)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(4)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(4)
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        self.cover_payment.check_no_lines_five_six()
    }
}

/// Sender to Receiver Information ({7072}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderToReceiver {
    #[serde(skip)]
    tag: String,
    /// The sender to receiver cover payment block, all six lines.
    pub cover_payment: CoverPayment,
}

impl SenderToReceiver {
    /// Returns an empty SenderToReceiver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for SenderToReceiver {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::SenderToReceiver)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.cover_payment.field_refs(6)
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.cover_payment.field_slots(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowire_core::FieldErrorKind;

    fn mock_cover_payment() -> CoverPayment {
        CoverPayment {
            swift_field_tag: "Swift".to_string(),
            swift_line_one: "Swift Line One".to_string(),
            swift_line_two: "Swift Line Two".to_string(),
            swift_line_three: "Swift Line Three".to_string(),
            swift_line_four: "Swift Line Four".to_string(),
            swift_line_five: "Swift Line Five".to_string(),
            ..CoverPayment::default()
        }
    }

    #[test]
    fn test_beneficiary_customer_round_trip() {
        let mut bc = BeneficiaryCustomer::new();
        bc.cover_payment = mock_cover_payment();
        bc.validate().unwrap();
        let line = WireSegment::serialize(&bc);
        assert_eq!(line.chars().count(), 186);
        let mut parsed = BeneficiaryCustomer::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, bc);
    }

    #[test]
    fn test_beneficiary_customer_line_six_forbidden() {
        let mut bc = BeneficiaryCustomer::new();
        bc.cover_payment = mock_cover_payment();
        bc.cover_payment.swift_line_six = "Swift Line Six".to_string();
        let err = bc.validate().unwrap_err();
        assert_eq!(err.field, "swiftLineSix");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);
    }

    #[test]
    fn test_ordering_customer_line_six_forbidden() {
        let mut oc = OrderingCustomer::new();
        oc.cover_payment.swift_line_six = "Swift Line Six".to_string();
        let err = oc.validate().unwrap_err();
        assert_eq!(err.field, "swiftLineSix");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);
    }

    #[test]
    fn test_remittance_lines_five_and_six_forbidden() {
        let mut rem = Remittance::new();
        rem.cover_payment.swift_line_five = "Swift Line Five".to_string();
        let err = rem.validate().unwrap_err();
        assert_eq!(err.field, "swiftLineFive");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);

        rem.cover_payment.swift_line_five = String::new();
        rem.cover_payment.swift_line_six = "Swift Line Six".to_string();
        let err = rem.validate().unwrap_err();
        assert_eq!(err.field, "swiftLineSix");
    }

    #[test]
    fn test_remittance_round_trip() {
        let mut rem = Remittance::new();
        rem.cover_payment.swift_field_tag = "Swift".to_string();
        rem.cover_payment.swift_line_one = "Swift Line One".to_string();
        rem.cover_payment.swift_line_four = "Swift Line Four".to_string();
        rem.validate().unwrap();
        let line = WireSegment::serialize(&rem);
        assert_eq!(line.chars().count(), 151);
        let mut parsed = Remittance::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, rem);
    }

    #[test]
    fn test_sender_to_receiver_keeps_all_six_lines() {
        let mut str_info = SenderToReceiver::new();
        str_info.cover_payment = mock_cover_payment();
        str_info.cover_payment.swift_line_six = "Swift Line Six".to_string();
        str_info.validate().unwrap();
        let line = WireSegment::serialize(&str_info);
        assert_eq!(line.chars().count(), 221);
        let mut parsed = SenderToReceiver::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, str_info);
        assert_eq!(parsed.cover_payment.swift_line_six, "Swift Line Six");
    }

    #[test]
    fn test_currency_instructed_amount() {
        let mut cia = CurrencyInstructedAmount::new();
        cia.swift_field_tag = "Swift".to_string();
        cia.amount = "000000000001500049".to_string();
        cia.validate().unwrap();
        assert_eq!(WireSegment::serialize(&cia), "{7033}Swift000000000001500049");

        cia.amount = "1500049".to_string();
        cia.validate().unwrap();
        assert_eq!(WireSegment::serialize(&cia), "{7033}Swift1500049           ");
    }
}
