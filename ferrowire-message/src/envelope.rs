/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Envelope segments: the mandatory records every transfer message carries.
//!
//! {1500} through {3600} identify the message itself: format version, type,
//! accountability data, amount, the two depository institutions, and the
//! business function. A message missing any of these fails validation.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use ferrowire_core::{FieldError, FieldErrorKind, Tag, codes};
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Sender Supplied Information ({1500}), the first record of every message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderSupplied {
    #[serde(skip)]
    tag: String,
    /// Format version, always [`Self::FORMAT_VERSION`].
    pub format_version: String,
    /// Free-form sender correlation value.
    pub user_request_correlation: String,
    /// `T` for test, `P` for production.
    pub test_production_code: String,
    /// Empty for an original message, `P` for a possible duplicate.
    pub message_duplication_code: String,
}

impl SenderSupplied {
    /// The only accepted format version.
    pub const FORMAT_VERSION: &'static str = "30";

    /// Returns a SenderSupplied carrying the current format version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: String::new(),
            format_version: Self::FORMAT_VERSION.to_string(),
            user_request_correlation: String::new(),
            test_production_code: String::new(),
            message_duplication_code: String::new(),
        }
    }
}

impl Default for SenderSupplied {
    fn default() -> Self {
        Self::new()
    }
}

impl WireSegment for SenderSupplied {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::SenderSupplied)
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
            self.user_request_correlation.as_str(),
            self.test_production_code.as_str(),
            self.message_duplication_code.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.format_version,
            &mut self.user_request_correlation,
            &mut self.test_production_code,
            &mut self.message_duplication_code,
        ]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        if self.format_version != Self::FORMAT_VERSION {
            return Err(FieldError::new(
                "formatVersion",
                FieldErrorKind::InvalidProperty,
                self.format_version.clone(),
            ));
        }
        if !matches!(self.test_production_code.as_str(), "T" | "P") {
            return Err(FieldError::new(
                "testProductionCode",
                FieldErrorKind::InvalidProperty,
                self.test_production_code.clone(),
            ));
        }
        if !matches!(self.message_duplication_code.as_str(), "" | " " | "P") {
            return Err(FieldError::new(
                "messageDuplicationCode",
                FieldErrorKind::InvalidProperty,
                self.message_duplication_code.clone(),
            ));
        }
        Ok(())
    }
}

/// Type/Subtype ({1510}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeSubType {
    #[serde(skip)]
    tag: String,
    /// Transfer type: `10` funds transfer, `15` foreign transfer, `16`
    /// settlement transfer.
    pub type_code: String,
    /// Transfer subtype, `00` for a basic transfer.
    pub sub_type_code: String,
}

impl TypeSubType {
    /// Returns an empty TypeSubType.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for TypeSubType {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::TypeSubType)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.type_code.as_str(), self.sub_type_code.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.type_code, &mut self.sub_type_code]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        if !matches!(self.type_code.as_str(), "10" | "15" | "16") {
            return Err(FieldError::new(
                "typeCode",
                FieldErrorKind::InvalidProperty,
                self.type_code.clone(),
            ));
        }
        if !matches!(
            self.sub_type_code.as_str(),
            "00" | "01" | "02" | "07" | "08" | "31" | "32" | "33" | "90"
        ) {
            return Err(FieldError::new(
                "subTypeCode",
                FieldErrorKind::InvalidProperty,
                self.sub_type_code.clone(),
            ));
        }
        Ok(())
    }
}

/// Input Message Accountability Data ({1520}): cycle date, source, sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputMessageAccountabilityData {
    #[serde(skip)]
    tag: String,
    /// Input cycle date, CCYYMMDD.
    pub input_cycle_date: String,
    /// Input source identifier.
    pub input_source: String,
    /// Input sequence number.
    pub input_sequence_number: String,
}

impl InputMessageAccountabilityData {
    /// Returns an empty InputMessageAccountabilityData.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for InputMessageAccountabilityData {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::InputMessageAccountabilityData)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.input_cycle_date.as_str(),
            self.input_source.as_str(),
            self.input_sequence_number.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.input_cycle_date,
            &mut self.input_source,
            &mut self.input_sequence_number,
        ]
    }
}

/// Amount ({2000}): twelve digits, pennies implied, no punctuation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amount {
    #[serde(skip)]
    tag: String,
    /// Transfer amount, e.g. `000000001234` for $12.34.
    pub amount: String,
}

impl Amount {
    /// Returns an empty Amount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for Amount {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::Amount)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.amount.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.amount]
    }
}

/// Sender Depository Institution ({3100}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderDepositoryInstitution {
    #[serde(skip)]
    tag: String,
    /// Sender ABA routing number.
    pub sender_aba_number: String,
    /// Sender short name.
    pub sender_short_name: String,
}

impl SenderDepositoryInstitution {
    /// Returns an empty SenderDepositoryInstitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for SenderDepositoryInstitution {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::SenderDepositoryInstitution)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.sender_aba_number.as_str(), self.sender_short_name.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.sender_aba_number, &mut self.sender_short_name]
    }
}

/// Receiver Depository Institution ({3400}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiverDepositoryInstitution {
    #[serde(skip)]
    tag: String,
    /// Receiver ABA routing number.
    pub receiver_aba_number: String,
    /// Receiver short name.
    pub receiver_short_name: String,
}

impl ReceiverDepositoryInstitution {
    /// Returns an empty ReceiverDepositoryInstitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for ReceiverDepositoryInstitution {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::ReceiverDepositoryInstitution)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.receiver_aba_number.as_str(), self.receiver_short_name.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.receiver_aba_number, &mut self.receiver_short_name]
    }
}

/// Business Function Code ({3600}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessFunctionCode {
    #[serde(skip)]
    tag: String,
    /// Business function of the transfer, e.g. `CTR`.
    pub business_function_code: String,
    /// Optional transaction type code.
    pub transaction_type_code: String,
}

impl BusinessFunctionCode {
    /// Returns an empty BusinessFunctionCode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for BusinessFunctionCode {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::BusinessFunctionCode)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.business_function_code.as_str(), self.transaction_type_code.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.business_function_code,
            &mut self.transaction_type_code,
        ]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        if codes::BusinessFunctionCode::from_code(&self.business_function_code).is_none() {
            return Err(FieldError::new(
                "businessFunctionCode",
                FieldErrorKind::BusinessFunctionCode,
                self.business_function_code.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_sender_supplied() -> SenderSupplied {
        let mut ss = SenderSupplied::new();
        ss.user_request_correlation = "User Req".to_string();
        ss.test_production_code = "T".to_string();
        ss
    }

    #[test]
    fn test_sender_supplied_round_trip() {
        let ss = mock_sender_supplied();
        ss.validate().unwrap();
        let line = WireSegment::serialize(&ss);
        assert_eq!(line, "{1500}30User ReqT ");
        let mut parsed = SenderSupplied::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, ss);
    }

    #[test]
    fn test_sender_supplied_format_version() {
        let mut ss = mock_sender_supplied();
        ss.format_version = "31".to_string();
        let err = ss.validate().unwrap_err();
        assert_eq!(err.field, "formatVersion");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);
    }

    #[test]
    fn test_sender_supplied_test_production_code() {
        let mut ss = mock_sender_supplied();
        ss.test_production_code = "Q".to_string();
        let err = ss.validate().unwrap_err();
        assert_eq!(err.field, "testProductionCode");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);
    }

    #[test]
    fn test_type_sub_type_round_trip() {
        let mut tst = TypeSubType::new();
        tst.type_code = "10".to_string();
        tst.sub_type_code = "00".to_string();
        tst.validate().unwrap();
        assert_eq!(WireSegment::serialize(&tst), "{1510}1000");
    }

    #[test]
    fn test_type_sub_type_rejects_unknown_codes() {
        let mut tst = TypeSubType::new();
        tst.type_code = "99".to_string();
        tst.sub_type_code = "00".to_string();
        let err = tst.validate().unwrap_err();
        assert_eq!(err.field, "typeCode");

        tst.type_code = "10".to_string();
        tst.sub_type_code = "99".to_string();
        let err = tst.validate().unwrap_err();
        assert_eq!(err.field, "subTypeCode");
    }

    #[test]
    fn test_imad_round_trip() {
        let mut imad = InputMessageAccountabilityData::new();
        imad.input_cycle_date = "20240101".to_string();
        imad.input_source = "Source08".to_string();
        imad.input_sequence_number = "000001".to_string();
        imad.validate().unwrap();
        let line = WireSegment::serialize(&imad);
        assert_eq!(line, "{1520}20240101Source08000001");
        assert_eq!(line.chars().count(), 28);
    }

    #[test]
    fn test_imad_requires_all_fields() {
        let mut imad = InputMessageAccountabilityData::new();
        imad.input_cycle_date = "20240101".to_string();
        let err = imad.validate().unwrap_err();
        assert_eq!(err.field, "inputSource");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_amount_validation() {
        let mut amount = Amount::new();
        amount.amount = "000000001234".to_string();
        amount.validate().unwrap();
        assert_eq!(WireSegment::serialize(&amount), "{2000}000000001234");

        amount.amount = "1,234.00".to_string();
        let err = amount.validate().unwrap_err();
        assert_eq!(err.field, "amount");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }

    #[test]
    fn test_sender_di_round_trip() {
        let mut sdi = SenderDepositoryInstitution::new();
        sdi.sender_aba_number = "121042882".to_string();
        sdi.sender_short_name = "Wells Fargo NA".to_string();
        sdi.validate().unwrap();
        let line = WireSegment::serialize(&sdi);
        assert_eq!(line, "{3100}121042882Wells Fargo NA    ");
        let mut parsed = SenderDepositoryInstitution::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, sdi);
    }

    #[test]
    fn test_receiver_di_requires_aba() {
        let rdi = ReceiverDepositoryInstitution::new();
        let err = rdi.validate().unwrap_err();
        assert_eq!(err.field, "receiverAbaNumber");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_business_function_code() {
        let mut bfc = BusinessFunctionCode::new();
        bfc.business_function_code = "CTR".to_string();
        bfc.validate().unwrap();
        assert_eq!(WireSegment::serialize(&bfc), "{3600}CTR   ");

        bfc.business_function_code = "XXX".to_string();
        let err = bfc.validate().unwrap_err();
        assert_eq!(err.field, "businessFunctionCode");
        assert_eq!(err.kind, FieldErrorKind::BusinessFunctionCode);
    }

    #[test]
    fn test_json_decode_keeps_canonical_tag() {
        let ss: SenderSupplied =
            serde_json::from_str(r#"{"formatVersion":"30","testProductionCode":"T"}"#).unwrap();
        assert_eq!(ss.tag(), "{1500}");
        ss.validate().unwrap();
    }
}
