/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Other transfer information segments {3320} through {3720}.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use ferrowire_core::{FieldError, FieldErrorKind, Tag, codes};
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Sender Reference ({3320}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderReference {
    #[serde(skip)]
    tag: String,
    /// Sender reference for the transfer.
    pub sender_reference: String,
}

impl SenderReference {
    /// Returns an empty SenderReference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for SenderReference {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::SenderReference)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.sender_reference.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.sender_reference]
    }
}

/// Previous Message Identifier ({3500}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousMessageIdentifier {
    #[serde(skip)]
    tag: String,
    /// Identifier of the message this one refers to.
    pub previous_message_identifier: String,
}

impl PreviousMessageIdentifier {
    /// Returns an empty PreviousMessageIdentifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for PreviousMessageIdentifier {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::PreviousMessageIdentifier)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.previous_message_identifier.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.previous_message_identifier]
    }
}

/// Local Instrument ({3610}).
///
/// The proprietary code rides along only when the local instrument code is
/// `PROP`; otherwise it must stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalInstrument {
    #[serde(skip)]
    tag: String,
    /// Local instrument code, e.g. `ANSI` or `PROP`.
    pub local_instrument_code: String,
    /// Proprietary code, permitted only with `PROP`.
    pub proprietary_code: String,
}

impl LocalInstrument {
    /// Returns an empty LocalInstrument.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for LocalInstrument {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::LocalInstrument)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.local_instrument_code.as_str(), self.proprietary_code.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.local_instrument_code, &mut self.proprietary_code]
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        let prop = codes::LocalInstrumentCode::ProprietaryCode.code();
        if !self.proprietary_code.is_empty() && self.local_instrument_code != prop {
            return Err(FieldError::new(
                "proprietaryCode",
                FieldErrorKind::InvalidProperty,
                self.proprietary_code.clone(),
            ));
        }
        Ok(())
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        if codes::LocalInstrumentCode::from_code(&self.local_instrument_code).is_none() {
            return Err(FieldError::new(
                "localInstrumentCode",
                FieldErrorKind::LocalInstrumentCode,
                self.local_instrument_code.clone(),
            ));
        }
        Ok(())
    }
}

/// Charges ({3700}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Charges {
    #[serde(skip)]
    tag: String,
    /// `B` beneficiary or `S` shared.
    pub charge_details: String,
    /// First charge entry, currency code then amount.
    pub senders_charges_one: String,
    /// Second charge entry.
    pub senders_charges_two: String,
    /// Third charge entry.
    pub senders_charges_three: String,
    /// Fourth charge entry.
    pub senders_charges_four: String,
}

impl Charges {
    /// Returns an empty Charges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for Charges {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::Charges)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.charge_details.as_str(),
            self.senders_charges_one.as_str(),
            self.senders_charges_two.as_str(),
            self.senders_charges_three.as_str(),
            self.senders_charges_four.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.charge_details,
            &mut self.senders_charges_one,
            &mut self.senders_charges_two,
            &mut self.senders_charges_three,
            &mut self.senders_charges_four,
        ]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        if codes::ChargeDetails::from_code(&self.charge_details).is_none() {
            return Err(FieldError::new(
                "chargeDetails",
                FieldErrorKind::ChargeDetails,
                self.charge_details.clone(),
            ));
        }
        Ok(())
    }
}

/// Instructed Amount ({3710}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructedAmount {
    #[serde(skip)]
    tag: String,
    /// ISO currency code.
    pub currency_code: String,
    /// Instructed amount, digits only.
    pub amount: String,
}

impl InstructedAmount {
    /// Returns an empty InstructedAmount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for InstructedAmount {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::InstructedAmount)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.currency_code.as_str(), self.amount.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.currency_code, &mut self.amount]
    }
}

/// Exchange Rate ({3720}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeRate {
    #[serde(skip)]
    tag: String,
    /// Exchange rate, digits and an optional decimal point.
    pub exchange_rate: String,
}

impl ExchangeRate {
    /// Returns an empty ExchangeRate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for ExchangeRate {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::ExchangeRate)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.exchange_rate.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.exchange_rate]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        let mut seen_point = false;
        for c in self.exchange_rate.chars() {
            match c {
                '0'..='9' => {}
                '.' if !seen_point => seen_point = true,
                _ => {
                    return Err(FieldError::new(
                        "exchangeRate",
                        FieldErrorKind::InvalidProperty,
                        self.exchange_rate.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_reference_round_trip() {
        let mut sr = SenderReference::new();
        sr.sender_reference = "Sender Reference".to_string();
        sr.validate().unwrap();
        let line = WireSegment::serialize(&sr);
        assert_eq!(line, "{3320}Sender Reference");
        let mut parsed = SenderReference::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, sr);
    }

    #[test]
    fn test_previous_message_identifier_optional() {
        let pmi = PreviousMessageIdentifier::new();
        pmi.validate().unwrap();
        assert_eq!(WireSegment::serialize(&pmi).chars().count(), 28);
    }

    #[test]
    fn test_local_instrument_round_trip() {
        let mut li = LocalInstrument::new();
        li.local_instrument_code = "ANSI".to_string();
        li.validate().unwrap();
        let line = WireSegment::serialize(&li);
        assert_eq!(line.chars().count(), 45);
        let mut parsed = LocalInstrument::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, li);
    }

    #[test]
    fn test_local_instrument_proprietary_code_needs_prop() {
        let mut li = LocalInstrument::new();
        li.local_instrument_code = "ANSI".to_string();
        li.proprietary_code = "PropCode".to_string();
        let err = li.validate().unwrap_err();
        assert_eq!(err.field, "proprietaryCode");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);

        li.local_instrument_code = "PROP".to_string();
        li.validate().unwrap();
    }

    #[test]
    fn test_local_instrument_code_set() {
        let mut li = LocalInstrument::new();
        li.local_instrument_code = "XXXX".to_string();
        let err = li.validate().unwrap_err();
        assert_eq!(err.field, "localInstrumentCode");
        assert_eq!(err.kind, FieldErrorKind::LocalInstrumentCode);
    }

    #[test]
    fn test_charges_round_trip() {
        let mut charges = Charges::new();
        charges.charge_details = "B".to_string();
        charges.senders_charges_one = "USD0,99".to_string();
        charges.validate().unwrap();
        let line = WireSegment::serialize(&charges);
        assert_eq!(line.chars().count(), 67);
        let mut parsed = Charges::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, charges);
    }

    #[test]
    fn test_charges_details_code_set() {
        let mut charges = Charges::new();
        charges.charge_details = "X".to_string();
        let err = charges.validate().unwrap_err();
        assert_eq!(err.field, "chargeDetails");
        assert_eq!(err.kind, FieldErrorKind::ChargeDetails);
    }

    #[test]
    fn test_instructed_amount_round_trip() {
        let mut ia = InstructedAmount::new();
        ia.currency_code = "USD".to_string();
        ia.amount = "000000000001234".to_string();
        ia.validate().unwrap();
        assert_eq!(WireSegment::serialize(&ia), "{3710}USD000000000001234");
    }

    #[test]
    fn test_instructed_amount_numeric_charset() {
        let mut ia = InstructedAmount::new();
        ia.currency_code = "USD".to_string();
        ia.amount = "12.34".to_string();
        let err = ia.validate().unwrap_err();
        assert_eq!(err.field, "amount");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }

    #[test]
    fn test_exchange_rate_format() {
        let mut er = ExchangeRate::new();
        er.exchange_rate = "1.0715".to_string();
        er.validate().unwrap();

        er.exchange_rate = "1.07.15".to_string();
        let err = er.validate().unwrap_err();
        assert_eq!(err.field, "exchangeRate");
        assert_eq!(err.kind, FieldErrorKind::InvalidProperty);

        er.exchange_rate = "1,0715".to_string();
        assert!(er.validate().is_err());
    }
}
