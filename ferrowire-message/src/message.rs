/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! The [`FedwireMessage`] aggregate: one optional slot per segment kind.
//!
//! Slots are public and named after their segment, in canonical tag order.
//! The reader fills slots through [`FedwireMessage::set_segment`], which
//! rejects duplicates; [`FedwireMessage::validate`] checks every populated
//! segment, the mandatory envelope, and the cross-segment companion rules.
//!
//! JSON serialization uses camelCase keys and omits empty slots, so a
//! message survives an encode/decode cycle unchanged.

use crate::beneficiary::{
    AccountDebitedDrawdown, Beneficiary, BeneficiaryFI, BeneficiaryIntermediaryFI,
    BeneficiaryReference,
};
use crate::cover::{
    BeneficiaryCustomer, CurrencyInstructedAmount, InstitutionAccount, IntermediaryInstitution,
    OrderingCustomer, OrderingInstitution, Remittance, SenderToReceiver,
};
use crate::envelope::{
    Amount, BusinessFunctionCode, InputMessageAccountabilityData, ReceiverDepositoryInstitution,
    SenderDepositoryInstitution, SenderSupplied, TypeSubType,
};
use crate::fi_info::{
    FIAdditionalFIToFI, FIBeneficiary, FIBeneficiaryAdvice, FIBeneficiaryFI,
    FIBeneficiaryFIAdvice, FIDrawdownDebitAccountAdvice, FIIntermediaryFI,
    FIIntermediaryFIAdvice, FIPaymentMethodToBeneficiary, FIReceiverFI,
};
use crate::originator::{
    AccountCreditedDrawdown, InstructingFI, Originator, OriginatorFI, OriginatorToBeneficiary,
};
use crate::record::WireSegment;
use crate::segment::Segment;
use crate::service::{
    ErrorWire, MessageDisposition, OutputMessageAccountabilityData, ReceiptTimeStamp,
    ServiceMessage,
};
use crate::transfer::{
    Charges, ExchangeRate, InstructedAmount, LocalInstrument, PreviousMessageIdentifier,
    SenderReference,
};
use ferrowire_core::{FieldError, MessageError};
use serde::{Deserialize, Serialize};

/// A single Fedwire funds-transfer message.
///
/// Every segment kind gets one optional slot; a populated slot means the
/// segment is present in the message. Slot order follows the canonical tag
/// order, which is also the order the writer emits records in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FedwireMessage {
    /// Message identifier, assigned by the persistence layer when empty.
    pub id: String,
    /// `{1500}` sender supplied information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_supplied: Option<SenderSupplied>,
    /// `{1510}` type and subtype.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_sub_type: Option<TypeSubType>,
    /// `{1520}` input message accountability data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_accountability_data: Option<InputMessageAccountabilityData>,
    /// `{2000}` amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// `{3100}` sender depository institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_depository_institution: Option<SenderDepositoryInstitution>,
    /// `{3400}` receiver depository institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_depository_institution: Option<ReceiverDepositoryInstitution>,
    /// `{3600}` business function code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_function_code: Option<BusinessFunctionCode>,
    /// `{3320}` sender reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_reference: Option<SenderReference>,
    /// `{3500}` previous message identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_message_identifier: Option<PreviousMessageIdentifier>,
    /// `{3610}` local instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_instrument: Option<LocalInstrument>,
    /// `{3700}` charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<Charges>,
    /// `{3710}` instructed amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_amount: Option<InstructedAmount>,
    /// `{3720}` exchange rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<ExchangeRate>,
    /// `{4000}` beneficiary intermediary FI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_intermediary_fi: Option<BeneficiaryIntermediaryFI>,
    /// `{4100}` beneficiary FI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_fi: Option<BeneficiaryFI>,
    /// `{4200}` beneficiary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Beneficiary>,
    /// `{4320}` beneficiary reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_reference: Option<BeneficiaryReference>,
    /// `{4400}` account debited in drawdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_debited_drawdown: Option<AccountDebitedDrawdown>,
    /// `{5000}` originator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator: Option<Originator>,
    /// `{5100}` originator FI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator_fi: Option<OriginatorFI>,
    /// `{5200}` instructing FI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructing_fi: Option<InstructingFI>,
    /// `{5400}` account credited in drawdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_credited_drawdown: Option<AccountCreditedDrawdown>,
    /// `{6000}` originator to beneficiary information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator_to_beneficiary: Option<OriginatorToBeneficiary>,
    /// `{6100}` receiver FI information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_receiver_fi: Option<FIReceiverFI>,
    /// `{6110}` drawdown debit account advice information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_drawdown_debit_account_advice: Option<FIDrawdownDebitAccountAdvice>,
    /// `{6200}` intermediary FI information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_intermediary_fi: Option<FIIntermediaryFI>,
    /// `{6210}` intermediary FI advice information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_intermediary_fi_advice: Option<FIIntermediaryFIAdvice>,
    /// `{6300}` beneficiary FI information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_beneficiary_fi: Option<FIBeneficiaryFI>,
    /// `{6310}` beneficiary FI advice information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_beneficiary_fi_advice: Option<FIBeneficiaryFIAdvice>,
    /// `{6400}` beneficiary information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_beneficiary: Option<FIBeneficiary>,
    /// `{6410}` beneficiary advice information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_beneficiary_advice: Option<FIBeneficiaryAdvice>,
    /// `{6420}` payment method to beneficiary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_payment_method_to_beneficiary: Option<FIPaymentMethodToBeneficiary>,
    /// `{6500}` additional FI to FI information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_additional_fi_to_fi: Option<FIAdditionalFIToFI>,
    /// `{7033}` currency instructed amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_instructed_amount: Option<CurrencyInstructedAmount>,
    /// `{7050}` ordering customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering_customer: Option<OrderingCustomer>,
    /// `{7052}` ordering institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering_institution: Option<OrderingInstitution>,
    /// `{7056}` intermediary institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_institution: Option<IntermediaryInstitution>,
    /// `{7057}` institution account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_account: Option<InstitutionAccount>,
    /// `{7059}` beneficiary customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_customer: Option<BeneficiaryCustomer>,
    /// `{7070}` remittance information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remittance: Option<Remittance>,
    /// `{7072}` sender to receiver information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_to_receiver: Option<SenderToReceiver>,
    /// `{9000}` service message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_message: Option<ServiceMessage>,
    /// `{1100}` message disposition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_disposition: Option<MessageDisposition>,
    /// `{1110}` receipt time stamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_time_stamp: Option<ReceiptTimeStamp>,
    /// `{1120}` output message accountability data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_message_accountability_data: Option<OutputMessageAccountabilityData>,
    /// `{1130}` error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_wire: Option<ErrorWire>,
}

/// Stores `segment` in `slot`, rejecting an occupied slot.
fn fill<T: WireSegment>(slot: &mut Option<T>, segment: T) -> Result<(), MessageError> {
    if slot.is_some() {
        return Err(MessageError::DuplicateSegment {
            tag: T::layout().tag,
        });
    }
    *slot = Some(segment);
    Ok(())
}

/// Validates a populated slot, annotating any failure with the owning tag.
fn validate_slot<T: WireSegment>(slot: &Option<T>) -> Result<(), MessageError> {
    if let Some(segment) = slot {
        segment
            .validate()
            .map_err(|source| MessageError::validation(T::layout().tag, source))?;
    }
    Ok(())
}

/// Requires a slot to be populated.
fn require<T: WireSegment>(slot: &Option<T>) -> Result<(), MessageError> {
    if slot.is_none() {
        let layout = T::layout();
        return Err(MessageError::validation(
            layout.tag,
            FieldError::required(layout.name),
        ));
    }
    Ok(())
}

/// Requires two slots to be populated together: if either is present the
/// other must be too. The error names the missing one.
fn companions<A: WireSegment, B: WireSegment>(
    a: &Option<A>,
    b: &Option<B>,
) -> Result<(), MessageError> {
    if a.is_some() && b.is_none() {
        return require(b);
    }
    if b.is_some() && a.is_none() {
        return require(a);
    }
    Ok(())
}

impl FedwireMessage {
    /// Creates an empty message with no populated slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a parsed segment in its slot.
    ///
    /// # Errors
    /// [`MessageError::DuplicateSegment`] when the slot already holds a
    /// segment of that kind.
    pub fn set_segment(&mut self, segment: Segment) -> Result<(), MessageError> {
        match segment {
            Segment::SenderSupplied(s) => fill(&mut self.sender_supplied, s),
            Segment::TypeSubType(s) => fill(&mut self.type_sub_type, s),
            Segment::InputMessageAccountabilityData(s) => {
                fill(&mut self.input_message_accountability_data, s)
            }
            Segment::Amount(s) => fill(&mut self.amount, s),
            Segment::SenderDepositoryInstitution(s) => {
                fill(&mut self.sender_depository_institution, s)
            }
            Segment::ReceiverDepositoryInstitution(s) => {
                fill(&mut self.receiver_depository_institution, s)
            }
            Segment::BusinessFunctionCode(s) => fill(&mut self.business_function_code, s),
            Segment::SenderReference(s) => fill(&mut self.sender_reference, s),
            Segment::PreviousMessageIdentifier(s) => {
                fill(&mut self.previous_message_identifier, s)
            }
            Segment::LocalInstrument(s) => fill(&mut self.local_instrument, s),
            Segment::Charges(s) => fill(&mut self.charges, s),
            Segment::InstructedAmount(s) => fill(&mut self.instructed_amount, s),
            Segment::ExchangeRate(s) => fill(&mut self.exchange_rate, s),
            Segment::BeneficiaryIntermediaryFI(s) => {
                fill(&mut self.beneficiary_intermediary_fi, s)
            }
            Segment::BeneficiaryFI(s) => fill(&mut self.beneficiary_fi, s),
            Segment::Beneficiary(s) => fill(&mut self.beneficiary, s),
            Segment::BeneficiaryReference(s) => fill(&mut self.beneficiary_reference, s),
            Segment::AccountDebitedDrawdown(s) => fill(&mut self.account_debited_drawdown, s),
            Segment::Originator(s) => fill(&mut self.originator, s),
            Segment::OriginatorFI(s) => fill(&mut self.originator_fi, s),
            Segment::InstructingFI(s) => fill(&mut self.instructing_fi, s),
            Segment::AccountCreditedDrawdown(s) => {
                fill(&mut self.account_credited_drawdown, s)
            }
            Segment::OriginatorToBeneficiary(s) => fill(&mut self.originator_to_beneficiary, s),
            Segment::FIReceiverFI(s) => fill(&mut self.fi_receiver_fi, s),
            Segment::FIDrawdownDebitAccountAdvice(s) => {
                fill(&mut self.fi_drawdown_debit_account_advice, s)
            }
            Segment::FIIntermediaryFI(s) => fill(&mut self.fi_intermediary_fi, s),
            Segment::FIIntermediaryFIAdvice(s) => fill(&mut self.fi_intermediary_fi_advice, s),
            Segment::FIBeneficiaryFI(s) => fill(&mut self.fi_beneficiary_fi, s),
            Segment::FIBeneficiaryFIAdvice(s) => fill(&mut self.fi_beneficiary_fi_advice, s),
            Segment::FIBeneficiary(s) => fill(&mut self.fi_beneficiary, s),
            Segment::FIBeneficiaryAdvice(s) => fill(&mut self.fi_beneficiary_advice, s),
            Segment::FIPaymentMethodToBeneficiary(s) => {
                fill(&mut self.fi_payment_method_to_beneficiary, s)
            }
            Segment::FIAdditionalFIToFI(s) => fill(&mut self.fi_additional_fi_to_fi, s),
            Segment::CurrencyInstructedAmount(s) => {
                fill(&mut self.currency_instructed_amount, s)
            }
            Segment::OrderingCustomer(s) => fill(&mut self.ordering_customer, s),
            Segment::OrderingInstitution(s) => fill(&mut self.ordering_institution, s),
            Segment::IntermediaryInstitution(s) => fill(&mut self.intermediary_institution, s),
            Segment::InstitutionAccount(s) => fill(&mut self.institution_account, s),
            Segment::BeneficiaryCustomer(s) => fill(&mut self.beneficiary_customer, s),
            Segment::Remittance(s) => fill(&mut self.remittance, s),
            Segment::SenderToReceiver(s) => fill(&mut self.sender_to_receiver, s),
            Segment::ServiceMessage(s) => fill(&mut self.service_message, s),
            Segment::MessageDisposition(s) => fill(&mut self.message_disposition, s),
            Segment::ReceiptTimeStamp(s) => fill(&mut self.receipt_time_stamp, s),
            Segment::OutputMessageAccountabilityData(s) => {
                fill(&mut self.output_message_accountability_data, s)
            }
            Segment::ErrorWire(s) => fill(&mut self.error_wire, s),
        }
    }

    /// Validates the whole message.
    ///
    /// Runs in three stages and stops at the first failure: every populated
    /// segment is validated in canonical order, then the mandatory envelope
    /// (`{1500}` through `{3600}`) must be present, then segments that travel
    /// in pairs are checked against each other: an ordering customer
    /// (`{7050}`) requires a beneficiary customer (`{7059}`) and a debited
    /// drawdown account (`{4400}`) requires a credited one (`{5400}`), in
    /// both directions.
    ///
    /// # Errors
    /// The first [`MessageError`] found, naming the owning tag.
    pub fn validate(&self) -> Result<(), MessageError> {
        validate_slot(&self.sender_supplied)?;
        validate_slot(&self.type_sub_type)?;
        validate_slot(&self.input_message_accountability_data)?;
        validate_slot(&self.amount)?;
        validate_slot(&self.sender_depository_institution)?;
        validate_slot(&self.receiver_depository_institution)?;
        validate_slot(&self.business_function_code)?;
        validate_slot(&self.sender_reference)?;
        validate_slot(&self.previous_message_identifier)?;
        validate_slot(&self.local_instrument)?;
        validate_slot(&self.charges)?;
        validate_slot(&self.instructed_amount)?;
        validate_slot(&self.exchange_rate)?;
        validate_slot(&self.beneficiary_intermediary_fi)?;
        validate_slot(&self.beneficiary_fi)?;
        validate_slot(&self.beneficiary)?;
        validate_slot(&self.beneficiary_reference)?;
        validate_slot(&self.account_debited_drawdown)?;
        validate_slot(&self.originator)?;
        validate_slot(&self.originator_fi)?;
        validate_slot(&self.instructing_fi)?;
        validate_slot(&self.account_credited_drawdown)?;
        validate_slot(&self.originator_to_beneficiary)?;
        validate_slot(&self.fi_receiver_fi)?;
        validate_slot(&self.fi_drawdown_debit_account_advice)?;
        validate_slot(&self.fi_intermediary_fi)?;
        validate_slot(&self.fi_intermediary_fi_advice)?;
        validate_slot(&self.fi_beneficiary_fi)?;
        validate_slot(&self.fi_beneficiary_fi_advice)?;
        validate_slot(&self.fi_beneficiary)?;
        validate_slot(&self.fi_beneficiary_advice)?;
        validate_slot(&self.fi_payment_method_to_beneficiary)?;
        validate_slot(&self.fi_additional_fi_to_fi)?;
        validate_slot(&self.currency_instructed_amount)?;
        validate_slot(&self.ordering_customer)?;
        validate_slot(&self.ordering_institution)?;
        validate_slot(&self.intermediary_institution)?;
        validate_slot(&self.institution_account)?;
        validate_slot(&self.beneficiary_customer)?;
        validate_slot(&self.remittance)?;
        validate_slot(&self.sender_to_receiver)?;
        validate_slot(&self.service_message)?;
        validate_slot(&self.message_disposition)?;
        validate_slot(&self.receipt_time_stamp)?;
        validate_slot(&self.output_message_accountability_data)?;
        validate_slot(&self.error_wire)?;

        require(&self.sender_supplied)?;
        require(&self.type_sub_type)?;
        require(&self.input_message_accountability_data)?;
        require(&self.amount)?;
        require(&self.sender_depository_institution)?;
        require(&self.receiver_depository_institution)?;
        require(&self.business_function_code)?;

        companions(&self.ordering_customer, &self.beneficiary_customer)?;
        companions(
            &self.account_debited_drawdown,
            &self.account_credited_drawdown,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowire_core::{FieldErrorKind, Tag};

    fn minimal_message() -> FedwireMessage {
        let mut msg = FedwireMessage::new();

        let mut sender_supplied = SenderSupplied::new();
        sender_supplied.test_production_code = "T".to_string();
        msg.sender_supplied = Some(sender_supplied);

        let mut type_sub_type = TypeSubType::new();
        type_sub_type.type_code = "10".to_string();
        type_sub_type.sub_type_code = "00".to_string();
        msg.type_sub_type = Some(type_sub_type);

        let mut imad = InputMessageAccountabilityData::new();
        imad.input_cycle_date = "20240101".to_string();
        imad.input_source = "Source".to_string();
        imad.input_sequence_number = "000001".to_string();
        msg.input_message_accountability_data = Some(imad);

        let mut amount = Amount::new();
        amount.amount = "000000001234".to_string();
        msg.amount = Some(amount);

        let mut sender = SenderDepositoryInstitution::new();
        sender.sender_aba_number = "121042882".to_string();
        sender.sender_short_name = "Wells Fargo NA".to_string();
        msg.sender_depository_institution = Some(sender);

        let mut receiver = ReceiverDepositoryInstitution::new();
        receiver.receiver_aba_number = "231380104".to_string();
        receiver.receiver_short_name = "Citadel".to_string();
        msg.receiver_depository_institution = Some(receiver);

        let mut bfc = BusinessFunctionCode::new();
        bfc.business_function_code = "CTR".to_string();
        msg.business_function_code = Some(bfc);

        msg
    }

    #[test]
    fn test_minimal_message_validates() {
        minimal_message().validate().unwrap();
    }

    #[test]
    fn test_set_segment_fills_each_slot_once() {
        let mut msg = FedwireMessage::new();
        let mut segment = Segment::for_tag(Tag::Amount);
        segment.parse("{2000}000000001234").unwrap();
        msg.set_segment(segment.clone()).unwrap();
        assert_eq!(
            msg.amount.as_ref().map(|a| a.amount.as_str()),
            Some("000000001234")
        );

        let err = msg.set_segment(segment).unwrap_err();
        assert_eq!(err, MessageError::DuplicateSegment { tag: Tag::Amount });
    }

    #[test]
    fn test_validate_requires_envelope() {
        let mut msg = minimal_message();
        msg.business_function_code = None;
        let err = msg.validate().unwrap_err();
        assert_eq!(
            err,
            MessageError::validation(
                Tag::BusinessFunctionCode,
                FieldError::required("businessFunctionCode"),
            )
        );
        assert_eq!(
            err.to_string(),
            "{3600} businessFunctionCode is a required field"
        );
    }

    #[test]
    fn test_validate_annotates_segment_failures() {
        let mut msg = minimal_message();
        let mut beneficiary = Beneficiary::new();
        beneficiary.personal.identification_code = "X".to_string();
        beneficiary.personal.identifier = "1234".to_string();
        beneficiary.personal.name = "Name".to_string();
        msg.beneficiary = Some(beneficiary);
        let err = msg.validate().unwrap_err();
        match err {
            MessageError::Validation { tag, source } => {
                assert_eq!(tag, Tag::Beneficiary);
                assert_eq!(source.field, "identificationCode");
                assert_eq!(source.kind, FieldErrorKind::IdentificationCode);
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_ordering_customer_requires_beneficiary_customer() {
        let mut msg = minimal_message();
        msg.ordering_customer = Some(OrderingCustomer::new());
        let err = msg.validate().unwrap_err();
        assert_eq!(
            err,
            MessageError::validation(
                Tag::BeneficiaryCustomer,
                FieldError::required("beneficiaryCustomer"),
            )
        );

        // The rule cuts both ways.
        let mut msg = minimal_message();
        msg.beneficiary_customer = Some(BeneficiaryCustomer::new());
        let err = msg.validate().unwrap_err();
        assert_eq!(
            err,
            MessageError::validation(
                Tag::OrderingCustomer,
                FieldError::required("orderingCustomer"),
            )
        );

        let mut msg = minimal_message();
        msg.ordering_customer = Some(OrderingCustomer::new());
        msg.beneficiary_customer = Some(BeneficiaryCustomer::new());
        msg.validate().unwrap();
    }

    #[test]
    fn test_drawdown_accounts_travel_in_pairs() {
        let mut debited = AccountDebitedDrawdown::new();
        debited.identification_code = "D".to_string();
        debited.identifier = "123456789".to_string();
        debited.name = "debit account".to_string();

        let mut msg = minimal_message();
        msg.account_debited_drawdown = Some(debited.clone());
        let err = msg.validate().unwrap_err();
        assert_eq!(
            err,
            MessageError::validation(
                Tag::AccountCreditedDrawdown,
                FieldError::required("accountCreditedDrawdown"),
            )
        );

        let mut credited = AccountCreditedDrawdown::new();
        credited.drawdown_credit_account_number = "567891234".to_string();
        let mut msg = minimal_message();
        msg.account_credited_drawdown = Some(credited.clone());
        let err = msg.validate().unwrap_err();
        assert_eq!(
            err,
            MessageError::validation(
                Tag::AccountDebitedDrawdown,
                FieldError::required("accountDebitedDrawdown"),
            )
        );

        let mut msg = minimal_message();
        msg.account_debited_drawdown = Some(debited);
        msg.account_credited_drawdown = Some(credited);
        msg.validate().unwrap();
    }

    #[test]
    fn test_json_omits_empty_slots() {
        let msg = minimal_message();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"senderSupplied\""));
        assert!(json.contains("\"businessFunctionCode\""));
        assert!(!json.contains("\"beneficiary\""));
        assert!(!json.contains("\"remittance\""));
    }

    #[test]
    fn test_json_round_trip() {
        let mut msg = minimal_message();
        msg.id = "ce5part9".to_string();
        let mut beneficiary = Beneficiary::new();
        beneficiary.personal.identification_code = "3".to_string();
        beneficiary.personal.identifier = "1234".to_string();
        beneficiary.personal.name = "Name".to_string();
        msg.beneficiary = Some(beneficiary);

        let json = serde_json::to_string(&msg).unwrap();
        let decoded: FedwireMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, msg);
        decoded.validate().unwrap();
    }
}
