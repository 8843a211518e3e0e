/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Beneficiary-side segments {4000} through {4400}.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use crate::types::{Address, FinancialInstitution, Personal};
use ferrowire_core::{FieldError, FieldErrorKind, Tag, codes};
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Beneficiary Intermediary FI ({4000}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeneficiaryIntermediaryFI {
    #[serde(skip)]
    tag: String,
    /// The intermediary institution in the beneficiary chain.
    pub financial_institution: FinancialInstitution,
}

impl BeneficiaryIntermediaryFI {
    /// Returns an empty BeneficiaryIntermediaryFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for BeneficiaryIntermediaryFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::BeneficiaryIntermediaryFI)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.financial_institution.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.financial_institution.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.financial_institution.check_identification_code()
    }
}

/// Beneficiary FI ({4100}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeneficiaryFI {
    #[serde(skip)]
    tag: String,
    /// The beneficiary's financial institution.
    pub financial_institution: FinancialInstitution,
}

impl BeneficiaryFI {
    /// Returns an empty BeneficiaryFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for BeneficiaryFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::BeneficiaryFI)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.financial_institution.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.financial_institution.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.financial_institution.check_identification_code()
    }
}

/// Beneficiary ({4200}), the party the funds are for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Beneficiary {
    #[serde(skip)]
    tag: String,
    /// The beneficiary party.
    pub personal: Personal,
}

impl Beneficiary {
    /// Returns an empty Beneficiary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for Beneficiary {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::Beneficiary)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.personal.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.personal.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.personal.check_identification_code()
    }
}

/// Beneficiary Reference ({4320}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeneficiaryReference {
    #[serde(skip)]
    tag: String,
    /// Reference the beneficiary will recognize.
    pub beneficiary_reference: String,
}

impl BeneficiaryReference {
    /// Returns an empty BeneficiaryReference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for BeneficiaryReference {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::BeneficiaryReference)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.beneficiary_reference.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.beneficiary_reference]
    }
}

/// Account Debited in Drawdown ({4400}).
///
/// Drawdown requests identify the account to debit by demand deposit account
/// number, so the identification code is pinned to `D`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDebitedDrawdown {
    #[serde(skip)]
    tag: String,
    /// Always `D`.
    pub identification_code: String,
    /// Account identifier.
    pub identifier: String,
    /// Account holder name.
    pub name: String,
    /// Account holder address.
    pub address: Address,
}

impl AccountDebitedDrawdown {
    /// Returns an empty AccountDebitedDrawdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for AccountDebitedDrawdown {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::AccountDebitedDrawdown)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![
            self.identification_code.as_str(),
            self.identifier.as_str(),
            self.name.as_str(),
            self.address.address_line_one.as_str(),
            self.address.address_line_two.as_str(),
            self.address.address_line_three.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.identification_code,
            &mut self.identifier,
            &mut self.name,
            &mut self.address.address_line_one,
            &mut self.address.address_line_two,
            &mut self.address.address_line_three,
        ]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        let ddn = codes::IdentificationCode::DemandDepositAccountNumber.code();
        if self.identification_code != ddn {
            return Err(FieldError::new(
                "identificationCode",
                FieldErrorKind::IdentificationCode,
                self.identification_code.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowire_core::ParseError;

    fn mock_beneficiary() -> Beneficiary {
        let mut ben = Beneficiary::new();
        ben.personal.identification_code = "3".to_string();
        ben.personal.identifier = "1234".to_string();
        ben.personal.name = "Name".to_string();
        ben.personal.address.address_line_one = "Address One".to_string();
        ben.personal.address.address_line_two = "Address Two".to_string();
        ben.personal.address.address_line_three = "Address Three".to_string();
        ben
    }

    fn mock_beneficiary_fi() -> BeneficiaryFI {
        let mut bfi = BeneficiaryFI::new();
        bfi.financial_institution.identification_code = "D".to_string();
        bfi.financial_institution.identifier = "123456789".to_string();
        bfi.financial_institution.name = "FI Name".to_string();
        bfi.financial_institution.address.address_line_one = "Address One".to_string();
        bfi.financial_institution.address.address_line_two = "Address Two".to_string();
        bfi.financial_institution.address.address_line_three = "Address Three".to_string();
        bfi
    }

    #[test]
    fn test_mock_beneficiary_validates() {
        mock_beneficiary().validate().unwrap();
    }

    #[test]
    fn test_beneficiary_round_trip() {
        let ben = mock_beneficiary();
        let line = WireSegment::serialize(&ben);
        assert_eq!(line.chars().count(), 181);
        let expected = format!(
            "{{4200}}3{:<34}{:<35}{:<35}{:<35}{:<35}",
            "1234", "Name", "Address One", "Address Two", "Address Three"
        );
        assert_eq!(line, expected);
        let mut parsed = Beneficiary::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, ben);
    }

    #[test]
    fn test_beneficiary_identification_code_valid() {
        let mut ben = mock_beneficiary();
        ben.personal.identification_code = "B".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "identificationCode");
        assert_eq!(err.kind, FieldErrorKind::IdentificationCode);
    }

    #[test]
    fn test_beneficiary_identifier_alphanumeric() {
        let mut ben = mock_beneficiary();
        ben.personal.identifier = "®".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "identifier");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }

    #[test]
    fn test_beneficiary_identifier_required() {
        let mut ben = mock_beneficiary();
        ben.personal.identifier = String::new();
        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "identifier");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_parse_beneficiary_wrong_length() {
        let full = WireSegment::serialize(&mock_beneficiary());
        let line: String = full.chars().take(178).collect();
        let mut ben = Beneficiary::new();
        let err = ben.parse(&line).unwrap_err();
        assert_eq!(
            err,
            ParseError::TagWrongLength {
                expected: 181,
                actual: 178
            }
        );
        assert_eq!(ben, Beneficiary::new());
    }

    #[test]
    fn test_beneficiary_tag_error() {
        let mut ben = mock_beneficiary();
        ben.set_tag("{9999}");
        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "tag");
        assert_eq!(err.kind, FieldErrorKind::ValidTagForType);
    }

    #[test]
    fn test_mock_beneficiary_fi_validates() {
        mock_beneficiary_fi().validate().unwrap();
    }

    #[test]
    fn test_beneficiary_fi_round_trip() {
        let bfi = mock_beneficiary_fi();
        let line = WireSegment::serialize(&bfi);
        let expected = format!(
            "{{4100}}D{:<34}{:<35}{:<35}{:<35}{:<35}",
            "123456789", "FI Name", "Address One", "Address Two", "Address Three"
        );
        assert_eq!(line, expected);
        let mut parsed = BeneficiaryFI::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, bfi);
    }

    #[test]
    fn test_beneficiary_fi_rejects_personal_code() {
        let mut bfi = mock_beneficiary_fi();
        bfi.financial_institution.identification_code = "1".to_string();
        let err = bfi.validate().unwrap_err();
        assert_eq!(err.field, "identificationCode");
        assert_eq!(err.kind, FieldErrorKind::IdentificationCode);
    }

    #[test]
    fn test_beneficiary_intermediary_fi_round_trip() {
        let mut bifi = BeneficiaryIntermediaryFI::new();
        bifi.financial_institution.identification_code = "B".to_string();
        bifi.financial_institution.identifier = "IRVTUS3N".to_string();
        bifi.financial_institution.name = "Bank of New York".to_string();
        bifi.validate().unwrap();
        let line = WireSegment::serialize(&bifi);
        assert_eq!(line.chars().count(), 181);
        let mut parsed = BeneficiaryIntermediaryFI::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, bifi);
    }

    #[test]
    fn test_beneficiary_reference_round_trip() {
        let mut br = BeneficiaryReference::new();
        br.beneficiary_reference = "Reference".to_string();
        br.validate().unwrap();
        let line = WireSegment::serialize(&br);
        assert_eq!(line, "{4320}Reference       ");
        let mut parsed = BeneficiaryReference::new();
        parsed.parse(&line).unwrap();
        assert_eq!(parsed, br);
    }

    #[test]
    fn test_account_debited_drawdown_requires_ddn_code() {
        let mut add = AccountDebitedDrawdown::new();
        add.identification_code = "D".to_string();
        add.identifier = "123456789".to_string();
        add.name = "debitDD Name".to_string();
        add.validate().unwrap();

        add.identification_code = "F".to_string();
        let err = add.validate().unwrap_err();
        assert_eq!(err.field, "identificationCode");
        assert_eq!(err.kind, FieldErrorKind::IdentificationCode);
    }

    #[test]
    fn test_account_debited_drawdown_requires_name() {
        let mut add = AccountDebitedDrawdown::new();
        add.identification_code = "D".to_string();
        add.identifier = "123456789".to_string();
        let err = add.validate().unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_beneficiary_json_round_trip() {
        let ben = mock_beneficiary();
        let json = serde_json::to_string(&ben).unwrap();
        let back: Beneficiary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ben);
        assert_eq!(back.tag(), "{4200}");
    }
}
