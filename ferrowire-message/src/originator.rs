/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Originator-side segments {5000} through {6000}.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use crate::types::{FinancialInstitution, Personal};
use ferrowire_core::{FieldError, Tag};
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Originator ({5000}), the party the funds come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Originator {
    #[serde(skip)]
    tag: String,
    /// The originating party.
    pub personal: Personal,
}

impl Originator {
    /// Returns an empty Originator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for Originator {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::Originator)
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

/// Originator FI ({5100}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginatorFI {
    #[serde(skip)]
    tag: String,
    /// The originator's financial institution.
    pub financial_institution: FinancialInstitution,
}

impl OriginatorFI {
    /// Returns an empty OriginatorFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for OriginatorFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::OriginatorFI)
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

/// Instructing FI ({5200}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructingFI {
    #[serde(skip)]
    tag: String,
    /// The institution instructing the transfer.
    pub financial_institution: FinancialInstitution,
}

impl InstructingFI {
    /// Returns an empty InstructingFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for InstructingFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::InstructingFI)
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

/// Account Credited in Drawdown ({5400}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountCreditedDrawdown {
    #[serde(skip)]
    tag: String,
    /// The nine-digit account to credit.
    pub drawdown_credit_account_number: String,
}

impl AccountCreditedDrawdown {
    /// Returns an empty AccountCreditedDrawdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for AccountCreditedDrawdown {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::AccountCreditedDrawdown)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.drawdown_credit_account_number.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.drawdown_credit_account_number]
    }
}

/// Originator to Beneficiary Information ({6000}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginatorToBeneficiary {
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
}

impl OriginatorToBeneficiary {
    /// Returns an empty OriginatorToBeneficiary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for OriginatorToBeneficiary {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::OriginatorToBeneficiary)
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
        ]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.line_one,
            &mut self.line_two,
            &mut self.line_three,
            &mut self.line_four,
        ]
    }
}
