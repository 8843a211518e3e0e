/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Financial institution information segments {6100} through {6500}.
//!
//! These travel in two shapes: free-form [`FiToFi`] text blocks addressed to
//! a specific institution in the chain, and [`Advice`] blocks that add a
//! delivery method code. {6420} and {6500} carry their own layouts.

use crate::record::{FieldRefs, FieldSlots, WireSegment};
use crate::types::{AdditionalFiToFi, Advice, FiToFi};
use ferrowire_core::{FieldError, FieldErrorKind, Tag, codes};
use ferrowire_registry::{SegmentLayout, layout_for};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// FI to FI Information, Receiver FI ({6100}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIReceiverFI {
    #[serde(skip)]
    tag: String,
    /// Information addressed to the receiver FI.
    pub fi_to_fi: FiToFi,
}

impl FIReceiverFI {
    /// Returns an empty FIReceiverFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIReceiverFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIReceiverFI)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.fi_to_fi.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.fi_to_fi.field_slots()
    }
}

/// FI Drawdown Debit Account Advice ({6110}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIDrawdownDebitAccountAdvice {
    #[serde(skip)]
    tag: String,
    /// Advice for the drawdown debit account holder.
    pub advice: Advice,
}

impl FIDrawdownDebitAccountAdvice {
    /// Returns an empty FIDrawdownDebitAccountAdvice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIDrawdownDebitAccountAdvice {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIDrawdownDebitAccountAdvice)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.advice.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.advice.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.advice.check_advice_code()
    }
}

/// FI to FI Information, Intermediary FI ({6200}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIIntermediaryFI {
    #[serde(skip)]
    tag: String,
    /// Information addressed to the intermediary FI.
    pub fi_to_fi: FiToFi,
}

impl FIIntermediaryFI {
    /// Returns an empty FIIntermediaryFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIIntermediaryFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIIntermediaryFI)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.fi_to_fi.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.fi_to_fi.field_slots()
    }
}

/// FI Intermediary FI Advice ({6210}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIIntermediaryFIAdvice {
    #[serde(skip)]
    tag: String,
    /// Advice for the intermediary FI.
    pub advice: Advice,
}

impl FIIntermediaryFIAdvice {
    /// Returns an empty FIIntermediaryFIAdvice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIIntermediaryFIAdvice {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIIntermediaryFIAdvice)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.advice.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.advice.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.advice.check_advice_code()
    }
}

/// FI to FI Information, Beneficiary FI ({6300}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIBeneficiaryFI {
    #[serde(skip)]
    tag: String,
    /// Information addressed to the beneficiary FI.
    pub fi_to_fi: FiToFi,
}

impl FIBeneficiaryFI {
    /// Returns an empty FIBeneficiaryFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIBeneficiaryFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIBeneficiaryFI)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.fi_to_fi.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.fi_to_fi.field_slots()
    }
}

/// FI Beneficiary FI Advice ({6310}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIBeneficiaryFIAdvice {
    #[serde(skip)]
    tag: String,
    /// Advice for the beneficiary FI.
    pub advice: Advice,
}

impl FIBeneficiaryFIAdvice {
    /// Returns an empty FIBeneficiaryFIAdvice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIBeneficiaryFIAdvice {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIBeneficiaryFIAdvice)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.advice.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.advice.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.advice.check_advice_code()
    }
}

/// FI to FI Information, Beneficiary ({6400}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIBeneficiary {
    #[serde(skip)]
    tag: String,
    /// Information addressed to the beneficiary.
    pub fi_to_fi: FiToFi,
}

impl FIBeneficiary {
    /// Returns an empty FIBeneficiary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIBeneficiary {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIBeneficiary)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.fi_to_fi.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.fi_to_fi.field_slots()
    }
}

/// FI Beneficiary Advice ({6410}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIBeneficiaryAdvice {
    #[serde(skip)]
    tag: String,
    /// Advice for the beneficiary.
    pub advice: Advice,
}

impl FIBeneficiaryAdvice {
    /// Returns an empty FIBeneficiaryAdvice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIBeneficiaryAdvice {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIBeneficiaryAdvice)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.advice.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.advice.field_slots()
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        self.advice.check_advice_code()
    }
}

/// FI Payment Method to Beneficiary ({6420}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIPaymentMethodToBeneficiary {
    #[serde(skip)]
    tag: String,
    /// Payment method, only `CHECK` is defined.
    pub payment_method: String,
    /// Additional payment method information.
    pub additional_information: String,
}

impl FIPaymentMethodToBeneficiary {
    /// Returns an empty FIPaymentMethodToBeneficiary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIPaymentMethodToBeneficiary {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIPaymentMethodToBeneficiary)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        smallvec![self.payment_method.as_str(), self.additional_information.as_str()]
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        smallvec![&mut self.payment_method, &mut self.additional_information]
    }

    fn check_codes(&self) -> Result<(), FieldError> {
        if codes::PaymentMethod::from_code(&self.payment_method).is_none() {
            return Err(FieldError::new(
                "paymentMethod",
                FieldErrorKind::PaymentMethod,
                self.payment_method.clone(),
            ));
        }
        Ok(())
    }
}

/// FI Additional FI to FI Information ({6500}).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FIAdditionalFIToFI {
    #[serde(skip)]
    tag: String,
    /// Additional free-form information.
    pub additional_fi_to_fi: AdditionalFiToFi,
}

impl FIAdditionalFIToFI {
    /// Returns an empty FIAdditionalFIToFI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WireSegment for FIAdditionalFIToFI {
    fn layout() -> &'static SegmentLayout {
        layout_for(Tag::FIAdditionalFIToFI)
    }

    fn stored_tag(&self) -> &str {
        &self.tag
    }

    fn stored_tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    fn fields(&self) -> FieldRefs<'_> {
        self.additional_fi_to_fi.field_refs()
    }

    fn fields_mut(&mut self) -> FieldSlots<'_> {
        self.additional_fi_to_fi.field_slots()
    }
}
