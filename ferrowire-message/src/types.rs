/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Substructures shared by several segment kinds.
//!
//! Party segments (beneficiary, originator, and their institutions) share the
//! [`Personal`] / [`FinancialInstitution`] shape; the {70xx} cover payment
//! segments share [`CoverPayment`]; the {6xxx} information segments share
//! [`FiToFi`] and [`Advice`]. Segments embed these and flatten them into
//! their field tables, so the wire form never nests.
//!
//! All values are plain strings. Parsing stores whatever was on the wire;
//! validation decides what is acceptable.

use crate::record::{FieldRefs, FieldSlots};
use ferrowire_core::{FieldError, FieldErrorKind, codes};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Three-line postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Address line one.
    pub address_line_one: String,
    /// Address line two.
    pub address_line_two: String,
    /// Address line three.
    pub address_line_three: String,
}

/// A person or non-bank organization party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Personal {
    /// How [`identifier`](Self::identifier) is to be interpreted.
    pub identification_code: String,
    /// Party identifier.
    pub identifier: String,
    /// Party name.
    pub name: String,
    /// Party address.
    pub address: Address,
}

impl Personal {
    /// Flattens into wire field order.
    pub(crate) fn field_refs(&self) -> FieldRefs<'_> {
        smallvec![
            self.identification_code.as_str(),
            self.identifier.as_str(),
            self.name.as_str(),
            self.address.address_line_one.as_str(),
            self.address.address_line_two.as_str(),
            self.address.address_line_three.as_str(),
        ]
    }

    pub(crate) fn field_slots(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.identification_code,
            &mut self.identifier,
            &mut self.name,
            &mut self.address.address_line_one,
            &mut self.address.address_line_two,
            &mut self.address.address_line_three,
        ]
    }

    /// Checks the identification code against the personal code set.
    pub(crate) fn check_identification_code(&self) -> Result<(), FieldError> {
        match codes::IdentificationCode::from_code(&self.identification_code) {
            Some(code) if code.is_personal() => Ok(()),
            _ => Err(FieldError::new(
                "identificationCode",
                FieldErrorKind::IdentificationCode,
                self.identification_code.clone(),
            )),
        }
    }
}

/// A financial institution party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialInstitution {
    /// How [`identifier`](Self::identifier) is to be interpreted.
    pub identification_code: String,
    /// Institution identifier.
    pub identifier: String,
    /// Institution name.
    pub name: String,
    /// Institution address.
    pub address: Address,
}

impl FinancialInstitution {
    /// Flattens into wire field order.
    pub(crate) fn field_refs(&self) -> FieldRefs<'_> {
        smallvec![
            self.identification_code.as_str(),
            self.identifier.as_str(),
            self.name.as_str(),
            self.address.address_line_one.as_str(),
            self.address.address_line_two.as_str(),
            self.address.address_line_three.as_str(),
        ]
    }

    pub(crate) fn field_slots(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.identification_code,
            &mut self.identifier,
            &mut self.name,
            &mut self.address.address_line_one,
            &mut self.address.address_line_two,
            &mut self.address.address_line_three,
        ]
    }

    /// Checks the identification code against the financial institution set.
    pub(crate) fn check_identification_code(&self) -> Result<(), FieldError> {
        match codes::IdentificationCode::from_code(&self.identification_code) {
            Some(code) if code.is_financial_institution() => Ok(()),
            _ => Err(FieldError::new(
                "identificationCode",
                FieldErrorKind::IdentificationCode,
                self.identification_code.clone(),
            )),
        }
    }
}

/// SWIFT cover payment block.
///
/// Carries six lines, but the 186-character segments only serialize five;
/// they require [`swift_line_six`](Self::swift_line_six) to stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverPayment {
    /// SWIFT field tag.
    pub swift_field_tag: String,
    /// Line one.
    pub swift_line_one: String,
    /// Line two.
    pub swift_line_two: String,
    /// Line three.
    pub swift_line_three: String,
    /// Line four.
    pub swift_line_four: String,
    /// Line five.
    pub swift_line_five: String,
    /// Line six.
    pub swift_line_six: String,
}

impl CoverPayment {
    /// Flattens the field tag and the first `lines` lines into wire order.
    pub(crate) fn field_refs(&self, lines: usize) -> FieldRefs<'_> {
        let mut refs: FieldRefs<'_> = smallvec![
            self.swift_field_tag.as_str(),
            self.swift_line_one.as_str(),
            self.swift_line_two.as_str(),
            self.swift_line_three.as_str(),
            self.swift_line_four.as_str(),
            self.swift_line_five.as_str(),
            self.swift_line_six.as_str(),
        ];
        refs.truncate(1 + lines);
        refs
    }

    pub(crate) fn field_slots(&mut self, lines: usize) -> FieldSlots<'_> {
        let mut slots: FieldSlots<'_> = smallvec![
            &mut self.swift_field_tag,
            &mut self.swift_line_one,
            &mut self.swift_line_two,
            &mut self.swift_line_three,
            &mut self.swift_line_four,
            &mut self.swift_line_five,
            &mut self.swift_line_six,
        ];
        slots.truncate(1 + lines);
        slots
    }

    /// Fails when line six is populated.
    pub(crate) fn check_no_line_six(&self) -> Result<(), FieldError> {
        if !self.swift_line_six.is_empty() {
            return Err(FieldError::new(
                "swiftLineSix",
                FieldErrorKind::InvalidProperty,
                self.swift_line_six.clone(),
            ));
        }
        Ok(())
    }

    /// Fails when line five or line six is populated.
    pub(crate) fn check_no_lines_five_six(&self) -> Result<(), FieldError> {
        if !self.swift_line_five.is_empty() {
            return Err(FieldError::new(
                "swiftLineFive",
                FieldErrorKind::InvalidProperty,
                self.swift_line_five.clone(),
            ));
        }
        self.check_no_line_six()
    }
}

/// Advice block of the {6x10} advice segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Advice {
    /// How the advice is to be delivered.
    pub advice_code: String,
    /// Line one, shortened to make room for the advice code.
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
}

impl Advice {
    /// Flattens into wire field order.
    pub(crate) fn field_refs(&self) -> FieldRefs<'_> {
        smallvec![
            self.advice_code.as_str(),
            self.line_one.as_str(),
            self.line_two.as_str(),
            self.line_three.as_str(),
            self.line_four.as_str(),
            self.line_five.as_str(),
            self.line_six.as_str(),
        ]
    }

    pub(crate) fn field_slots(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.advice_code,
            &mut self.line_one,
            &mut self.line_two,
            &mut self.line_three,
            &mut self.line_four,
            &mut self.line_five,
            &mut self.line_six,
        ]
    }

    /// Checks the advice code against its closed set.
    pub(crate) fn check_advice_code(&self) -> Result<(), FieldError> {
        if codes::AdviceCode::from_code(&self.advice_code).is_none() {
            return Err(FieldError::new(
                "adviceCode",
                FieldErrorKind::AdviceCode,
                self.advice_code.clone(),
            ));
        }
        Ok(())
    }
}

/// Free-form FI-to-FI information block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FiToFi {
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
}

impl FiToFi {
    /// Flattens into wire field order.
    pub(crate) fn field_refs(&self) -> FieldRefs<'_> {
        smallvec![
            self.line_one.as_str(),
            self.line_two.as_str(),
            self.line_three.as_str(),
            self.line_four.as_str(),
            self.line_five.as_str(),
            self.line_six.as_str(),
        ]
    }

    pub(crate) fn field_slots(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.line_one,
            &mut self.line_two,
            &mut self.line_three,
            &mut self.line_four,
            &mut self.line_five,
            &mut self.line_six,
        ]
    }
}

/// Additional FI-to-FI information block of {6500}, six full-width lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalFiToFi {
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
}

impl AdditionalFiToFi {
    /// Flattens into wire field order.
    pub(crate) fn field_refs(&self) -> FieldRefs<'_> {
        smallvec![
            self.line_one.as_str(),
            self.line_two.as_str(),
            self.line_three.as_str(),
            self.line_four.as_str(),
            self.line_five.as_str(),
            self.line_six.as_str(),
        ]
    }

    pub(crate) fn field_slots(&mut self) -> FieldSlots<'_> {
        smallvec![
            &mut self.line_one,
            &mut self.line_two,
            &mut self.line_three,
            &mut self.line_four,
            &mut self.line_five,
            &mut self.line_six,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_json_shape() {
        let personal = Personal {
            identification_code: "3".to_string(),
            identifier: "1234".to_string(),
            name: "Name".to_string(),
            address: Address {
                address_line_one: "Address One".to_string(),
                ..Address::default()
            },
        };
        let json = serde_json::to_value(&personal).unwrap();
        assert_eq!(json["identificationCode"], "3");
        assert_eq!(json["address"]["addressLineOne"], "Address One");
    }

    #[test]
    fn test_cover_payment_tolerates_missing_fields() {
        let cover: CoverPayment = serde_json::from_str(r#"{"swiftLineOne":"Line One"}"#).unwrap();
        assert_eq!(cover.swift_line_one, "Line One");
        assert_eq!(cover.swift_line_six, "");
    }
}
