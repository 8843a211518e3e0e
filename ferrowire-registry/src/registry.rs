/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! The layout registry: one [`SegmentLayout`] per supported tag.
//!
//! `LAYOUTS` is declared in canonical serialization order, which is also the
//! declaration order of [`Tag`], so lookup by tag is an index. The writer and
//! the message validator both walk segments in this order.

use crate::layout::{FieldSpec, SegmentLayout};
use ferrowire_core::Tag;

/// All supported segment layouts, in canonical serialization order.
pub static LAYOUTS: [SegmentLayout; 46] = [
    // {1500}, 18 characters
    SegmentLayout {
        tag: Tag::SenderSupplied,
        name: "senderSupplied",
        fields: &[
            FieldSpec::numeric_req("formatVersion", 2),
            FieldSpec::alpha("userRequestCorrelation", 8),
            FieldSpec::alpha_req("testProductionCode", 1),
            FieldSpec::alpha("messageDuplicationCode", 1),
        ],
    },
    // {1510}, 10 characters
    SegmentLayout {
        tag: Tag::TypeSubType,
        name: "typeSubType",
        fields: &[
            FieldSpec::numeric_req("typeCode", 2),
            FieldSpec::numeric_req("subTypeCode", 2),
        ],
    },
    // {1520}, 28 characters
    SegmentLayout {
        tag: Tag::InputMessageAccountabilityData,
        name: "inputMessageAccountabilityData",
        fields: &[
            FieldSpec::numeric_req("inputCycleDate", 8),
            FieldSpec::alpha_req("inputSource", 8),
            FieldSpec::numeric_req("inputSequenceNumber", 6),
        ],
    },
    // {2000}, 18 characters
    SegmentLayout {
        tag: Tag::Amount,
        name: "amount",
        fields: &[FieldSpec::numeric_req("amount", 12)],
    },
    // {3100}, 33 characters
    SegmentLayout {
        tag: Tag::SenderDepositoryInstitution,
        name: "senderDepositoryInstitution",
        fields: &[
            FieldSpec::numeric_req("senderAbaNumber", 9),
            FieldSpec::alpha("senderShortName", 18),
        ],
    },
    // {3400}, 33 characters
    SegmentLayout {
        tag: Tag::ReceiverDepositoryInstitution,
        name: "receiverDepositoryInstitution",
        fields: &[
            FieldSpec::numeric_req("receiverAbaNumber", 9),
            FieldSpec::alpha("receiverShortName", 18),
        ],
    },
    // {3600}, 12 characters
    SegmentLayout {
        tag: Tag::BusinessFunctionCode,
        name: "businessFunctionCode",
        fields: &[
            FieldSpec::alpha_req("businessFunctionCode", 3),
            FieldSpec::alpha("transactionTypeCode", 3),
        ],
    },
    // {3320}, 22 characters
    SegmentLayout {
        tag: Tag::SenderReference,
        name: "senderReference",
        fields: &[FieldSpec::alpha("senderReference", 16)],
    },
    // {3500}, 28 characters
    SegmentLayout {
        tag: Tag::PreviousMessageIdentifier,
        name: "previousMessageIdentifier",
        fields: &[FieldSpec::alpha("previousMessageIdentifier", 22)],
    },
    // {3610}, 45 characters
    SegmentLayout {
        tag: Tag::LocalInstrument,
        name: "localInstrument",
        fields: &[
            FieldSpec::alpha_req("localInstrumentCode", 4),
            FieldSpec::alpha("proprietaryCode", 35),
        ],
    },
    // {3700}, 67 characters
    SegmentLayout {
        tag: Tag::Charges,
        name: "charges",
        fields: &[
            FieldSpec::alpha_req("chargeDetails", 1),
            FieldSpec::alpha("sendersChargesOne", 15),
            FieldSpec::alpha("sendersChargesTwo", 15),
            FieldSpec::alpha("sendersChargesThree", 15),
            FieldSpec::alpha("sendersChargesFour", 15),
        ],
    },
    // {3710}, 24 characters
    SegmentLayout {
        tag: Tag::InstructedAmount,
        name: "instructedAmount",
        fields: &[
            FieldSpec::alpha_req("currencyCode", 3),
            FieldSpec::numeric_req("amount", 15),
        ],
    },
    // {3720}, 18 characters
    SegmentLayout {
        tag: Tag::ExchangeRate,
        name: "exchangeRate",
        fields: &[FieldSpec::alpha("exchangeRate", 12)],
    },
    // {4000}, 181 characters
    SegmentLayout {
        tag: Tag::BeneficiaryIntermediaryFI,
        name: "beneficiaryIntermediaryFi",
        fields: &FINANCIAL_INSTITUTION_FIELDS,
    },
    // {4100}, 181 characters
    SegmentLayout {
        tag: Tag::BeneficiaryFI,
        name: "beneficiaryFi",
        fields: &FINANCIAL_INSTITUTION_FIELDS,
    },
    // {4200}, 181 characters
    SegmentLayout {
        tag: Tag::Beneficiary,
        name: "beneficiary",
        fields: &PERSONAL_FIELDS,
    },
    // {4320}, 22 characters
    SegmentLayout {
        tag: Tag::BeneficiaryReference,
        name: "beneficiaryReference",
        fields: &[FieldSpec::alpha("beneficiaryReference", 16)],
    },
    // {4400}, 181 characters
    SegmentLayout {
        tag: Tag::AccountDebitedDrawdown,
        name: "accountDebitedDrawdown",
        fields: &[
            FieldSpec::alpha_req("identificationCode", 1),
            FieldSpec::alpha_req("identifier", 34),
            FieldSpec::alpha_req("name", 35),
            FieldSpec::alpha("addressLineOne", 35),
            FieldSpec::alpha("addressLineTwo", 35),
            FieldSpec::alpha("addressLineThree", 35),
        ],
    },
    // {5000}, 181 characters
    SegmentLayout {
        tag: Tag::Originator,
        name: "originator",
        fields: &PERSONAL_FIELDS,
    },
    // {5100}, 181 characters
    SegmentLayout {
        tag: Tag::OriginatorFI,
        name: "originatorFi",
        fields: &FINANCIAL_INSTITUTION_FIELDS,
    },
    // {5200}, 181 characters
    SegmentLayout {
        tag: Tag::InstructingFI,
        name: "instructingFi",
        fields: &FINANCIAL_INSTITUTION_FIELDS,
    },
    // {5400}, 15 characters
    SegmentLayout {
        tag: Tag::AccountCreditedDrawdown,
        name: "accountCreditedDrawdown",
        fields: &[FieldSpec::numeric_req("drawdownCreditAccountNumber", 9)],
    },
    // {6000}, 146 characters
    SegmentLayout {
        tag: Tag::OriginatorToBeneficiary,
        name: "originatorToBeneficiary",
        fields: &[
            FieldSpec::alpha("lineOne", 35),
            FieldSpec::alpha("lineTwo", 35),
            FieldSpec::alpha("lineThree", 35),
            FieldSpec::alpha("lineFour", 35),
        ],
    },
    // {6100}, 201 characters
    SegmentLayout {
        tag: Tag::FIReceiverFI,
        name: "fiReceiverFi",
        fields: &FI_TO_FI_FIELDS,
    },
    // {6110}, 200 characters
    SegmentLayout {
        tag: Tag::FIDrawdownDebitAccountAdvice,
        name: "fiDrawdownDebitAccountAdvice",
        fields: &ADVICE_FIELDS,
    },
    // {6200}, 201 characters
    SegmentLayout {
        tag: Tag::FIIntermediaryFI,
        name: "fiIntermediaryFi",
        fields: &FI_TO_FI_FIELDS,
    },
    // {6210}, 200 characters
    SegmentLayout {
        tag: Tag::FIIntermediaryFIAdvice,
        name: "fiIntermediaryFiAdvice",
        fields: &ADVICE_FIELDS,
    },
    // {6300}, 201 characters
    SegmentLayout {
        tag: Tag::FIBeneficiaryFI,
        name: "fiBeneficiaryFi",
        fields: &FI_TO_FI_FIELDS,
    },
    // {6310}, 200 characters
    SegmentLayout {
        tag: Tag::FIBeneficiaryFIAdvice,
        name: "fiBeneficiaryFiAdvice",
        fields: &ADVICE_FIELDS,
    },
    // {6400}, 201 characters
    SegmentLayout {
        tag: Tag::FIBeneficiary,
        name: "fiBeneficiary",
        fields: &FI_TO_FI_FIELDS,
    },
    // {6410}, 200 characters
    SegmentLayout {
        tag: Tag::FIBeneficiaryAdvice,
        name: "fiBeneficiaryAdvice",
        fields: &ADVICE_FIELDS,
    },
    // {6420}, 41 characters
    SegmentLayout {
        tag: Tag::FIPaymentMethodToBeneficiary,
        name: "fiPaymentMethodToBeneficiary",
        fields: &[
            FieldSpec::alpha_req("paymentMethod", 5),
            FieldSpec::alpha("additionalInformation", 30),
        ],
    },
    // {6500}, 216 characters
    SegmentLayout {
        tag: Tag::FIAdditionalFIToFI,
        name: "fiAdditionalFiToFi",
        fields: &[
            FieldSpec::alpha("lineOne", 35),
            FieldSpec::alpha("lineTwo", 35),
            FieldSpec::alpha("lineThree", 35),
            FieldSpec::alpha("lineFour", 35),
            FieldSpec::alpha("lineFive", 35),
            FieldSpec::alpha("lineSix", 35),
        ],
    },
    // {7033}, 29 characters
    SegmentLayout {
        tag: Tag::CurrencyInstructedAmount,
        name: "currencyInstructedAmount",
        fields: &[
            FieldSpec::alpha("swiftFieldTag", 5),
            FieldSpec::numeric_req("amount", 18),
        ],
    },
    // {7050}, 186 characters
    SegmentLayout {
        tag: Tag::OrderingCustomer,
        name: "orderingCustomer",
        fields: &COVER_PAYMENT_FIELDS,
    },
    // {7052}, 186 characters
    SegmentLayout {
        tag: Tag::OrderingInstitution,
        name: "orderingInstitution",
        fields: &COVER_PAYMENT_FIELDS,
    },
    // {7056}, 186 characters
    SegmentLayout {
        tag: Tag::IntermediaryInstitution,
        name: "intermediaryInstitution",
        fields: &COVER_PAYMENT_FIELDS,
    },
    // {7057}, 186 characters
    SegmentLayout {
        tag: Tag::InstitutionAccount,
        name: "institutionAccount",
        fields: &COVER_PAYMENT_FIELDS,
    },
    // {7059}, 186 characters
    SegmentLayout {
        tag: Tag::BeneficiaryCustomer,
        name: "beneficiaryCustomer",
        fields: &COVER_PAYMENT_FIELDS,
    },
    // {7070}, 151 characters
    SegmentLayout {
        tag: Tag::Remittance,
        name: "remittance",
        fields: &[
            FieldSpec::alpha("swiftFieldTag", 5),
            FieldSpec::alpha("swiftLineOne", 35),
            FieldSpec::alpha("swiftLineTwo", 35),
            FieldSpec::alpha("swiftLineThree", 35),
            FieldSpec::alpha("swiftLineFour", 35),
        ],
    },
    // {7072}, 221 characters
    SegmentLayout {
        tag: Tag::SenderToReceiver,
        name: "senderToReceiver",
        fields: &[
            FieldSpec::alpha("swiftFieldTag", 5),
            FieldSpec::alpha("swiftLineOne", 35),
            FieldSpec::alpha("swiftLineTwo", 35),
            FieldSpec::alpha("swiftLineThree", 35),
            FieldSpec::alpha("swiftLineFour", 35),
            FieldSpec::alpha("swiftLineFive", 35),
            FieldSpec::alpha("swiftLineSix", 35),
        ],
    },
    // {9000}, 426 characters
    SegmentLayout {
        tag: Tag::ServiceMessage,
        name: "serviceMessage",
        fields: &[
            FieldSpec::alpha("lineOne", 35),
            FieldSpec::alpha("lineTwo", 35),
            FieldSpec::alpha("lineThree", 35),
            FieldSpec::alpha("lineFour", 35),
            FieldSpec::alpha("lineFive", 35),
            FieldSpec::alpha("lineSix", 35),
            FieldSpec::alpha("lineSeven", 35),
            FieldSpec::alpha("lineEight", 35),
            FieldSpec::alpha("lineNine", 35),
            FieldSpec::alpha("lineTen", 35),
            FieldSpec::alpha("lineEleven", 35),
            FieldSpec::alpha("lineTwelve", 35),
        ],
    },
    // {1100}, 11 characters
    SegmentLayout {
        tag: Tag::MessageDisposition,
        name: "messageDisposition",
        fields: &[
            FieldSpec::numeric("formatVersion", 2),
            FieldSpec::alpha("testProductionCode", 1),
            FieldSpec::alpha("messageDuplicationCode", 1),
            FieldSpec::alpha("messageStatusIndicator", 1),
        ],
    },
    // {1110}, 18 characters
    SegmentLayout {
        tag: Tag::ReceiptTimeStamp,
        name: "receiptTimeStamp",
        fields: &[
            FieldSpec::numeric("receiptDate", 4),
            FieldSpec::numeric("receiptTime", 4),
            FieldSpec::alpha("receiptApplicationIdentification", 4),
        ],
    },
    // {1120}, 40 characters
    SegmentLayout {
        tag: Tag::OutputMessageAccountabilityData,
        name: "outputMessageAccountabilityData",
        fields: &[
            FieldSpec::numeric("outputCycleDate", 8),
            FieldSpec::alpha("outputDestinationId", 8),
            FieldSpec::numeric("outputSequenceNumber", 6),
            FieldSpec::numeric("outputDate", 4),
            FieldSpec::numeric("outputTime", 4),
            FieldSpec::alpha("outputApplicationIdentification", 4),
        ],
    },
    // {1130}, 45 characters
    SegmentLayout {
        tag: Tag::ErrorWire,
        name: "errorWire",
        fields: &[
            FieldSpec::alpha("errorCategory", 1),
            FieldSpec::alpha("errorCode", 3),
            FieldSpec::alpha("errorDescription", 35),
        ],
    },
];

/// Shared field table for the 181-character personal party segments.
static PERSONAL_FIELDS: [FieldSpec; 6] = [
    FieldSpec::alpha_req("identificationCode", 1),
    FieldSpec::alpha_req("identifier", 34),
    FieldSpec::alpha("name", 35),
    FieldSpec::alpha("addressLineOne", 35),
    FieldSpec::alpha("addressLineTwo", 35),
    FieldSpec::alpha("addressLineThree", 35),
];

/// Shared field table for the 181-character financial institution segments.
static FINANCIAL_INSTITUTION_FIELDS: [FieldSpec; 6] = [
    FieldSpec::alpha_req("identificationCode", 1),
    FieldSpec::alpha_req("identifier", 34),
    FieldSpec::alpha("name", 35),
    FieldSpec::alpha("addressLineOne", 35),
    FieldSpec::alpha("addressLineTwo", 35),
    FieldSpec::alpha("addressLineThree", 35),
];

/// Shared field table for the 201-character FI-to-FI information segments.
static FI_TO_FI_FIELDS: [FieldSpec; 6] = [
    FieldSpec::alpha("lineOne", 30),
    FieldSpec::alpha("lineTwo", 33),
    FieldSpec::alpha("lineThree", 33),
    FieldSpec::alpha("lineFour", 33),
    FieldSpec::alpha("lineFive", 33),
    FieldSpec::alpha("lineSix", 33),
];

/// Shared field table for the 200-character advice segments.
static ADVICE_FIELDS: [FieldSpec; 7] = [
    FieldSpec::alpha_req("adviceCode", 3),
    FieldSpec::alpha("lineOne", 26),
    FieldSpec::alpha("lineTwo", 33),
    FieldSpec::alpha("lineThree", 33),
    FieldSpec::alpha("lineFour", 33),
    FieldSpec::alpha("lineFive", 33),
    FieldSpec::alpha("lineSix", 33),
];

/// Shared field table for the 186-character cover payment segments.
///
/// The cover payment substructure carries a sixth line, but no 186-character
/// segment serializes it; those segments require it to be empty instead.
static COVER_PAYMENT_FIELDS: [FieldSpec; 6] = [
    FieldSpec::alpha("swiftFieldTag", 5),
    FieldSpec::alpha("swiftLineOne", 35),
    FieldSpec::alpha("swiftLineTwo", 35),
    FieldSpec::alpha("swiftLineThree", 35),
    FieldSpec::alpha("swiftLineFour", 35),
    FieldSpec::alpha("swiftLineFive", 35),
];

/// Returns the layout for a tag.
///
/// Layouts are declared in tag declaration order, so this is an index.
#[inline]
#[must_use]
pub fn layout_for(tag: Tag) -> &'static SegmentLayout {
    &LAYOUTS[tag as usize]
}

/// Looks up a layout from a six-character tag code.
///
/// # Arguments
/// * `code` - The candidate tag code, e.g. `"{4200}"`
///
/// # Returns
/// `Some` if the code names a supported segment, `None` otherwise.
#[must_use]
pub fn layout_for_code(code: &str) -> Option<&'static SegmentLayout> {
    Tag::from_code(code).map(layout_for)
}

/// Iterates all layouts in canonical serialization order.
pub fn canonical() -> impl Iterator<Item = &'static SegmentLayout> {
    LAYOUTS.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_indexed_by_tag() {
        for (index, layout) in LAYOUTS.iter().enumerate() {
            assert_eq!(
                layout.tag as usize, index,
                "layout for {} is out of order",
                layout.tag
            );
        }
    }

    #[test]
    fn test_registered_record_lengths() {
        let expect = [
            (Tag::SenderSupplied, 18),
            (Tag::TypeSubType, 10),
            (Tag::InputMessageAccountabilityData, 28),
            (Tag::Amount, 18),
            (Tag::SenderDepositoryInstitution, 33),
            (Tag::ReceiverDepositoryInstitution, 33),
            (Tag::BusinessFunctionCode, 12),
            (Tag::SenderReference, 22),
            (Tag::PreviousMessageIdentifier, 28),
            (Tag::LocalInstrument, 45),
            (Tag::Charges, 67),
            (Tag::InstructedAmount, 24),
            (Tag::ExchangeRate, 18),
            (Tag::BeneficiaryIntermediaryFI, 181),
            (Tag::BeneficiaryFI, 181),
            (Tag::Beneficiary, 181),
            (Tag::BeneficiaryReference, 22),
            (Tag::AccountDebitedDrawdown, 181),
            (Tag::Originator, 181),
            (Tag::OriginatorFI, 181),
            (Tag::InstructingFI, 181),
            (Tag::AccountCreditedDrawdown, 15),
            (Tag::OriginatorToBeneficiary, 146),
            (Tag::FIReceiverFI, 201),
            (Tag::FIDrawdownDebitAccountAdvice, 200),
            (Tag::FIIntermediaryFI, 201),
            (Tag::FIIntermediaryFIAdvice, 200),
            (Tag::FIBeneficiaryFI, 201),
            (Tag::FIBeneficiaryFIAdvice, 200),
            (Tag::FIBeneficiary, 201),
            (Tag::FIBeneficiaryAdvice, 200),
            (Tag::FIPaymentMethodToBeneficiary, 41),
            (Tag::FIAdditionalFIToFI, 216),
            (Tag::CurrencyInstructedAmount, 29),
            (Tag::OrderingCustomer, 186),
            (Tag::OrderingInstitution, 186),
            (Tag::IntermediaryInstitution, 186),
            (Tag::InstitutionAccount, 186),
            (Tag::BeneficiaryCustomer, 186),
            (Tag::Remittance, 151),
            (Tag::SenderToReceiver, 221),
            (Tag::ServiceMessage, 426),
            (Tag::MessageDisposition, 11),
            (Tag::ReceiptTimeStamp, 18),
            (Tag::OutputMessageAccountabilityData, 40),
            (Tag::ErrorWire, 45),
        ];
        assert_eq!(expect.len(), LAYOUTS.len());
        for (tag, len) in expect {
            assert_eq!(
                layout_for(tag).total_len(),
                len,
                "wrong total length for {tag}"
            );
        }
    }

    #[test]
    fn test_layout_for_code() {
        let layout = layout_for_code("{4200}").unwrap();
        assert_eq!(layout.tag, Tag::Beneficiary);
        assert_eq!(layout.name, "beneficiary");
        assert!(layout_for_code("{9999}").is_none());
        assert!(layout_for_code("{420}").is_none());
    }

    #[test]
    fn test_canonical_order_boundaries() {
        let first = canonical().next().unwrap();
        assert_eq!(first.tag, Tag::SenderSupplied);
        let last = canonical().last().unwrap();
        assert_eq!(last.tag, Tag::ErrorWire);
    }

    #[test]
    fn test_field_names_are_unique_within_layout() {
        for layout in canonical() {
            for (i, field) in layout.fields.iter().enumerate() {
                for other in &layout.fields[i + 1..] {
                    assert_ne!(
                        field.name, other.name,
                        "duplicate field name in {}",
                        layout.tag
                    );
                }
            }
        }
    }
}
