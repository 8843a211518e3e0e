/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Record tags for the Fedwire funds-transfer format.
//!
//! Every record starts with a six-character tag such as `{1500}`. The [`Tag`]
//! enumeration is the closed set of tags this engine supports, declared in the
//! canonical order in which segments appear inside a serialized message. The
//! Fed-generated appendix tags ({1100}, {1110}, {1120}, {1130}) come last so
//! that {1500} is the only message boundary a reader ever has to recognize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in characters of a record tag, braces included.
pub const TAG_LEN: usize = 6;

/// Tags of the supported Fedwire segments, in canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Sender Supplied Information ({1500}), the first record of every message.
    SenderSupplied,
    /// Type/Subtype ({1510}).
    TypeSubType,
    /// Input Message Accountability Data ({1520}).
    InputMessageAccountabilityData,
    /// Amount ({2000}).
    Amount,
    /// Sender Depository Institution ({3100}).
    SenderDepositoryInstitution,
    /// Receiver Depository Institution ({3400}).
    ReceiverDepositoryInstitution,
    /// Business Function Code ({3600}).
    BusinessFunctionCode,
    /// Sender Reference ({3320}).
    SenderReference,
    /// Previous Message Identifier ({3500}).
    PreviousMessageIdentifier,
    /// Local Instrument ({3610}).
    LocalInstrument,
    /// Charges ({3700}).
    Charges,
    /// Instructed Amount ({3710}).
    InstructedAmount,
    /// Exchange Rate ({3720}).
    ExchangeRate,
    /// Beneficiary Intermediary FI ({4000}).
    BeneficiaryIntermediaryFI,
    /// Beneficiary FI ({4100}).
    BeneficiaryFI,
    /// Beneficiary ({4200}).
    Beneficiary,
    /// Beneficiary Reference ({4320}).
    BeneficiaryReference,
    /// Account Debited in Drawdown ({4400}).
    AccountDebitedDrawdown,
    /// Originator ({5000}).
    Originator,
    /// Originator FI ({5100}).
    OriginatorFI,
    /// Instructing FI ({5200}).
    InstructingFI,
    /// Account Credited in Drawdown ({5400}).
    AccountCreditedDrawdown,
    /// Originator to Beneficiary Information ({6000}).
    OriginatorToBeneficiary,
    /// FI to FI Receiver FI Information ({6100}).
    FIReceiverFI,
    /// FI Drawdown Debit Account Advice Information ({6110}).
    FIDrawdownDebitAccountAdvice,
    /// FI to FI Intermediary FI Information ({6200}).
    FIIntermediaryFI,
    /// FI Intermediary FI Advice Information ({6210}).
    FIIntermediaryFIAdvice,
    /// FI to FI Beneficiary FI Information ({6300}).
    FIBeneficiaryFI,
    /// FI Beneficiary FI Advice Information ({6310}).
    FIBeneficiaryFIAdvice,
    /// FI to FI Beneficiary Information ({6400}).
    FIBeneficiary,
    /// FI Beneficiary Advice Information ({6410}).
    FIBeneficiaryAdvice,
    /// FI Payment Method to Beneficiary ({6420}).
    FIPaymentMethodToBeneficiary,
    /// FI Additional FI to FI Information ({6500}).
    FIAdditionalFIToFI,
    /// Currency Instructed Amount ({7033}).
    CurrencyInstructedAmount,
    /// Ordering Customer ({7050}).
    OrderingCustomer,
    /// Ordering Institution ({7052}).
    OrderingInstitution,
    /// Intermediary Institution ({7056}).
    IntermediaryInstitution,
    /// Institution Account ({7057}).
    InstitutionAccount,
    /// Beneficiary Customer ({7059}).
    BeneficiaryCustomer,
    /// Remittance Information ({7070}).
    Remittance,
    /// Sender to Receiver Information ({7072}).
    SenderToReceiver,
    /// Service Message Information ({9000}).
    ServiceMessage,
    /// Message Disposition ({1100}), Fed-generated.
    MessageDisposition,
    /// Receipt Time Stamp ({1110}), Fed-generated.
    ReceiptTimeStamp,
    /// Output Message Accountability Data ({1120}), Fed-generated.
    OutputMessageAccountabilityData,
    /// Error ({1130}), Fed-generated.
    ErrorWire,
}

impl Tag {
    /// Returns the six-character wire form of this tag, braces included.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SenderSupplied => "{1500}",
            Self::TypeSubType => "{1510}",
            Self::InputMessageAccountabilityData => "{1520}",
            Self::Amount => "{2000}",
            Self::SenderDepositoryInstitution => "{3100}",
            Self::ReceiverDepositoryInstitution => "{3400}",
            Self::BusinessFunctionCode => "{3600}",
            Self::SenderReference => "{3320}",
            Self::PreviousMessageIdentifier => "{3500}",
            Self::LocalInstrument => "{3610}",
            Self::Charges => "{3700}",
            Self::InstructedAmount => "{3710}",
            Self::ExchangeRate => "{3720}",
            Self::BeneficiaryIntermediaryFI => "{4000}",
            Self::BeneficiaryFI => "{4100}",
            Self::Beneficiary => "{4200}",
            Self::BeneficiaryReference => "{4320}",
            Self::AccountDebitedDrawdown => "{4400}",
            Self::Originator => "{5000}",
            Self::OriginatorFI => "{5100}",
            Self::InstructingFI => "{5200}",
            Self::AccountCreditedDrawdown => "{5400}",
            Self::OriginatorToBeneficiary => "{6000}",
            Self::FIReceiverFI => "{6100}",
            Self::FIDrawdownDebitAccountAdvice => "{6110}",
            Self::FIIntermediaryFI => "{6200}",
            Self::FIIntermediaryFIAdvice => "{6210}",
            Self::FIBeneficiaryFI => "{6300}",
            Self::FIBeneficiaryFIAdvice => "{6310}",
            Self::FIBeneficiary => "{6400}",
            Self::FIBeneficiaryAdvice => "{6410}",
            Self::FIPaymentMethodToBeneficiary => "{6420}",
            Self::FIAdditionalFIToFI => "{6500}",
            Self::CurrencyInstructedAmount => "{7033}",
            Self::OrderingCustomer => "{7050}",
            Self::OrderingInstitution => "{7052}",
            Self::IntermediaryInstitution => "{7056}",
            Self::InstitutionAccount => "{7057}",
            Self::BeneficiaryCustomer => "{7059}",
            Self::Remittance => "{7070}",
            Self::SenderToReceiver => "{7072}",
            Self::ServiceMessage => "{9000}",
            Self::MessageDisposition => "{1100}",
            Self::ReceiptTimeStamp => "{1110}",
            Self::OutputMessageAccountabilityData => "{1120}",
            Self::ErrorWire => "{1130}",
        }
    }

    /// Looks up a tag from its six-character wire form.
    ///
    /// # Arguments
    /// * `code` - The candidate tag code, e.g. `"{4200}"`
    ///
    /// # Returns
    /// `Some(Tag)` if the code names a supported segment, `None` otherwise.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "{1500}" => Some(Self::SenderSupplied),
            "{1510}" => Some(Self::TypeSubType),
            "{1520}" => Some(Self::InputMessageAccountabilityData),
            "{2000}" => Some(Self::Amount),
            "{3100}" => Some(Self::SenderDepositoryInstitution),
            "{3400}" => Some(Self::ReceiverDepositoryInstitution),
            "{3600}" => Some(Self::BusinessFunctionCode),
            "{3320}" => Some(Self::SenderReference),
            "{3500}" => Some(Self::PreviousMessageIdentifier),
            "{3610}" => Some(Self::LocalInstrument),
            "{3700}" => Some(Self::Charges),
            "{3710}" => Some(Self::InstructedAmount),
            "{3720}" => Some(Self::ExchangeRate),
            "{4000}" => Some(Self::BeneficiaryIntermediaryFI),
            "{4100}" => Some(Self::BeneficiaryFI),
            "{4200}" => Some(Self::Beneficiary),
            "{4320}" => Some(Self::BeneficiaryReference),
            "{4400}" => Some(Self::AccountDebitedDrawdown),
            "{5000}" => Some(Self::Originator),
            "{5100}" => Some(Self::OriginatorFI),
            "{5200}" => Some(Self::InstructingFI),
            "{5400}" => Some(Self::AccountCreditedDrawdown),
            "{6000}" => Some(Self::OriginatorToBeneficiary),
            "{6100}" => Some(Self::FIReceiverFI),
            "{6110}" => Some(Self::FIDrawdownDebitAccountAdvice),
            "{6200}" => Some(Self::FIIntermediaryFI),
            "{6210}" => Some(Self::FIIntermediaryFIAdvice),
            "{6300}" => Some(Self::FIBeneficiaryFI),
            "{6310}" => Some(Self::FIBeneficiaryFIAdvice),
            "{6400}" => Some(Self::FIBeneficiary),
            "{6410}" => Some(Self::FIBeneficiaryAdvice),
            "{6420}" => Some(Self::FIPaymentMethodToBeneficiary),
            "{6500}" => Some(Self::FIAdditionalFIToFI),
            "{7033}" => Some(Self::CurrencyInstructedAmount),
            "{7050}" => Some(Self::OrderingCustomer),
            "{7052}" => Some(Self::OrderingInstitution),
            "{7056}" => Some(Self::IntermediaryInstitution),
            "{7057}" => Some(Self::InstitutionAccount),
            "{7059}" => Some(Self::BeneficiaryCustomer),
            "{7070}" => Some(Self::Remittance),
            "{7072}" => Some(Self::SenderToReceiver),
            "{9000}" => Some(Self::ServiceMessage),
            "{1100}" => Some(Self::MessageDisposition),
            "{1110}" => Some(Self::ReceiptTimeStamp),
            "{1120}" => Some(Self::OutputMessageAccountabilityData),
            "{1130}" => Some(Self::ErrorWire),
            _ => None,
        }
    }

    /// Returns true for the Fed-generated appendix tags that only appear on
    /// messages coming back from the Fed.
    #[must_use]
    pub const fn is_fed_appendix(self) -> bool {
        matches!(
            self,
            Self::MessageDisposition
                | Self::ReceiptTimeStamp
                | Self::OutputMessageAccountabilityData
                | Self::ErrorWire
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(Tag::from_code("{4200}"), Some(Tag::Beneficiary));
        assert_eq!(Tag::Beneficiary.as_str(), "{4200}");
        assert_eq!(Tag::from_code("{1500}"), Some(Tag::SenderSupplied));
        assert_eq!(Tag::from_code("{9999}"), None);
    }

    #[test]
    fn test_tag_code_length() {
        assert_eq!(Tag::SenderSupplied.as_str().len(), TAG_LEN);
        assert_eq!(Tag::OutputMessageAccountabilityData.as_str().len(), TAG_LEN);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::BeneficiaryCustomer.to_string(), "{7059}");
    }

    #[test]
    fn test_fed_appendix() {
        assert!(Tag::MessageDisposition.is_fed_appendix());
        assert!(Tag::ErrorWire.is_fed_appendix());
        assert!(!Tag::SenderSupplied.is_fed_appendix());
    }
}
