/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Closed code sets used by segment validation.
//!
//! Several Fedwire fields only admit values from a short, closed vocabulary:
//! - [`IdentificationCode`]: how a party identifier is to be interpreted
//! - [`AdviceCode`]: how an advice is to be delivered
//! - [`BusinessFunctionCode`]: the business purpose of the transfer
//! - [`LocalInstrumentCode`]: the cover-payment / proprietary format marker
//! - [`PaymentMethod`]: payment method to the beneficiary
//! - [`ChargeDetails`]: who bears the charges
//!
//! Segments store these fields as plain strings so that round-tripping never
//! loses unknown input; validation checks membership through `from_code`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identification code for a party identifier (personal or financial institution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentificationCode {
    /// SWIFT Bank Identifier Code (`B`).
    SwiftBankIdentifier,
    /// CHIPS participant number (`C`).
    ChipsParticipant,
    /// Demand deposit account number (`D`).
    DemandDepositAccountNumber,
    /// Fed routing number (`F`).
    FedRoutingNumber,
    /// SWIFT BIC or BEI and account number (`T`).
    SwiftBicOrBei,
    /// CHIPS identifier (`U`).
    ChipsIdentifier,
    /// Passport number (`1`).
    PassportNumber,
    /// Tax identification number (`2`).
    TaxIdentificationNumber,
    /// Driver's license number (`3`).
    DriversLicenseNumber,
    /// Alien registration number (`4`).
    AlienRegistrationNumber,
    /// Corporate identification (`5`).
    CorporateIdentification,
    /// Other identification (`9`).
    OtherIdentification,
}

impl IdentificationCode {
    /// Returns the single-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SwiftBankIdentifier => "B",
            Self::ChipsParticipant => "C",
            Self::DemandDepositAccountNumber => "D",
            Self::FedRoutingNumber => "F",
            Self::SwiftBicOrBei => "T",
            Self::ChipsIdentifier => "U",
            Self::PassportNumber => "1",
            Self::TaxIdentificationNumber => "2",
            Self::DriversLicenseNumber => "3",
            Self::AlienRegistrationNumber => "4",
            Self::CorporateIdentification => "5",
            Self::OtherIdentification => "9",
        }
    }

    /// Looks up an identification code from its wire form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "B" => Some(Self::SwiftBankIdentifier),
            "C" => Some(Self::ChipsParticipant),
            "D" => Some(Self::DemandDepositAccountNumber),
            "F" => Some(Self::FedRoutingNumber),
            "T" => Some(Self::SwiftBicOrBei),
            "U" => Some(Self::ChipsIdentifier),
            "1" => Some(Self::PassportNumber),
            "2" => Some(Self::TaxIdentificationNumber),
            "3" => Some(Self::DriversLicenseNumber),
            "4" => Some(Self::AlienRegistrationNumber),
            "5" => Some(Self::CorporateIdentification),
            "9" => Some(Self::OtherIdentification),
            _ => None,
        }
    }

    /// Returns true if this code identifies a financial institution.
    #[must_use]
    pub const fn is_financial_institution(self) -> bool {
        matches!(
            self,
            Self::SwiftBankIdentifier
                | Self::ChipsParticipant
                | Self::DemandDepositAccountNumber
                | Self::FedRoutingNumber
                | Self::SwiftBicOrBei
                | Self::ChipsIdentifier
        )
    }

    /// Returns true if this code identifies a person or non-bank organization.
    #[must_use]
    pub const fn is_personal(self) -> bool {
        !self.is_financial_institution()
    }
}

impl fmt::Display for IdentificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Advice code stating how an advice is to be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdviceCode {
    /// By letter (`LTR`).
    Letter,
    /// By phone (`PHN`).
    Phone,
    /// By telex (`TLX`).
    Telex,
    /// By wire (`WRE`).
    Wire,
    /// Hold the advice (`HLD`).
    Hold,
}

impl AdviceCode {
    /// Returns the three-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Letter => "LTR",
            Self::Phone => "PHN",
            Self::Telex => "TLX",
            Self::Wire => "WRE",
            Self::Hold => "HLD",
        }
    }

    /// Looks up an advice code from its wire form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "LTR" => Some(Self::Letter),
            "PHN" => Some(Self::Phone),
            "TLX" => Some(Self::Telex),
            "WRE" => Some(Self::Wire),
            "HLD" => Some(Self::Hold),
            _ => None,
        }
    }
}

impl fmt::Display for AdviceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Business function code of a transfer ({3600}).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessFunctionCode {
    /// Bank transfer (`BTR`).
    BankTransfer,
    /// Check same-day settlement (`CKS`).
    CheckSameDaySettlement,
    /// Customer transfer plus (`CTP`).
    CustomerTransferPlus,
    /// Customer transfer (`CTR`).
    CustomerTransfer,
    /// Deposit to sender's account (`DEP`).
    Deposit,
    /// Bank-to-bank drawdown request (`DRB`).
    BankDrawdownRequest,
    /// Customer or corporate drawdown request (`DRC`).
    CustomerCorporateDrawdownRequest,
    /// Drawdown payment (`DRW`).
    DrawdownPayment,
    /// Fed funds returned (`FFR`).
    FedFundsReturned,
    /// Fed funds sold (`FFS`).
    FedFundsSold,
    /// Service message (`SVC`).
    ServiceMessage,
}

impl BusinessFunctionCode {
    /// Returns the three-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BankTransfer => "BTR",
            Self::CheckSameDaySettlement => "CKS",
            Self::CustomerTransferPlus => "CTP",
            Self::CustomerTransfer => "CTR",
            Self::Deposit => "DEP",
            Self::BankDrawdownRequest => "DRB",
            Self::CustomerCorporateDrawdownRequest => "DRC",
            Self::DrawdownPayment => "DRW",
            Self::FedFundsReturned => "FFR",
            Self::FedFundsSold => "FFS",
            Self::ServiceMessage => "SVC",
        }
    }

    /// Looks up a business function code from its wire form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BTR" => Some(Self::BankTransfer),
            "CKS" => Some(Self::CheckSameDaySettlement),
            "CTP" => Some(Self::CustomerTransferPlus),
            "CTR" => Some(Self::CustomerTransfer),
            "DEP" => Some(Self::Deposit),
            "DRB" => Some(Self::BankDrawdownRequest),
            "DRC" => Some(Self::CustomerCorporateDrawdownRequest),
            "DRW" => Some(Self::DrawdownPayment),
            "FFR" => Some(Self::FedFundsReturned),
            "FFS" => Some(Self::FedFundsSold),
            "SVC" => Some(Self::ServiceMessage),
            _ => None,
        }
    }
}

impl fmt::Display for BusinessFunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Local instrument code ({3610}).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalInstrumentCode {
    /// ANSI X12 format (`ANSI`).
    AnsiX12,
    /// Sequence B cover payment structured (`COVS`).
    SequenceBCoverPaymentStructured,
    /// General XML format (`GXML`).
    GeneralXml,
    /// ISO 20022 XML format (`IXML`).
    Iso20022Xml,
    /// Narrative text (`NARR`).
    NarrativeText,
    /// Proprietary local instrument code (`PROP`).
    ProprietaryCode,
    /// Structured remittance information (`RMTS`).
    RemittanceInformationStructured,
    /// Related remittance information (`RRMT`).
    RelatedRemittanceInformation,
    /// STP 820 format (`S820`).
    Stp820,
    /// SWIFT field 70 (`SWIF`).
    SwiftField70,
    /// UN/EDIFACT format (`UEDI`).
    Unedifact,
}

impl LocalInstrumentCode {
    /// Returns the four-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AnsiX12 => "ANSI",
            Self::SequenceBCoverPaymentStructured => "COVS",
            Self::GeneralXml => "GXML",
            Self::Iso20022Xml => "IXML",
            Self::NarrativeText => "NARR",
            Self::ProprietaryCode => "PROP",
            Self::RemittanceInformationStructured => "RMTS",
            Self::RelatedRemittanceInformation => "RRMT",
            Self::Stp820 => "S820",
            Self::SwiftField70 => "SWIF",
            Self::Unedifact => "UEDI",
        }
    }

    /// Looks up a local instrument code from its wire form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ANSI" => Some(Self::AnsiX12),
            "COVS" => Some(Self::SequenceBCoverPaymentStructured),
            "GXML" => Some(Self::GeneralXml),
            "IXML" => Some(Self::Iso20022Xml),
            "NARR" => Some(Self::NarrativeText),
            "PROP" => Some(Self::ProprietaryCode),
            "RMTS" => Some(Self::RemittanceInformationStructured),
            "RRMT" => Some(Self::RelatedRemittanceInformation),
            "S820" => Some(Self::Stp820),
            "SWIF" => Some(Self::SwiftField70),
            "UEDI" => Some(Self::Unedifact),
            _ => None,
        }
    }
}

impl fmt::Display for LocalInstrumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Payment method to the beneficiary ({6420}).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Payment by check (`CHECK`).
    Check,
}

impl PaymentMethod {
    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Check => "CHECK",
        }
    }

    /// Looks up a payment method from its wire form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CHECK" => Some(Self::Check),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Charge details code ({3700}).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeDetails {
    /// Charges borne by the beneficiary (`B`).
    Beneficiary,
    /// Charges shared (`S`).
    Shared,
}

impl ChargeDetails {
    /// Returns the single-character wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Beneficiary => "B",
            Self::Shared => "S",
        }
    }

    /// Looks up a charge details code from its wire form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "B" => Some(Self::Beneficiary),
            "S" => Some(Self::Shared),
            _ => None,
        }
    }
}

impl fmt::Display for ChargeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identification_code_round_trip() {
        assert_eq!(
            IdentificationCode::from_code("3"),
            Some(IdentificationCode::DriversLicenseNumber)
        );
        assert_eq!(IdentificationCode::DriversLicenseNumber.code(), "3");
        assert_eq!(IdentificationCode::from_code("X"), None);
    }

    #[test]
    fn test_identification_code_families() {
        assert!(IdentificationCode::DemandDepositAccountNumber.is_financial_institution());
        assert!(!IdentificationCode::DemandDepositAccountNumber.is_personal());
        assert!(IdentificationCode::DriversLicenseNumber.is_personal());
        assert!(!IdentificationCode::DriversLicenseNumber.is_financial_institution());
    }

    #[test]
    fn test_advice_code() {
        assert_eq!(AdviceCode::from_code("LTR"), Some(AdviceCode::Letter));
        assert_eq!(AdviceCode::from_code("ltr"), None);
        assert_eq!(AdviceCode::Hold.code(), "HLD");
    }

    #[test]
    fn test_business_function_code() {
        assert_eq!(
            BusinessFunctionCode::from_code("CTR"),
            Some(BusinessFunctionCode::CustomerTransfer)
        );
        assert_eq!(BusinessFunctionCode::ServiceMessage.code(), "SVC");
        assert_eq!(BusinessFunctionCode::from_code("XXX"), None);
    }

    #[test]
    fn test_local_instrument_code() {
        assert_eq!(
            LocalInstrumentCode::from_code("PROP"),
            Some(LocalInstrumentCode::ProprietaryCode)
        );
        assert_eq!(LocalInstrumentCode::SwiftField70.code(), "SWIF");
    }

    #[test]
    fn test_payment_method_and_charges() {
        assert_eq!(PaymentMethod::from_code("CHECK"), Some(PaymentMethod::Check));
        assert_eq!(PaymentMethod::from_code("CASH"), None);
        assert_eq!(ChargeDetails::from_code("S"), Some(ChargeDetails::Shared));
        assert_eq!(ChargeDetails::Beneficiary.to_string(), "B");
    }
}
