/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! The [`Segment`] sum type over every supported segment kind.
//!
//! The reader works in terms of `Segment`: it looks the tag up, builds the
//! matching empty variant with [`Segment::for_tag`], parses the record into
//! it, and hands it to the message. Variant names match the [`Tag`] variants
//! one for one.

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
use crate::service::{
    ErrorWire, MessageDisposition, OutputMessageAccountabilityData, ReceiptTimeStamp,
    ServiceMessage,
};
use crate::transfer::{
    Charges, ExchangeRate, InstructedAmount, LocalInstrument, PreviousMessageIdentifier,
    SenderReference,
};
use ferrowire_core::{FieldError, ParseError, Tag};

macro_rules! segments {
    ($($variant:ident),* $(,)?) => {
        /// One segment of any supported kind.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Segment {
            $(
                #[doc = concat!("A `", stringify!($variant), "` segment.")]
                $variant($variant),
            )*
        }

        impl Segment {
            /// Returns an empty segment of the kind the tag names.
            #[must_use]
            pub fn for_tag(tag: Tag) -> Self {
                match tag {
                    $(Tag::$variant => Segment::$variant($variant::new()),)*
                }
            }

            /// Returns the canonical tag of this segment's kind.
            #[must_use]
            pub fn tag(&self) -> Tag {
                match self {
                    $(Segment::$variant(_) => Tag::$variant,)*
                }
            }

            /// Parses a fixed-width record into this segment.
            ///
            /// # Errors
            /// [`ParseError::TagWrongLength`] if the record length is wrong
            /// for this segment's kind.
            pub fn parse(&mut self, record: &str) -> Result<(), ParseError> {
                match self {
                    $(Segment::$variant(segment) => segment.parse(record),)*
                }
            }

            /// Validates this segment's content.
            ///
            /// # Errors
            /// The first [`FieldError`] found.
            pub fn validate(&self) -> Result<(), FieldError> {
                match self {
                    $(Segment::$variant(segment) => segment.validate(),)*
                }
            }

            /// Serializes this segment to its fixed-width wire form.
            #[must_use]
            pub fn serialize(&self) -> String {
                match self {
                    $(Segment::$variant(segment) => segment.serialize(),)*
                }
            }
        }
    };
}

segments!(
    SenderSupplied,
    TypeSubType,
    InputMessageAccountabilityData,
    Amount,
    SenderDepositoryInstitution,
    ReceiverDepositoryInstitution,
    BusinessFunctionCode,
    SenderReference,
    PreviousMessageIdentifier,
    LocalInstrument,
    Charges,
    InstructedAmount,
    ExchangeRate,
    BeneficiaryIntermediaryFI,
    BeneficiaryFI,
    Beneficiary,
    BeneficiaryReference,
    AccountDebitedDrawdown,
    Originator,
    OriginatorFI,
    InstructingFI,
    AccountCreditedDrawdown,
    OriginatorToBeneficiary,
    FIReceiverFI,
    FIDrawdownDebitAccountAdvice,
    FIIntermediaryFI,
    FIIntermediaryFIAdvice,
    FIBeneficiaryFI,
    FIBeneficiaryFIAdvice,
    FIBeneficiary,
    FIBeneficiaryAdvice,
    FIPaymentMethodToBeneficiary,
    FIAdditionalFIToFI,
    CurrencyInstructedAmount,
    OrderingCustomer,
    OrderingInstitution,
    IntermediaryInstitution,
    InstitutionAccount,
    BeneficiaryCustomer,
    Remittance,
    SenderToReceiver,
    ServiceMessage,
    MessageDisposition,
    ReceiptTimeStamp,
    OutputMessageAccountabilityData,
    ErrorWire,
);

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowire_registry::{canonical, layout_for};

    #[test]
    fn test_for_tag_covers_every_layout() {
        for layout in canonical() {
            let segment = Segment::for_tag(layout.tag);
            assert_eq!(segment.tag(), layout.tag);
            // An empty segment always serializes to the registered length.
            assert_eq!(segment.serialize().chars().count(), layout.total_len());
        }
    }

    #[test]
    fn test_parse_dispatch() {
        let mut segment = Segment::for_tag(Tag::Amount);
        segment.parse("{2000}000000001234").unwrap();
        segment.validate().unwrap();
        assert_eq!(segment.serialize(), "{2000}000000001234");
        match segment {
            Segment::Amount(amount) => assert_eq!(amount.amount, "000000001234"),
            other => panic!("parsed into the wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dispatch_wrong_length() {
        let mut segment = Segment::for_tag(Tag::Beneficiary);
        let err = segment.parse("{4200}short").unwrap_err();
        assert_eq!(
            err,
            ParseError::TagWrongLength {
                expected: 181,
                actual: 11
            }
        );
    }

    #[test]
    fn test_round_trip_every_kind_when_empty() {
        for layout in canonical() {
            let segment = Segment::for_tag(layout.tag);
            let line = segment.serialize();
            let mut parsed = Segment::for_tag(layout.tag);
            parsed.parse(&line).unwrap();
            assert_eq!(parsed, segment, "round trip differs for {}", layout.tag);
            assert_eq!(layout_for(parsed.tag()).total_len(), line.chars().count());
        }
    }
}
