/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Wire-format writer.
//!
//! The writer renders messages record by record, one per line, walking the
//! slots in canonical tag order and skipping the empty ones. Output from a
//! message that was read in round-trips to the same text, because every
//! segment serializes back to its registered width.

use ferrowire_message::{FedwireMessage, WireFile, WireSegment};

/// Wire-format writer building an in-memory rendering.
#[derive(Debug, Default)]
pub struct Writer {
    /// Output buffer.
    out: String,
}

/// Appends a populated slot's record and a newline.
fn write_slot<T: WireSegment>(out: &mut String, slot: &Option<T>) {
    if let Some(segment) = slot {
        out.push_str(&segment.serialize());
        out.push('\n');
    }
}

impl Writer {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with pre-allocated output capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Appends every populated segment of a message, in canonical tag order.
    pub fn write_message(&mut self, message: &FedwireMessage) {
        let out = &mut self.out;
        write_slot(out, &message.sender_supplied);
        write_slot(out, &message.type_sub_type);
        write_slot(out, &message.input_message_accountability_data);
        write_slot(out, &message.amount);
        write_slot(out, &message.sender_depository_institution);
        write_slot(out, &message.receiver_depository_institution);
        write_slot(out, &message.business_function_code);
        write_slot(out, &message.sender_reference);
        write_slot(out, &message.previous_message_identifier);
        write_slot(out, &message.local_instrument);
        write_slot(out, &message.charges);
        write_slot(out, &message.instructed_amount);
        write_slot(out, &message.exchange_rate);
        write_slot(out, &message.beneficiary_intermediary_fi);
        write_slot(out, &message.beneficiary_fi);
        write_slot(out, &message.beneficiary);
        write_slot(out, &message.beneficiary_reference);
        write_slot(out, &message.account_debited_drawdown);
        write_slot(out, &message.originator);
        write_slot(out, &message.originator_fi);
        write_slot(out, &message.instructing_fi);
        write_slot(out, &message.account_credited_drawdown);
        write_slot(out, &message.originator_to_beneficiary);
        write_slot(out, &message.fi_receiver_fi);
        write_slot(out, &message.fi_drawdown_debit_account_advice);
        write_slot(out, &message.fi_intermediary_fi);
        write_slot(out, &message.fi_intermediary_fi_advice);
        write_slot(out, &message.fi_beneficiary_fi);
        write_slot(out, &message.fi_beneficiary_fi_advice);
        write_slot(out, &message.fi_beneficiary);
        write_slot(out, &message.fi_beneficiary_advice);
        write_slot(out, &message.fi_payment_method_to_beneficiary);
        write_slot(out, &message.fi_additional_fi_to_fi);
        write_slot(out, &message.currency_instructed_amount);
        write_slot(out, &message.ordering_customer);
        write_slot(out, &message.ordering_institution);
        write_slot(out, &message.intermediary_institution);
        write_slot(out, &message.institution_account);
        write_slot(out, &message.beneficiary_customer);
        write_slot(out, &message.remittance);
        write_slot(out, &message.sender_to_receiver);
        write_slot(out, &message.service_message);
        write_slot(out, &message.message_disposition);
        write_slot(out, &message.receipt_time_stamp);
        write_slot(out, &message.output_message_accountability_data);
        write_slot(out, &message.error_wire);
    }

    /// Appends every message of a file, in file order.
    pub fn write_file(&mut self, file: &WireFile) {
        for message in &file.messages {
            self.write_message(message);
        }
    }

    /// Finalizes the writer and returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
