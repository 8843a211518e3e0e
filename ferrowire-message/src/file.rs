/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! The [`WireFile`] unit of persistence: an ordered collection of messages.

use crate::message::FedwireMessage;
use ferrowire_core::MessageError;
use serde::{Deserialize, Serialize};

/// An ordered collection of Fedwire messages with an identifier.
///
/// The identifier starts out empty and is assigned by the persistence layer
/// the first time the file is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireFile {
    /// File identifier.
    pub id: String,
    /// The messages, in the order they were read or appended.
    pub messages: Vec<FedwireMessage>,
}

impl WireFile {
    /// Creates an empty file with no identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the file.
    pub fn add_message(&mut self, message: FedwireMessage) {
        self.messages.push(message);
    }

    /// Finalizes the file by validating every message in order.
    ///
    /// All-or-nothing: the first invalid message fails the whole file and no
    /// message is marked accepted.
    ///
    /// # Errors
    /// The first [`MessageError`] found across the messages.
    pub fn create(&self) -> Result<(), MessageError> {
        for message in &self.messages {
            message.validate()?;
        }
        Ok(())
    }
}
