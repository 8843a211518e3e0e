/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire Codec
//!
//! Wire-format reading and writing for the ferrowire Fedwire engine.
//!
//! The [`Reader`] turns line-oriented wire text into a
//! [`WireFile`](ferrowire_message::WireFile), splitting messages on the
//! `{1500}` header tag and reporting the first structural problem with its
//! line number. The [`Writer`] renders a file back to text, one record per
//! line in canonical tag order.
//!
//! Reading never validates content; pair [`read_file`] with
//! [`WireFile::create`](ferrowire_message::WireFile::create) when the file
//! must also be valid.

pub mod reader;
pub mod writer;

pub use reader::{Reader, read_file};
pub use writer::Writer;

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end shape: text -> file -> validate -> text.
    #[test]
    fn test_read_validate_write() {
        let envelope = concat!(
            "{1500}30        T \n",
            "{1510}1000\n",
            "{1520}20240101Source  000001\n",
            "{2000}000000001234\n",
            "{3100}121042882Wells Fargo NA    \n",
            "{3400}231380104Citadel           \n",
            "{3600}CTR   \n",
            "{3320}Sender Reference\n",
        );
        let beneficiary = format!(
            "{{4200}}3{:<34}{:<35}{:<35}{:<35}{:<35}",
            "1234", "Name", "Address One", "Address Two", "Address Three"
        );
        let input = format!("{envelope}{beneficiary}\n");

        let file = read_file(&input).unwrap();
        assert_eq!(file.messages.len(), 1);
        file.create().unwrap();

        let mut writer = Writer::new();
        writer.write_file(&file);
        assert_eq!(writer.finish(), input);
    }
}
