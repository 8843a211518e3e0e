//! Fedwire File Round-Trip Example
//!
//! Builds a minimal customer transfer, validates it, renders it as wire
//! text, reads the text back, and prints both forms.

use ferrowire::codec::{Writer, read_file};
use ferrowire::message::envelope::{
    Amount, BusinessFunctionCode, InputMessageAccountabilityData, ReceiverDepositoryInstitution,
    SenderDepositoryInstitution, SenderSupplied, TypeSubType,
};
use ferrowire::message::{FedwireMessage, WireFile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut message = FedwireMessage::new();

    let mut sender_supplied = SenderSupplied::new();
    sender_supplied.test_production_code = "T".to_string();
    message.sender_supplied = Some(sender_supplied);

    let mut type_sub_type = TypeSubType::new();
    type_sub_type.type_code = "10".to_string();
    type_sub_type.sub_type_code = "00".to_string();
    message.type_sub_type = Some(type_sub_type);

    let mut imad = InputMessageAccountabilityData::new();
    imad.input_cycle_date = "20240101".to_string();
    imad.input_source = "Source".to_string();
    imad.input_sequence_number = "000001".to_string();
    message.input_message_accountability_data = Some(imad);

    let mut amount = Amount::new();
    amount.amount = "000000001234".to_string();
    message.amount = Some(amount);

    let mut sender = SenderDepositoryInstitution::new();
    sender.sender_aba_number = "121042882".to_string();
    sender.sender_short_name = "Wells Fargo NA".to_string();
    message.sender_depository_institution = Some(sender);

    let mut receiver = ReceiverDepositoryInstitution::new();
    receiver.receiver_aba_number = "231380104".to_string();
    receiver.receiver_short_name = "Citadel".to_string();
    message.receiver_depository_institution = Some(receiver);

    let mut business_function_code = BusinessFunctionCode::new();
    business_function_code.business_function_code = "CTR".to_string();
    message.business_function_code = Some(business_function_code);

    let mut file = WireFile::new();
    file.add_message(message);
    file.create()?;

    let mut writer = Writer::new();
    writer.write_file(&file);
    let wire_text = writer.finish();
    println!("wire text:");
    print!("{wire_text}");

    let round_tripped = read_file(&wire_text)?;
    assert_eq!(round_tripped.messages, file.messages);

    println!("json:");
    println!("{}", serde_json::to_string_pretty(&file)?);

    Ok(())
}
