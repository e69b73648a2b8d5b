//! Customizing offsets and separators with DonkOptions.
//!
//! Run with: cargo run --example custom_options

use donklang::{decode_with_options, encode_with_options, DonkOptions, Separator};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "Hi!\nok";

    // Default: offset 0, pipe separator
    let default = DonkOptions::new();
    println!("Default ({} bytes):", encode_with_options(text, &default)?.len());

    // Offset 31: printable ASCII needs 1 to 95 spaces
    let shifted = DonkOptions::new().with_offset(31);
    let donk = encode_with_options(text, &shifted)?;
    println!("Offset 31 ({} bytes):\n{}\n", donk.len(), donk);

    // Visible separator, handy when reading the output by eye
    let dotted = DonkOptions::new()
        .with_offset(31)
        .with_separator(Separator::Custom(".".to_string()));
    let donk = encode_with_options(text, &dotted)?;
    println!("Dot separator:\n{}\n", donk);
    assert_eq!(decode_with_options(&donk, &dotted), text);

    // Characters at or below the offset cannot be encoded
    let too_high = DonkOptions::new().with_offset(100);
    match encode_with_options(text, &too_high) {
        Ok(_) => println!("unexpectedly encoded"),
        Err(e) => println!("Offset 100: {}", e),
    }

    Ok(())
}
