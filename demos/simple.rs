//! Your first DonkLang round trip.
//!
//! Run with: cargo run --example simple

use donklang::{decode, encode};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let source = "print('hello, donk')\n";

    let donk = encode(source)?;
    println!("{} characters became {} bytes of DonkLang", source.chars().count(), donk.len());

    // Show run lengths instead of the (invisible) runs themselves
    let runs: Vec<usize> = donk
        .split(['|', '\n'])
        .filter(|run| !run.is_empty())
        .map(str::len)
        .collect();
    println!("Run lengths: {:?}", runs);

    let back = decode(&donk);
    assert_eq!(back, source);
    println!("Decoded: {}", back.trim_end());

    Ok(())
}
