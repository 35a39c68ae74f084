//! Prints a file in every registered encoding and checks each round-trips.

use std::fs;

use basechain::{EncodingName, TextEncoding};

fn preview(text: &str) -> String {
    let head: String = text.chars().take(72).collect();
    if text.chars().count() > 72 {
        format!("{}...", head)
    } else {
        head
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    println!("\n=== Encodings ({}) ===", EncodingName::ALL.len());
    for name in EncodingName::ALL {
        let encoding = name.encoding();
        match encoding.encode(&data) {
            Ok(text) => {
                let status = match encoding.decode(&text) {
                    Ok(bytes) if bytes == data => "ok",
                    Ok(_) => "MISMATCH",
                    Err(_) => "DECODE FAILED",
                };
                println!("{:<16} {:>8} chars  [{}]", name, text.chars().count(), status);
                println!("  {}", preview(&text));
            }
            Err(e) => println!("{:<16} error: {}", name, e),
        }
    }
}
