use std::io::{self, BufRead};

use libglobasa::Engine;

fn main() {
    println!("═══════════════════════════════════════════════════");
    println!("  libglobasa - Interactive Globasa to IPA Converter");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("Type Globasa text and press Enter.");
    println!("Examples: mesajo / Hej, mo amiga.");
    println!("Press Ctrl+C to exit.");
    println!();

    let engine = Engine::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(raw) => {
                let input = raw.trim();
                if input.is_empty() {
                    continue;
                }
                println!("  ipa:    {}", engine.to_ipa(input));
                println!("  markup: {}", engine.to_ssml(input));
                println!();
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }
}
