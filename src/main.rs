use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use libglobasa::Engine;

/// Convert Globasa text to IPA or speech-synthesis markup.
#[derive(Parser)]
#[command(name = "libglobasa")]
struct Args {
    /// Text to convert; stdin is read when neither TEXT nor --file is given
    text: Option<String>,

    /// Read the input from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "ipa")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// IPA with inline stress markers
    Ipa,
    /// Speech-synthesis markup
    Ssml,
    /// Both renderings as JSON
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = if let Some(text) = args.text {
        text
    } else if let Some(path) = args.file {
        fs::read_to_string(&path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let engine = Engine::new();
    match args.format {
        Format::Ipa => println!("{}", engine.to_ipa(&input)),
        Format::Ssml => println!("{}", engine.to_ssml(&input)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&engine.transcribe(&input))?
        ),
    }

    Ok(())
}
