//! Clean social-media text and guess its language.
//!
//! Usage:
//!   cargo run --bin preprocess -- "Gak bisa login yg ini :("
//!   cat tweets.txt | cargo run --bin preprocess
//!
//! Prints one JSON object per input line.

use anyhow::{Context, Result};
use clap::Parser;
use nusa_stopwords::corpus::{LanguageDetector, TextPreprocessor};
use serde::Serialize;
use std::io::BufRead;

#[derive(Parser, Debug)]
#[command(name = "preprocess")]
#[command(about = "Clean Indonesian, Javanese and Sundanese social-media text")]
struct Args {
    /// Texts to process; standard input is read when none are given
    texts: Vec<String>,
}

#[derive(Serialize)]
struct Processed<'a> {
    text: &'a str,
    cleaned: String,
    language: &'static str,
    emoticons: Vec<&'static str>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nusa_stopwords=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let texts = if args.texts.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read standard input")?
    } else {
        args.texts
    };

    let preprocessor = TextPreprocessor::new();
    let detector = LanguageDetector::new();

    for text in texts.iter().filter(|t| !t.trim().is_empty()) {
        let processed = Processed {
            text,
            cleaned: preprocessor.clean_text(text),
            language: detector.dominant(text).dir_name(),
            emoticons: preprocessor
                .extract_emoticons(text)
                .into_iter()
                .map(|(emoticon, _)| emoticon)
                .collect(),
        };
        println!("{}", serde_json::to_string(&processed)?);
    }

    Ok(())
}
