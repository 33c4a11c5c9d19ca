//! `bencode` CLI — decode, encode, and inspect Bencode files from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Decode a torrent file to pretty-printed JSON
//! bencode decode -i example.torrent
//!
//! # Decode from stdin
//! cat example.torrent | bencode decode
//!
//! # Encode JSON to canonical bencode
//! echo '{"name":"example","size":47}' | bencode encode -o out.bencode
//!
//! # Decode text fields under a specific charset
//! bencode decode -i legacy.torrent --charset windows-1252
//!
//! # Show size and per-kind value counts
//! bencode stats -i example.torrent
//! ```

use anyhow::{Context, Result};
use bencode_core::Value;
use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "bencode", version, about = "Bencode codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode Bencode into pretty-printed JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Charset label used to render byte strings as text
        #[arg(long, default_value = "utf-8")]
        charset: String,
    },
    /// Encode JSON into canonical Bencode
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Charset label used to turn JSON strings into byte strings
        #[arg(long, default_value = "utf-8")]
        charset: String,
    },
    /// Show input size and per-kind value counts
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            input,
            output,
            charset,
        } => {
            let charset = resolve_charset(&charset)?;
            let bytes = read_input(input.as_deref())?;
            let value = bencode_core::decode(&bytes).context("Failed to decode bencode input")?;
            let json = bencode_core::to_json(&value, charset);
            let mut pretty = serde_json::to_string_pretty(&json)?;
            pretty.push('\n');
            write_output(output.as_deref(), pretty.as_bytes())?;
        }
        Commands::Encode {
            input,
            output,
            charset,
        } => {
            let charset = resolve_charset(&charset)?;
            let text = String::from_utf8(read_input(input.as_deref())?)
                .context("JSON input must be UTF-8 text")?;
            let json: serde_json::Value =
                serde_json::from_str(&text).context("Failed to parse JSON input")?;
            let value = bencode_core::from_json(&json, charset)
                .context("JSON input is not representable as bencode")?;
            let bytes =
                bencode_core::encode(&value).context("Failed to encode bencode output")?;
            write_output(output.as_deref(), &bytes)?;
        }
        Commands::Stats { input } => {
            let bytes = read_input(input.as_deref())?;
            let value = bencode_core::decode(&bytes).context("Failed to decode bencode input")?;
            let mut tally = Tally::default();
            tally.visit(&value, 1);
            println!("size:         {} bytes", bytes.len());
            println!("integers:     {}", tally.integers);
            println!("byte strings: {}", tally.byte_strings);
            println!("lists:        {}", tally.lists);
            println!("dictionaries: {}", tally.dicts);
            println!("max depth:    {}", tally.depth);
        }
    }

    Ok(())
}

/// Per-kind value counts and nesting depth of a decoded tree.
#[derive(Default)]
struct Tally {
    integers: usize,
    byte_strings: usize,
    lists: usize,
    dicts: usize,
    depth: usize,
}

impl Tally {
    fn visit(&mut self, value: &Value, depth: usize) {
        self.depth = self.depth.max(depth);
        match value {
            Value::Integer(_) => self.integers += 1,
            Value::Bytes(_) => self.byte_strings += 1,
            Value::List(items) => {
                self.lists += 1;
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Dict(entries) => {
                self.dicts += 1;
                for value in entries.values() {
                    self.visit(value, depth + 1);
                }
            }
        }
    }
}

fn resolve_charset(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .with_context(|| format!("Unknown charset label: '{label}'"))
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
