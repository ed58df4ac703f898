//! Classicrypt CLI - classical cipher toolkit
//!
//! One subcommand per cipher, plus key generation and the interactive
//! menu. Messages come from a positional argument, a file or stdin;
//! results go to stdout or a file.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use classicrypt::error::{CipherError, ErrorCategory, ErrorKind, Result};
use classicrypt::keyword::{ConstantKeywordReader, KeywordReader, TerminalKeywordReader};
use classicrypt::{
    atbash, brute_force, caesar, file_ops, keygen, menu, playfair, rail_fence, vigenere,
};

#[derive(Parser)]
#[command(name = "classicrypt")]
#[command(version)]
#[command(
    about = "Classical cipher toolkit. Runs the interactive menu when no command is given.",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Caesar cipher: shift every letter by a fixed amount
    #[command(alias = "c")]
    Caesar {
        /// Number of positions to shift (may be negative)
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Vigenère cipher: shift letters by a repeating keyword
    #[command(alias = "v")]
    Vigenere {
        #[command(flatten)]
        key: KeywordArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Playfair cipher: digraph substitution over a 5x5 key square
    #[command(alias = "p")]
    Playfair {
        #[command(flatten)]
        key: KeywordArgs,

        /// Print the key square to stderr before the result
        #[arg(long)]
        show_square: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Rail Fence cipher: zigzag transposition over a number of rails
    #[command(alias = "r")]
    RailFence {
        /// Number of rails (at least 1)
        #[arg(short, long)]
        rails: usize,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Atbash cipher: mirror the alphabet (its own inverse)
    #[command(alias = "a")]
    Atbash {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Try all 26 Caesar shifts and rank the results
    #[command(alias = "b")]
    BruteForce {
        /// Number of candidates to show, 0 for all
        #[arg(short, long, default_value_t = 5)]
        top: usize,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Generate a random key
    #[command(alias = "k")]
    Keygen {
        /// Cipher to generate a key for
        #[arg(short, long, value_enum)]
        kind: KeyKind,

        /// Key length; for Playfair, the number of random leading letters (max 25)
        #[arg(short, long)]
        length: usize,
    },

    /// Interactive numbered menu
    #[command(alias = "m")]
    Menu,
}

#[derive(Args)]
struct IoArgs {
    /// Read the message from this file instead of stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// The message itself
    text: Option<String>,
}

#[derive(Args)]
struct KeywordArgs {
    /// Keyword; read from the terminal without echo when omitted
    #[arg(short, long)]
    keyword: Option<String>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KeyKind {
    Vigenere,
    Playfair,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Caesar { shift, decode, io }) => read_input(&io).and_then(|message| {
            let text = if decode {
                caesar::decode(&message, shift)
            } else {
                caesar::encode(&message, shift)
            };
            emit(io.output.as_deref(), &text)
        }),
        Some(Commands::Vigenere { key, io }) => read_input(&io).and_then(|message| {
            let keyword = keyword_reader(key.keyword).read_keyword()?;
            let text = if key.decode {
                vigenere::decode(&message, &keyword)?
            } else {
                vigenere::encode(&message, &keyword)?
            };
            emit(io.output.as_deref(), &text)
        }),
        Some(Commands::Playfair {
            key,
            show_square,
            io,
        }) => read_input(&io).and_then(|message| {
            let keyword = keyword_reader(key.keyword).read_keyword()?;
            if show_square {
                eprintln!("{}", playfair::KeySquare::new(&keyword));
            }
            let text = if key.decode {
                playfair::decode(&message, &keyword)
            } else {
                playfair::encode(&message, &keyword)
            };
            emit(io.output.as_deref(), &text)
        }),
        Some(Commands::RailFence { rails, decode, io }) => read_input(&io).and_then(|message| {
            let text = if decode {
                rail_fence::decode(&message, rails)?
            } else {
                rail_fence::encode(&message, rails)?
            };
            emit(io.output.as_deref(), &text)
        }),
        Some(Commands::Atbash { io }) => read_input(&io).and_then(|message| {
            let text = atbash::transform(&message);
            emit(io.output.as_deref(), &text)
        }),
        Some(Commands::BruteForce { top, io }) => read_input(&io).and_then(|message| {
            let candidates = brute_force::brute_force(&message);
            let shown = if top == 0 { candidates.len() } else { top };
            let report: Vec<String> = candidates
                .iter()
                .take(shown)
                .map(|c| format!("Offset {}: {} (Score: {})", c.shift, c.plaintext, c.score))
                .collect();
            emit(io.output.as_deref(), &report.join("\n"))
        }),
        Some(Commands::Keygen { kind, length }) => {
            let key = match kind {
                KeyKind::Vigenere => keygen::generate_vigenere_key(length),
                KeyKind::Playfair => keygen::generate_playfair_key(length),
            };
            key.and_then(|key| emit(None, &key))
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            menu::run(stdin.lock(), io::stdout(), &mut rand::thread_rng())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        if let Some(source) = e.source_error() {
            eprintln!("  caused by: {}", source);
        }
        process::exit(1);
    }
}

fn keyword_reader(keyword: Option<String>) -> Box<dyn KeywordReader> {
    match keyword {
        Some(keyword) => Box::new(ConstantKeywordReader::new(keyword)),
        None => Box::new(TerminalKeywordReader::new()),
    }
}

/// The message from the positional argument, the input file, or stdin, in
/// that order of preference.
///
/// A message piped through stdin loses one trailing line ending, the one
/// `emit` adds back on stdout.
fn read_input(args: &IoArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return file_ops::read_message(path).map_err(|e| {
            e.with_context(format!("could not load message from {}", path.display()))
        });
    }
    let mut message = String::new();
    io::stdin().read_to_string(&mut message).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::ResourceUnavailable,
            format!("failed to read message from stdin: {}", e),
            e,
        )
    })?;
    let line_ending = if message.ends_with("\r\n") {
        2
    } else if message.ends_with('\n') {
        1
    } else {
        0
    };
    message.truncate(message.len() - line_ending);
    Ok(message)
}

/// Write `text` as is to `output`, or to stdout followed by one newline.
fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    if let Some(path) = output {
        return file_ops::write_message(path, text);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)
        .and_then(|()| stdout.flush())
        .map_err(|e| {
            CipherError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::ResourceUnavailable,
                format!("failed to write to stdout: {}", e),
                e,
            )
        })
}
