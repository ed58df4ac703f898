//! Interactive numbered menu over the cipher operations.
//!
//! The menu reads choices and parameters line by line from any `BufRead`
//! and writes prompts and results to any `Write`, so the binary drives it
//! with stdin/stdout and the tests with in-memory buffers. Cipher and file
//! errors are reported inline and the loop carries on; only a failure of
//! the output stream itself ends the session with an error.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::Rng;

use crate::error::{CipherError, ErrorCategory, ErrorKind, Result};
use crate::{
    atbash, brute_force, caesar, file_ops, keygen, playfair, rail_fence, selftest, vigenere,
};

/// Number of brute-force candidates shown.
const TOP_CANDIDATES: usize = 5;

const MENU: &str = "
Cryptography Tool
1. Caesar Cipher Encode
2. Caesar Cipher Decode
3. Vigenère Cipher Encode
4. Vigenère Cipher Decode
5. Playfair Cipher Encode
6. Playfair Cipher Decode
7. Rail Fence Cipher Encode
8. Rail Fence Cipher Decode
9. Atbash Cipher Encode/Decode
10. Caesar Cipher Brute Force
11. Read Message from File
12. Write Message to File
13. Generate Vigenère Key
14. Generate Playfair Key
15. Run Self-Test
16. Exit
";

enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user picks "Exit" or `input` reaches end of file.
pub fn run<R, W, G>(input: R, output: W, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut session = Session {
        input,
        output,
        output_failed: false,
    };
    loop {
        session.write(MENU)?;
        let Some(choice) = session.prompt("Enter your choice (1-16): ")? else {
            break;
        };
        match session.dispatch(choice.trim(), rng) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            // Nothing can be reported on a broken output stream.
            Err(e) if session.output_failed => return Err(e),
            Err(e) => session.report(&e)?,
        }
    }
    session.write("Thank you for using the Cryptography Tool. Goodbye!\n")
}

struct Session<R, W> {
    input: R,
    output: W,
    /// Set once a write or flush to `output` has failed.
    output_failed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn dispatch<G: Rng + ?Sized>(&mut self, choice: &str, rng: &mut G) -> Result<Flow> {
        match choice {
            "1" | "2" => {
                let encode = choice == "1";
                let Some(message) = self.message(encode)? else {
                    return Ok(Flow::Exit);
                };
                let Some(shift) = self.number::<i64>("Enter the offset: ")? else {
                    return Ok(Flow::Continue);
                };
                let result = if encode {
                    caesar::encode(&message, shift)
                } else {
                    caesar::decode(&message, shift)
                };
                self.result(encode, &result)?;
            }
            "3" | "4" | "5" | "6" => {
                let encode = choice == "3" || choice == "5";
                let Some(message) = self.message(encode)? else {
                    return Ok(Flow::Exit);
                };
                let Some(keyword) = self.prompt("Enter the keyword: ")? else {
                    return Ok(Flow::Exit);
                };
                let result = match choice {
                    "3" => vigenere::encode(&message, &keyword)?,
                    "4" => vigenere::decode(&message, &keyword)?,
                    "5" => playfair::encode(&message, &keyword),
                    _ => playfair::decode(&message, &keyword),
                };
                self.result(encode, &result)?;
            }
            "7" | "8" => {
                let encode = choice == "7";
                let Some(message) = self.message(encode)? else {
                    return Ok(Flow::Exit);
                };
                let Some(rails) = self.number::<usize>("Enter the number of rails: ")? else {
                    return Ok(Flow::Continue);
                };
                let result = if encode {
                    rail_fence::encode(&message, rails)?
                } else {
                    rail_fence::decode(&message, rails)?
                };
                self.result(encode, &result)?;
            }
            "9" => {
                let Some(message) = self.prompt("Enter the message to encode/decode: ")? else {
                    return Ok(Flow::Exit);
                };
                self.write(&format!(
                    "Encoded/Decoded message: {}\n",
                    atbash::transform(&message)
                ))?;
            }
            "10" => {
                let Some(message) = self.prompt("Enter the message to brute force: ")? else {
                    return Ok(Flow::Exit);
                };
                self.write("Top 5 possible decryptions:\n")?;
                for candidate in brute_force::brute_force(&message)
                    .iter()
                    .take(TOP_CANDIDATES)
                {
                    self.write(&format!(
                        "Offset {}: {} (Score: {})\n",
                        candidate.shift, candidate.plaintext, candidate.score
                    ))?;
                }
            }
            "11" => {
                let Some(filename) = self.prompt("Enter the filename to read from: ")? else {
                    return Ok(Flow::Exit);
                };
                let content = file_ops::read_message(Path::new(&filename))
                    .map_err(|e| e.with_context(format!("could not read '{}'", filename)))?;
                self.write(&format!("File content: {}\n", content))?;
            }
            "12" => {
                let Some(filename) = self.prompt("Enter the filename to write to: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(content) = self.prompt("Enter the content to write: ")? else {
                    return Ok(Flow::Exit);
                };
                file_ops::write_message(Path::new(&filename), &content)
                    .map_err(|e| e.with_context(format!("could not write '{}'", filename)))?;
                self.write(&format!(
                    "Content successfully written to '{}'.\n",
                    filename
                ))?;
            }
            "13" => {
                let Some(length) = self.number::<usize>("Enter the desired key length: ")? else {
                    return Ok(Flow::Continue);
                };
                let key = keygen::generate_vigenere_key_with_rng(length, rng)?;
                self.write(&format!("Generated Vigenère key: {}\n", key))?;
            }
            "14" => {
                let Some(length) =
                    self.number::<usize>("Enter the desired unique key length (max 25): ")?
                else {
                    return Ok(Flow::Continue);
                };
                let key = keygen::generate_playfair_key_with_rng(length, rng)?;
                self.write(&format!("Generated Playfair key: {}\n", key))?;
            }
            "15" => {
                let checks = selftest::run();
                for check in &checks {
                    let status = if check.passed { "ok" } else { "FAILED" };
                    self.write(&format!("{} ... {}\n", check.name, status))?;
                }
                if selftest::all_passed(&checks) {
                    self.write("Self-test passed.\n")?;
                } else {
                    self.write("Self-test FAILED.\n")?;
                }
            }
            "16" => return Ok(Flow::Exit),
            _ => self.write("Invalid choice. Please try again.\n")?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &CipherError) -> Result<()> {
        self.write(&format!("Error: {}\n", err.message()))?;
        if let Some(source) = err.source_error() {
            self.write(&format!("  caused by: {}\n", source))?;
        }
        Ok(())
    }

    fn message(&mut self, encode: bool) -> Result<Option<String>> {
        if encode {
            self.prompt("Enter the message to encode: ")
        } else {
            self.prompt("Enter the message to decode: ")
        }
    }

    fn result(&mut self, encode: bool, text: &str) -> Result<()> {
        if encode {
            self.write(&format!("Encoded message: {}\n", text))
        } else {
            self.write(&format!("Decoded message: {}\n", text))
        }
    }

    /// Prompt for a number. `None` means the reply did not parse; the
    /// user has been told and the menu should be shown again.
    ///
    /// End of input also yields `None`; the next prompt for a choice then
    /// ends the loop.
    fn number<T: std::str::FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        let Some(reply) = self.prompt(text)? else {
            return Ok(None);
        };
        match reply.trim().parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.write("Invalid number.\n")?;
                Ok(None)
            }
        }
    }

    /// Write `text` and read one line of reply without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text)?;
        if let Err(e) = self.output.flush() {
            self.output_failed = true;
            return Err(output_error(e));
        }

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| {
            CipherError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::ResourceUnavailable,
                format!("failed to read input: {}", e),
                e,
            )
        })?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).map_err(|e| {
            self.output_failed = true;
            output_error(e)
        })
    }
}

fn output_error(err: io::Error) -> CipherError {
    CipherError::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::ResourceUnavailable,
        format!("failed to write output: {}", err),
        err,
    )
}
