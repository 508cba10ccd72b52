//! REPL Module
//!
//! The line-oriented interactive loop: prompt, tokenize, dispatch. Command
//! errors are printed and the loop continues; `exit` or end of input ends
//! the session.

mod commands;

pub use commands::{Command, Outcome, Session};

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::pokeapi::PokeApiClient;

/// The interactive prompt.
const PROMPT: &str = "Pokedex > ";

// == Clean Input ==
/// Tokenizes a line of user input: whitespace-split, lowercased.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

// == Repl ==
/// The interactive loop over a [`Session`].
#[derive(Debug)]
pub struct Repl {
    session: Session,
}

impl Repl {
    // == Constructor ==
    /// Creates a REPL with a fresh session around the given client.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            session: Session::new(client),
        }
    }

    // == Run ==
    /// Reads lines from stdin until `exit` or end of input.
    ///
    /// Empty lines re-prompt; unknown commands and command errors are
    /// printed without ending the loop.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // End of input
                break;
            };

            let words = clean_input(&line);
            let Some(first) = words.first() else {
                continue;
            };

            match Command::parse(first) {
                Some(command) => {
                    debug!(command = ?command, "dispatching");
                    match self.session.execute(command, &words[1..]).await {
                        Ok(Outcome::Continue) => {}
                        Ok(Outcome::Exit) => break,
                        Err(err) => println!("{}", err),
                    }
                }
                None => println!("Unknown command: {}", first),
            }
        }

        Ok(())
    }
}
