//! Line-oriented recommendation prompt.
//!
//! Asks for a genre, then characteristics one per line until `end`, and
//! prints the best matching albums. Typing `end` at the genre prompt (or
//! closing the input) leaves the session.

use std::io::{BufRead, Write};

use crate::error::AppResult;
use crate::models::{AlbumGraph, ListenerPreferences};
use crate::services::{RecommendationError, Recommender};

const STOP_WORD: &str = "end";

/// Runs one prompt session against `graph`
pub fn run<R: BufRead, W: Write>(
    graph: &AlbumGraph,
    limit: usize,
    mut input: R,
    mut output: W,
) -> AppResult<()> {
    let recommender = Recommender::new(graph).with_limit(limit);

    writeln!(output, "Welcome to the Album Recommender!")?;
    writeln!(output, "Type '{}' at any time to stop.", STOP_WORD)?;

    loop {
        let Some(genre) = prompt(&mut input, &mut output, "\nWhat genres do you like to listen to? ")?
        else {
            break;
        };
        if is_stop(&genre) {
            break;
        }

        let mut preferences = ListenerPreferences::new(genre.trim());
        while let Some(line) = prompt(
            &mut input,
            &mut output,
            "Enter a characteristic (or 'end' to stop): ",
        )? {
            if is_stop(&line) {
                break;
            }
            preferences.add_characteristic(&line);
        }

        match recommender.recommend(&preferences) {
            Ok(albums) if albums.is_empty() => {
                writeln!(output, "No albums found for the given characteristics. Please try again.")?;
            }
            Ok(albums) => {
                writeln!(output, "{}", top_header(albums.len()))?;
                for rec in &albums {
                    writeln!(output, "- {}", rec.album)?;
                }
                break;
            }
            Err(RecommendationError::NoCharacteristics) => {
                writeln!(output, "You must enter at least one characteristic.")?;
            }
            Err(RecommendationError::NoAlbums(_)) => {
                writeln!(output, "No albums found in the graph. Please check your data.")?;
            }
            Err(RecommendationError::NoKnownCharacteristics) => {
                writeln!(
                    output,
                    "No desirable characteristics found in the graph. Please try again."
                )?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(output, "Thank you for using the Album Recommender!")?;
    output.flush()?;
    Ok(())
}

/// Prints `message` and reads one line; `None` once the input is exhausted
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> AppResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// "Top Ten Albums:" style heading for `count` results
fn top_header(count: usize) -> String {
    const WORDS: [&str; 10] = [
        "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    ];
    let amount = match count.checked_sub(1).and_then(|i| WORDS.get(i)) {
        Some(word) => (*word).to_string(),
        None => count.to_string(),
    };
    let noun = if count == 1 { "Album" } else { "Albums" };
    format!("Top {} {}:", amount, noun)
}

fn is_stop(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(STOP_WORD)
}
