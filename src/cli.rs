use crate::evaluation::WORD_LENGTH;
use crate::puzzle::{Reveal, Status};
use crate::session::Session;
use crate::storage::Storage;
use clap::Parser;
use std::io::BufRead;

/// PracticeWordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Use the plain line-based interface instead of the TUI
    #[arg(long)]
    pub plain: bool,

    /// Ignore any saved game and start with a fresh word
    #[arg(long)]
    pub fresh: bool,

    /// Keep everything in memory, never touching saved state on disk
    #[arg(long = "no-save")]
    pub no_save: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Graded win messages from first-try down to last-gasp.
const WIN_MESSAGES: [&str; 6] = [
    "Genius!",
    "Magnificent!",
    "Impressive!",
    "Splendid!",
    "Great!",
    "Phew!",
];

pub fn win_message(turns: usize) -> &'static str {
    WIN_MESSAGES[turns.saturating_sub(1).min(WIN_MESSAGES.len() - 1)]
}

// Plain line-based interface

pub enum Command {
    Guess(String),
    NewGame,
    Invalid,
    Exit,
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn read_command<R: BufRead>(reader: &mut R) -> Command {
    println!("\nEnter your guess (5 letters), or 'next' / 'shuffle' for a new word, or 'exit':");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return Command::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => Command::Exit,
        "next" | "shuffle" => Command::NewGame,
        _ if is_valid_word(&input) => Command::Guess(input),
        _ => {
            println!("Invalid guess. Please enter 5 letters.");
            Command::Invalid
        }
    }
}

pub fn display_board<S: Storage>(session: &Session<S>) {
    let puzzle = session.puzzle();
    for (guess, evaluation) in puzzle.guesses().iter().zip(puzzle.evaluations()) {
        let marks: String = evaluation.iter().map(|m| m.as_char()).collect();
        println!("{}  {}", guess.to_uppercase(), marks);
    }
}

fn display_reveal(reveal: &Reveal) {
    let marks: String = reveal.evaluation.iter().map(|m| m.as_char()).collect();
    println!("{}  {}", reveal.guess.to_uppercase(), marks);
}

fn display_game_over(status: Status, answer: &str, turns: usize) {
    match status {
        Status::Won => println!("{} The word was {}.", win_message(turns), answer.to_uppercase()),
        Status::Lost => println!(
            "Better luck next time! The word was {}.",
            answer.to_uppercase()
        ),
        Status::InProgress => {}
    }
}

/// Drive a session from a line-based reader until the player exits.
pub fn run_plain<S: Storage, R: BufRead>(session: &mut Session<S>, reader: &mut R) {
    println!("Loaded {} words.", session.bank().len());
    display_board(session);
    if session.puzzle().is_over() {
        println!("The game is over. Type 'next' for a new word.");
    }

    loop {
        match read_command(reader) {
            Command::Exit => {
                println!("Exiting.");
                break;
            }
            Command::NewGame => {
                session.new_game();
                println!("New word!");
            }
            Command::Invalid => {}
            Command::Guess(word) => {
                // A full line replaces whatever partial entry was restored.
                while !session.puzzle().current_entry().is_empty() {
                    session.delete_letter();
                }
                for ch in word.chars() {
                    session.append_letter(ch);
                }
                match session.submit() {
                    Ok(Some(reveal)) => {
                        display_reveal(&reveal);
                        display_game_over(
                            reveal.status,
                            session.puzzle().answer(),
                            session.puzzle().turn_index(),
                        );
                    }
                    Ok(None) => println!("The game is over. Type 'next' for a new word."),
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
}
