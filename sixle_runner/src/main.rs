use std::{
    io::{self, BufRead, Write},
    thread,
};

use anyhow::Context;
use log::{debug, info};
use owo_colors::{OwoColorize, Stream::Stdout};
use sixle::{
    Classification, GameConfig, Round, SixleError, State, WordListSource,
};

const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = GameConfig::new();
    let source = WordListSource::new().fallback_policy(config.fallback);
    let mut round = Round::new(config, source)?;
    info!("round opened");

    println!(
        "Sixle: guess the six-letter word. You have {} tries.",
        round.remaining_attempts()
    );

    let mut lines = io::stdin().lock().lines();

    loop {
        print!("[{} left] > ", round.remaining_attempts());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line.context("could not read a guess")?,
            None => break,
        };
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }

        let ticket = match round.submit(candidate) {
            Ok(ticket) => ticket,
            Err(SixleError::Guess { kind }) => {
                println!("{}", kind);
                continue;
            }
            Err(other) => return Err(other.into()),
        };
        debug!("accepted guess \"{}\"", candidate);

        // Stand-in for the flip animation: hold the result back for the
        // reveal duration, then settle the round.
        thread::sleep(ticket.duration());
        let state = round.reveal_complete(ticket);

        print_last_row(&round);
        print_keyboard(&round);

        match state {
            State::Won => {
                info!("won in {} guesses", round.guesses().len());
                println!("You got it!");
                if !play_again(&mut lines, &mut round)? {
                    break;
                }
            }
            State::Lost => {
                info!("lost after {} guesses", round.guesses().len());
                if let Some(target) = round.target() {
                    println!("Out of guesses! The word was {}.", target.to_uppercase());
                }
                if !play_again(&mut lines, &mut round)? {
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_last_row(round: &Round<WordListSource>) {
    if let (Some(guess), Some(result)) = (round.guesses().last(), round.results().last()) {
        for (letter, mark) in guess.chars().zip(result.marks()) {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match mark {
                Classification::Correct => {
                    print!("{}", tile.if_supports_color(Stdout, |text| text.on_green()));
                }
                Classification::Present => {
                    print!("{}", tile.if_supports_color(Stdout, |text| text.on_yellow()));
                }
                Classification::Absent => {
                    print!("{}", tile.if_supports_color(Stdout, |text| text.dimmed()));
                }
            }
        }
        println!();
    }
}

fn print_keyboard(round: &Round<WordListSource>) {
    for row in QWERTY_ROWS {
        for letter in row.chars() {
            match round.letters().get(letter) {
                Some(Classification::Correct) => {
                    print!("{} ", letter.if_supports_color(Stdout, |text| text.green()));
                }
                Some(Classification::Present) => {
                    print!("{} ", letter.if_supports_color(Stdout, |text| text.yellow()));
                }
                Some(Classification::Absent) => {
                    print!("{} ", letter.if_supports_color(Stdout, |text| text.dimmed()));
                }
                None => print!("{} ", letter),
            }
        }
        println!();
    }
}

fn play_again(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    round: &mut Round<WordListSource>,
) -> anyhow::Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            if line?.trim().eq_ignore_ascii_case("y") {
                round.reset()?;
                info!("round reset");
                Ok(true)
            } else {
                Ok(false)
            }
        }
        None => Ok(false),
    }
}
