use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::game::{GameSettings, GuessOutcome, GuessingGame};
use crate::debug_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub secret: i64,
    pub attempts: u32,
    pub won: bool,
}

/// Drive one game over `input`/`output`. Lines that are not whole numbers are
/// rejected without spending an attempt; end of input abandons the game.
pub fn play<R: BufRead, W: Write>(
    game: &mut GuessingGame,
    input: R,
    mut output: W,
) -> anyhow::Result<GameReport> {
    let settings = *game.settings();
    writeln!(output, "\n=== NUMBER GUESSING GAME ===")?;
    writeln!(
        output,
        "I'm thinking of a number between {} and {}",
        settings.min, settings.max
    )?;

    let mut lines = input.lines();
    let mut won = false;
    while !game.is_over() {
        write!(
            output,
            "\nAttempt {}/{} - Enter your guess: ",
            game.attempts() + 1,
            settings.max_attempts
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output, "\n{} The number was {}", "Game abandoned.".yellow(), game.secret())?;
            break;
        };
        let line = line.context("reading guess")?;
        let guess: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "{}", "Please enter a whole number.".red())?;
                continue;
            }
        };
        debug_log!("guess {guess} (attempt {})", game.attempts() + 1);

        match game.guess(guess)? {
            GuessOutcome::Hint { hint, .. } => writeln!(output, "{}", hint.message())?,
            GuessOutcome::Correct { attempts } => {
                won = true;
                let msg = format!("Congratulations! You guessed it in {attempts} attempts!");
                writeln!(output, "{}", msg.as_str().green().bold())?;
            }
            GuessOutcome::Lost { hint, secret } => {
                let msg = format!("Game Over! The number was {secret}");
                writeln!(output, "{}", hint.message())?;
                writeln!(output, "\n{}", msg.as_str().red())?;
            }
        }
    }

    Ok(GameReport { secret: game.secret(), attempts: game.attempts(), won })
}

pub fn main(settings: GameSettings, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut game = GuessingGame::new(settings, &mut rng)?;
    debug_log!("guessing game {:?}", settings);
    let stdin = io::stdin();
    let report = play(&mut game, stdin.lock(), io::stdout())?;
    debug_log!("game finished: {report:?}");
    Ok(())
}
