use std::io::Write;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{GameResult, Scoreboard, TicTacToeError, TicTacToeGameState, calculate_move};
use common::{log, log_debug, log_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{ClientCommand, parse_command};
use crate::render::{HELP_TEXT, render_board, render_difficulty, render_scores, result_message};

pub type RunnerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub struct RunnerOptions {
    pub thinking_delay: Duration,
}

/// Drives one interactive session until the player quits or input ends.
/// Returns the final scoreboard.
pub async fn run_game<R, W>(
    mut state: TicTacToeGameState,
    mut rng: SessionRng,
    input: R,
    mut output: W,
    options: RunnerOptions,
) -> RunnerResult<Scoreboard>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    log!("New game started ({})", state.difficulty());
    writeln!(output, "{}", render_difficulty(state.difficulty()))?;
    write_board(&mut output, &state)?;
    writeln!(output, "{}", result_message(GameResult::InProgress))?;

    loop {
        if state.is_bot_turn() {
            writeln!(output, "AI is thinking...")?;
            output.flush()?;
            rng = play_bot_turn(&mut state, rng, options.thinking_delay).await?;
            write_board(&mut output, &state)?;
            report_result(&mut output, &state)?;
            continue;
        }

        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            log_debug!("Input closed");
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark(index) => match state.place_mark(index) {
                Ok(_) => {
                    log_debug!("Player placed X at {}", index);
                    write_board(&mut output, &state)?;
                    if state.result().is_over() {
                        report_result(&mut output, &state)?;
                    }
                }
                Err(TicTacToeError::GameOver) => {
                    writeln!(output, "Game is over, type 'r' to play again")?;
                }
                Err(TicTacToeError::CellOccupied(_)) => {
                    writeln!(output, "Cell {} is already taken", index + 1)?;
                }
                Err(err) => writeln!(output, "{}", err)?,
            },
            ClientCommand::SetDifficulty(difficulty) => {
                state.set_difficulty(difficulty);
                log!("New game started ({})", difficulty);
                writeln!(output, "{}", render_difficulty(difficulty))?;
                write_board(&mut output, &state)?;
                writeln!(output, "{}", result_message(GameResult::InProgress))?;
            }
            ClientCommand::Reset => {
                state.reset();
                log!("New game started ({})", state.difficulty());
                write_board(&mut output, &state)?;
                writeln!(output, "{}", result_message(GameResult::InProgress))?;
            }
            ClientCommand::Scores => writeln!(output, "{}", render_scores(&state.scores()))?,
            ClientCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
            ClientCommand::Quit => break,
        }
    }

    writeln!(output, "{}", render_scores(&state.scores()))?;
    output.flush()?;
    Ok(state.scores())
}

/// Waits out the thinking delay, then runs the search off the async
/// runtime. The rng travels into the blocking task and back.
async fn play_bot_turn(
    state: &mut TicTacToeGameState,
    mut rng: SessionRng,
    thinking_delay: Duration,
) -> RunnerResult<SessionRng> {
    if !thinking_delay.is_zero() {
        tokio::time::sleep(thinking_delay).await;
    }

    let difficulty = state.difficulty();
    let input = state.bot_input();
    let settings = *state.bot_settings();

    let (calculated_move, rng) = tokio::task::spawn_blocking(move || {
        let calculated_move = calculate_move(difficulty, input, &settings, &mut rng);
        (calculated_move, rng)
    })
    .await?;

    match calculated_move {
        Ok(index) => {
            log_debug!("AI ({}) placed O at {}", difficulty, index);
            state.apply_bot_move(index)?;
        }
        Err(err) => {
            log_warn!("AI could not move: {}", err);
            return Err(err.into());
        }
    }

    Ok(rng)
}

fn write_board<W: Write>(output: &mut W, state: &TicTacToeGameState) -> std::io::Result<()> {
    let line = state.winning_line().map(|(_, line)| line);
    writeln!(output, "{}", render_board(state.board(), line))
}

fn report_result<W: Write>(output: &mut W, state: &TicTacToeGameState) -> std::io::Result<()> {
    let result = state.result();
    writeln!(output, "{}", result_message(result))?;
    if result.is_over() {
        log!("Game over: {} ({})", result_message(result), render_scores(&state.scores()));
        writeln!(output, "{}", render_scores(&state.scores()))?;
        writeln!(output, "Type 'r' to play again")?;
    }
    Ok(())
}
