use rand::Rng;

use super::board::Board;
use super::bot_controller::{BotInput, BotSettings, calculate_move};
use super::error::TicTacToeError;
use super::types::{Difficulty, GameResult, Mark};
use super::win_detector::{WinLine, evaluate, winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

/// One human-vs-bot session. The human always plays X and moves first;
/// scores survive `reset`.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    difficulty: Difficulty,
    bot_settings: BotSettings,
    current_mark: Mark,
    last_move: Option<usize>,
    scores: Scoreboard,
}

impl TicTacToeGameState {
    pub const HUMAN_MARK: Mark = Mark::X;
    pub const BOT_MARK: Mark = Mark::O;

    pub fn new(difficulty: Difficulty, bot_settings: BotSettings) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            bot_settings,
            current_mark: Self::HUMAN_MARK,
            last_move: None,
            scores: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn bot_settings(&self) -> &BotSettings {
        &self.bot_settings
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<(Mark, WinLine)> {
        winning_line(&self.board)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.current_mark == Self::BOT_MARK && !self.result().is_over()
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameResult, TicTacToeError> {
        self.apply(index, Self::HUMAN_MARK)
    }

    pub fn bot_input(&self) -> BotInput {
        BotInput::with_mark(self.board, Self::BOT_MARK)
    }

    pub fn apply_bot_move(&mut self, index: usize) -> Result<GameResult, TicTacToeError> {
        self.apply(index, Self::BOT_MARK)
    }

    pub fn play_bot_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, TicTacToeError> {
        self.ensure_turn(Self::BOT_MARK)?;
        let index = calculate_move(self.difficulty, self.bot_input(), &self.bot_settings, rng)?;
        crate::log_debug!("Bot ({}) picked cell {}", self.difficulty, index);
        self.apply_bot_move(index)?;
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Self::HUMAN_MARK;
        self.last_move = None;
    }

    /// Switching difficulty abandons the game in progress without scoring it.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), TicTacToeError> {
        if self.result().is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if self.current_mark != mark {
            return Err(TicTacToeError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<GameResult, TicTacToeError> {
        self.ensure_turn(mark)?;
        self.board.place(index, mark)?;
        self.last_move = Some(index);

        let result = self.result();
        match result {
            GameResult::InProgress => {
                if let Some(next) = mark.opponent() {
                    self.current_mark = next;
                }
            }
            GameResult::Draw => self.scores.draws += 1,
            GameResult::WinByX | GameResult::WinByO => {
                if result.winner() == Some(Self::HUMAN_MARK) {
                    self.scores.player_wins += 1;
                } else {
                    self.scores.bot_wins += 1;
                }
            }
        }

        Ok(result)
    }
}
