mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{BotInput, BotSettings, DEFAULT_MEDIUM_OPTIMAL_PROBABILITY, calculate_minimax_move, calculate_move};
pub use error::TicTacToeError;
pub use game_state::{Scoreboard, TicTacToeGameState};
pub use types::{Difficulty, GameResult, Mark};
pub use win_detector::{WIN_LINES, WinLine, evaluate, winning_line};
