use rand::Rng;

use super::board::Board;
use super::error::TicTacToeError;
use super::types::{Difficulty, GameResult, Mark};
use super::win_detector::evaluate;

pub const DEFAULT_MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.7;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotSettings {
    /// Chance that a Medium bot plays the minimax move instead of a random one.
    pub medium_optimal_probability: f64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            medium_optimal_probability: DEFAULT_MEDIUM_OPTIMAL_PROBABILITY,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            bot_mark: Mark::O,
        }
    }

    pub fn with_mark(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

pub fn calculate_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    input: BotInput,
    settings: &BotSettings,
    rng: &mut R,
) -> Result<usize, TicTacToeError> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => {
            if rng.random::<f64>() < settings.medium_optimal_probability {
                crate::log_debug!("Medium bot plays the minimax move");
                calculate_minimax_move(&input)
            } else {
                crate::log_debug!("Medium bot plays a random move");
                calculate_random_move(&input.board, rng)
            }
        }
        Difficulty::Impossible => calculate_minimax_move(&input),
    }
}

fn calculate_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, TicTacToeError> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return Err(TicTacToeError::InvalidState);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Exhaustive minimax for the side `input.bot_mark`. Ties go to the lowest
/// cell index.
pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, TicTacToeError> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent().ok_or(TicTacToeError::NotYourTurn(bot_mark))?;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.empty_cells() {
        let board = input.board.with_mark(index, bot_mark);
        let score = minimax(&board, 0, false, bot_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(TicTacToeError::InvalidState)
}

fn minimax(board: &Board, depth: i32, is_maximizing: bool, bot_mark: Mark, opponent_mark: Mark) -> i32 {
    match evaluate(board) {
        GameResult::InProgress => {}
        GameResult::Draw => return 0,
        result => {
            return if result.winner() == Some(bot_mark) {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
    }

    let moves = board.empty_cells().into_iter();

    if is_maximizing {
        moves
            .map(|index| {
                let next = board.with_mark(index, bot_mark);
                minimax(&next, depth + 1, false, bot_mark, opponent_mark)
            })
            .max()
            .unwrap_or(0)
    } else {
        moves
            .map(|index| {
                let next = board.with_mark(index, opponent_mark);
                minimax(&next, depth + 1, true, bot_mark, opponent_mark)
            })
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::win_detector::winning_line;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn impossible_move(cells: [Mark; 9]) -> Result<usize, TicTacToeError> {
        let mut rng = SessionRng::new(7);
        calculate_move(
            Difficulty::Impossible,
            BotInput::new(Board::from_cells(cells)),
            &BotSettings::default(),
            &mut rng,
        )
    }

    #[test]
    fn test_empty_board_opens_in_first_corner() {
        assert_eq!(impossible_move([E; 9]), Ok(0));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        assert_eq!(impossible_move([X, X, E, E, O, E, E, E, E]), Ok(2));
    }

    #[test]
    fn test_takes_win_over_block() {
        assert_eq!(impossible_move([O, O, E, X, X, E, E, E, E]), Ok(2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // O completes the first column at 6 instead of blocking X at 4.
        assert_eq!(impossible_move([O, X, X, O, E, E, E, X, E]), Ok(6));
    }

    #[test]
    fn test_answers_center_opening_with_corner() {
        assert_eq!(impossible_move([E, E, E, E, X, E, E, E, E]), Ok(0));
    }

    #[test]
    fn test_full_board_is_invalid_state() {
        let full = [X, O, X, X, O, O, O, X, X];
        assert_eq!(impossible_move(full), Err(TicTacToeError::InvalidState));

        let mut rng = SessionRng::new(1);
        for difficulty in Difficulty::ALL {
            let result = calculate_move(
                difficulty,
                BotInput::new(Board::from_cells(full)),
                &BotSettings::default(),
                &mut rng,
            );
            assert_eq!(result, Err(TicTacToeError::InvalidState), "{}", difficulty);
        }
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        assert_eq!(impossible_move([X, O, X, X, O, O, E, X, O]), Ok(6));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
        let input = BotInput::new(board);
        let _ = calculate_minimax_move(&input);
        assert_eq!(input.board, board);
    }

    #[test]
    fn test_empty_mark_cannot_search() {
        let input = BotInput::with_mark(Board::new(), Mark::Empty);
        assert_eq!(calculate_minimax_move(&input), Err(TicTacToeError::NotYourTurn(Mark::Empty)));
    }

    #[test]
    fn test_impossible_self_play_always_draws() {
        let mut rng = SessionRng::new(42);
        let mut board = Board::new();
        let mut to_move = X;

        while !evaluate(&board).is_over() {
            let index = calculate_move(
                Difficulty::Impossible,
                BotInput::with_mark(board, to_move),
                &BotSettings::default(),
                &mut rng,
            )
            .unwrap();
            board.place(index, to_move).unwrap();
            to_move = to_move.opponent().unwrap();
        }

        assert_eq!(evaluate(&board), GameResult::Draw);
    }

    #[test]
    fn test_self_play_from_every_opening_draws() {
        for opening in 0..9 {
            let mut board = Board::new().with_mark(opening, X);
            let mut to_move = O;
            while !evaluate(&board).is_over() {
                let index = calculate_minimax_move(&BotInput::with_mark(board, to_move)).unwrap();
                board.place(index, to_move).unwrap();
                to_move = to_move.opponent().unwrap();
            }
            assert_eq!(evaluate(&board), GameResult::Draw, "opening {}", opening);
        }
    }

    fn assert_no_blunders(board: Board, games: &mut usize) {
        // X to move: try every reply, O answers with minimax.
        for x_move in board.empty_cells() {
            let after_x = board.with_mark(x_move, X);
            match evaluate(&after_x) {
                GameResult::WinByX => panic!("X won against minimax: {:?}", after_x),
                GameResult::InProgress => {}
                _ => {
                    *games += 1;
                    continue;
                }
            }

            let o_move = calculate_minimax_move(&BotInput::new(after_x)).unwrap();
            let after_o = after_x.with_mark(o_move, O);
            if evaluate(&after_o).is_over() {
                *games += 1;
                continue;
            }

            for reply in after_o.empty_cells() {
                let after_reply = after_o.with_mark(reply, X);
                assert_ne!(
                    evaluate(&after_reply),
                    GameResult::WinByX,
                    "O played {} on {:?}, X wins with {}",
                    o_move,
                    after_x,
                    reply
                );
            }

            assert_no_blunders(after_o, games);
        }
    }

    #[test]
    fn test_minimax_never_loses_against_any_opponent() {
        let mut games = 0;
        assert_no_blunders(Board::new(), &mut games);
        assert!(games > 0);
    }

    #[test]
    fn test_minimax_never_loses_when_moving_first() {
        let mut board = Board::new();
        let first = calculate_minimax_move(&BotInput::new(board)).unwrap();
        board.place(first, O).unwrap();

        fn walk(board: Board) {
            for x_move in board.empty_cells() {
                let after_x = board.with_mark(x_move, X);
                assert_ne!(evaluate(&after_x), GameResult::WinByX, "{:?}", after_x);
                if evaluate(&after_x).is_over() {
                    continue;
                }
                let o_move = calculate_minimax_move(&BotInput::new(after_x)).unwrap();
                let after_o = after_x.with_mark(o_move, O);
                if !evaluate(&after_o).is_over() {
                    walk(after_o);
                }
            }
        }

        walk(board);
    }

    #[test]
    fn test_minimax_converts_winning_positions() {
        // O completes the main diagonal.
        let board = Board::from_cells([O, X, E, X, O, E, E, E, E]);
        let index = calculate_minimax_move(&BotInput::new(board)).unwrap();
        let after = board.with_mark(index, O);
        assert_eq!(evaluate(&after), GameResult::WinByO);
        assert_eq!(winning_line(&after), Some((O, [0, 4, 8])));
    }

    #[test]
    fn test_easy_picks_cells_uniformly() {
        let board = Board::from_cells([X, E, O, E, X, O, E, X, E]);
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 4);

        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 9];
        let runs = 8000;
        for _ in 0..runs {
            let index = calculate_move(Difficulty::Easy, BotInput::new(board), &BotSettings::default(), &mut rng)
                .unwrap();
            counts[index] += 1;
        }

        let expected = runs / empty.len();
        for (index, &count) in counts.iter().enumerate() {
            if empty.contains(&index) {
                assert!(count.abs_diff(expected) < expected / 10, "cell {} chosen {} times", index, count);
            } else {
                assert_eq!(count, 0, "occupied cell {} was chosen", index);
            }
        }
    }

    #[test]
    fn test_easy_is_deterministic_for_a_seed() {
        let board = Board::new();
        let pick = |seed| {
            let mut rng = SessionRng::new(seed);
            (0..5)
                .map(|_| calculate_move(Difficulty::Easy, BotInput::new(board), &BotSettings::default(), &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(99), pick(99));
    }

    #[test]
    fn test_medium_with_certain_probability_is_optimal() {
        let settings = BotSettings {
            medium_optimal_probability: 1.0,
        };
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(calculate_move(Difficulty::Medium, BotInput::new(board), &settings, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_medium_with_zero_probability_plays_randomly() {
        let settings = BotSettings {
            medium_optimal_probability: 0.0,
        };
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 9];
        for _ in 0..200 {
            let index = calculate_move(Difficulty::Medium, BotInput::new(board), &settings, &mut rng).unwrap();
            assert_eq!(board.get(index), Some(E));
            seen[index] = true;
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), board.empty_cells().len());
    }

    #[test]
    fn test_medium_blends_strategies() {
        let settings = BotSettings::default();
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(11);
        let runs = 2000;
        let blocks = (0..runs)
            .filter(|_| calculate_move(Difficulty::Medium, BotInput::new(board), &settings, &mut rng) == Ok(2))
            .count();

        // 0.7 optimal plus 0.3 * 1/6 random hits on the blocking cell.
        let expected = runs as f64 * (0.7 + 0.3 / 6.0);
        assert!((blocks as f64 - expected).abs() < runs as f64 * 0.05, "blocked {} times", blocks);
    }
}
