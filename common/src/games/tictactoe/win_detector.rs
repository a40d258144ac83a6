use super::board::Board;
use super::types::{GameResult, Mark};

pub type WinLine = [usize; 3];

pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> GameResult {
    if let Some((mark, _)) = winning_line(board)
        && let Some(result) = GameResult::win_by(mark)
    {
        return result;
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// First completed line, X lines before O lines.
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    [Mark::X, Mark::O].into_iter().find_map(|mark| {
        WIN_LINES
            .iter()
            .find(|line| is_line_owned_by(board, line, mark))
            .map(|line| (mark, *line))
    })
}

fn is_line_owned_by(board: &Board, line: &WinLine, mark: Mark) -> bool {
    line.iter().all(|&index| board.get(index) == Some(mark))
}
