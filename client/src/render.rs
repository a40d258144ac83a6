use common::games::tictactoe::{Board, Difficulty, GameResult, Mark, Scoreboard, WinLine};

pub const HELP_TEXT: &str = "\
Commands:
  1-9                       place your X (cells numbered left to right, top to bottom)
  easy|medium|impossible    switch difficulty and start a new game
  r, reset                  start a new game
  s, scores                 show the scoreboard
  h, help                   show this help
  q, quit                   leave";

/// Empty cells show their number, cells of the winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<WinLine>) -> String {
    let mut rows = Vec::new();
    for (row_index, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, &mark)| {
                let index = row_index * row.len() + col;
                let label = match mark {
                    Mark::Empty => (index + 1).to_string(),
                    mark => mark.to_string(),
                };
                if winning_line.is_some_and(|line| line.contains(&index)) {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn result_message(result: GameResult) -> &'static str {
    match result {
        GameResult::WinByX => "You Win! (Lucky!)",
        GameResult::WinByO => "AI Wins! Try again",
        GameResult::Draw => "It's a Tie!",
        GameResult::InProgress => "Your turn (X)",
    }
}

pub fn render_scores(scores: &Scoreboard) -> String {
    format!("You: {}  AI: {}  Ties: {}", scores.player_wins, scores.bot_wins, scores.draws)
}

pub fn render_difficulty(difficulty: Difficulty) -> String {
    format!("Difficulty: {}", difficulty)
}
