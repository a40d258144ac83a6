use super::types::Mark;

/// Errors raised by the tic-tac-toe core and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TicTacToeError {
    #[error("no empty cell left to play")]
    InvalidState,

    #[error("cell index {0} is out of bounds")]
    OutOfBounds(usize),

    #[error("cell {0} is already marked")]
    CellOccupied(usize),

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(Mark),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TicTacToeError::InvalidState.to_string(), "no empty cell left to play");
        assert_eq!(TicTacToeError::CellOccupied(4).to_string(), "cell 4 is already marked");
        assert_eq!(TicTacToeError::NotYourTurn(Mark::O).to_string(), "it is not O's turn");
    }
}
