use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Blue => Cell::Blue,
        }
    }

    /// Numeric identifier, also used as the process exit code for a win.
    pub fn id(self) -> i32 {
        match self {
            Player::Red => 1,
            Player::Blue => 2,
        }
    }

    /// Board symbol
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'O',
            Player::Blue => 'X',
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Blue);
        assert_eq!(Player::Blue.other(), Player::Red);
    }

    #[test]
    fn test_player_identity() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Blue.name(), "Blue");
        assert_eq!(Player::Red.id(), 1);
        assert_eq!(Player::Blue.id(), 2);
        assert_ne!(Player::Red.symbol(), Player::Blue.symbol());
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Red.to_cell(), Cell::Red);
        assert_eq!(Player::Blue.to_cell(), Cell::Blue);
    }
}
