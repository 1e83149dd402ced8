use std::path::PathBuf;

/// Errors from a rejected move. None of these are fatal: the game loop
/// reports them and asks for the move again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid input")]
    InvalidColumnInput,

    #[error("Column does not exist")]
    ColumnOutOfRange,

    #[error("Full try again")]
    ColumnFull,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to query terminal size: {0}")]
    TerminalSize(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::InvalidColumnInput.to_string(), "Invalid input");
        assert_eq!(MoveError::ColumnOutOfRange.to_string(), "Column does not exist");
        assert_eq!(MoveError::ColumnFull.to_string(), "Full try again");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.connect_length must be in [3, 15]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.connect_length must be in [3, 15]"
        );
    }

    #[test]
    fn test_terminal_size_error_display() {
        let err = ConfigError::TerminalSize(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "not a tty",
        ));
        assert_eq!(err.to_string(), "failed to query terminal size: not a tty");
    }
}
