use std::io;
use std::path::Path;

use log::{info, warn};

use crate::error::ConfigError;
use crate::game::Player;

/// Shortest run length that makes a game.
pub const MIN_CONNECT_LENGTH: usize = 3;
/// Longest run length accepted from configuration.
pub const MAX_CONNECT_LENGTH: usize = 15;
/// Largest number of cells a board may have.
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// Board size and run length. A zero dimension is taken from the terminal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub connect_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 7,
            height: 6,
            connect_length: 4,
        }
    }
}

/// Who plays and how chatty the game is.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Red is played by the computer.
    pub single_player: bool,
    /// Both players are played by the computer.
    pub self_play: bool,
    pub debug: bool,
}

impl GameConfig {
    /// Whether `player`'s moves come from the computer.
    pub fn is_computer(&self, player: Player) -> bool {
        self.self_play || (self.single_player && player == Player::Red)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// A run length longer than the board is not an error here; it is
    /// clamped once the board size is known, see [`BoardConfig::resolve`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let length = self.board.connect_length;
        if !(MIN_CONNECT_LENGTH..=MAX_CONNECT_LENGTH).contains(&length) {
            return Err(ConfigError::Validation(format!(
                "board.connect_length must be in [{}, {}], got {}",
                MIN_CONNECT_LENGTH, MAX_CONNECT_LENGTH, length
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

/// Final board parameters for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
    pub connect_length: usize,
    /// Requested run length, when it had to be shortened to fit the board.
    pub clamped_from: Option<usize>,
}

impl BoardSettings {
    /// Message shown to the player when the run length was shortened.
    pub fn clamp_notice(&self) -> Option<String> {
        self.clamped_from.map(|_| {
            format!(
                "Length of connects can only be as long as the shortest side, setting to {}",
                self.connect_length
            )
        })
    }
}

impl BoardConfig {
    /// Fill in zero dimensions from the terminal size (`(columns, rows)`)
    /// and clamp the run length to the shorter side.
    ///
    /// `terminal_size` is only called when a dimension is zero.
    pub fn resolve<F>(&self, terminal_size: F) -> Result<BoardSettings, ConfigError>
    where
        F: FnOnce() -> io::Result<(u16, u16)>,
    {
        let (mut width, mut height) = (self.width, self.height);
        if width == 0 || height == 0 {
            let (columns, rows) = terminal_size().map_err(ConfigError::TerminalSize)?;
            if width == 0 {
                width = usize::from(columns) / 4;
            }
            if height == 0 {
                height = (usize::from(rows) / 2).saturating_sub(4);
            }
        }

        if width < MIN_CONNECT_LENGTH || height < MIN_CONNECT_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must be at least {min}x{min}, got {}x{}",
                width,
                height,
                min = MIN_CONNECT_LENGTH
            )));
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_BOARD_CELLS => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "board may have at most {} cells, got {}x{}",
                    MAX_BOARD_CELLS, width, height
                )))
            }
        }

        let shortest = width.min(height);
        let mut settings = BoardSettings {
            width,
            height,
            connect_length: self.connect_length,
            clamped_from: None,
        };
        if self.connect_length > shortest {
            warn!(
                "connect length {} exceeds shortest board side {}, clamping",
                self.connect_length, shortest
            );
            settings.connect_length = shortest;
            settings.clamped_from = Some(self.connect_length);
        }
        Ok(settings)
    }
}
