use std::io::{self, BufRead, Write};

use log::{debug, info};

use super::render;
use crate::ai::{Agent, HeuristicAgent};
use crate::config::{BoardSettings, GameConfig};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player};

/// A parsed line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 0-based column.
    Drop(usize),
    Quit,
}

/// Parse a 1-based column number or an exit command.
pub fn parse_command(input: &str, width: usize) -> Result<Command, MoveError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoveError::InvalidColumnInput);
    }

    // Digits only, so a parse failure can only be overflow.
    let column: usize = input.parse().map_err(|_| MoveError::ColumnOutOfRange)?;
    if column == 0 || column > width {
        return Err(MoveError::ColumnOutOfRange);
    }
    Ok(Command::Drop(column - 1))
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Winner(Player),
    Draw,
    Quit,
}

impl GameEnd {
    /// The winner's identifier, 0 otherwise.
    pub fn exit_code(self) -> i32 {
        match self {
            GameEnd::Winner(player) => player.id(),
            GameEnd::Draw | GameEnd::Quit => 0,
        }
    }
}

/// Turn loop over a line-based terminal.
///
/// Owns the game state; moves are read from `input` for human players and
/// asked from an [`Agent`] for computer players, and every move goes through
/// the same validation.
pub struct App<R, W> {
    state: GameState,
    agents: [Option<Box<dyn Agent>>; 2],
    input: R,
    output: W,
    debug: bool,
    colour: bool,
    message: Option<String>,
    last_move: Option<usize>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(settings: BoardSettings, game: &GameConfig, first: Player, input: R, output: W) -> Self {
        let agents = Player::ALL.map(|player| {
            game.is_computer(player)
                .then(|| Box::new(HeuristicAgent::new()) as Box<dyn Agent>)
        });
        App {
            state: GameState::new(
                settings.width,
                settings.height,
                settings.connect_length,
                first,
            ),
            agents,
            input,
            output,
            debug: game.debug,
            colour: false,
            message: settings.clamp_notice(),
            last_move: None,
        }
    }

    /// Replace the controller of `player`; `None` hands it to the keyboard.
    pub fn set_agent(&mut self, player: Player, agent: Option<Box<dyn Agent>>) {
        self.agents[slot(player)] = agent;
    }

    pub fn set_colour(&mut self, colour: bool) {
        self.colour = colour;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Main application loop
    pub fn run(&mut self) -> io::Result<GameEnd> {
        if self.debug {
            render::reset_screen(&mut self.output, true)?;
        }

        loop {
            // Keep earlier turns on screen in debug mode so log lines stay readable.
            if !self.debug {
                render::reset_screen(&mut self.output, true)?;
            }
            write!(
                self.output,
                "{}",
                render::render_board(self.state.board(), self.colour)
            )?;
            if let Some(message) = self.message.take() {
                writeln!(self.output, "{}", message)?;
            }

            match self.state.outcome() {
                GameOutcome::Winner(player) => {
                    writeln!(self.output, "{} Wins!", player.name())?;
                    if self.debug {
                        if let Some(col) = self.last_move {
                            writeln!(self.output, "Last move in column: {}", col + 1)?;
                        }
                    }
                    self.output.flush()?;
                    info!("{} won", player.name());
                    return Ok(GameEnd::Winner(player));
                }
                GameOutcome::Draw => {
                    writeln!(self.output, "Tie Game!")?;
                    self.output.flush()?;
                    info!("draw");
                    return Ok(GameEnd::Draw);
                }
                GameOutcome::InProgress => {}
            }

            let player = self.state.current_player();
            writeln!(self.output, "Turn: {}", player.name())?;

            let command = match self.agents[slot(player)].as_mut() {
                Some(agent) => {
                    let col = agent.select_column(&self.state);
                    debug!("{} ({}) picked column {}", player.name(), agent.name(), col + 1);
                    Ok(Command::Drop(col))
                }
                None => match self.read_line()? {
                    Some(line) => parse_command(&line, self.state.board().width()),
                    None => Ok(Command::Quit),
                },
            };

            match command {
                Ok(Command::Quit) => {
                    self.output.flush()?;
                    info!("{} quit", player.name());
                    return Ok(GameEnd::Quit);
                }
                Ok(Command::Drop(col)) => match self.state.apply_move(col) {
                    Ok(row) => {
                        debug!("{} dropped into column {} row {}", player.name(), col + 1, row);
                        self.last_move = Some(col);
                    }
                    Err(err) => {
                        debug!("{} rejected column {}: {}", player.name(), col + 1, err);
                        self.message = Some(err.to_string());
                    }
                },
                Err(err) => self.message = Some(err.to_string()),
            }
        }
    }

    /// Prompt for a move. `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Column number? ")?;
        self.output.flush()?;

        // Raw bytes so a line that is not UTF-8 is rejected as bad input
        // instead of ending the game.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::Red => 0,
        Player::Blue => 1,
    }
}
