//! A Go Text Protocol (GTP) style command loop over a [`Board`].
//!
//! Framing follows GTP version 2: an optional numeric id, then a command and
//! its arguments; responses start with `=` on success or `?` on failure and
//! end with a blank line. Vertices are two coordinate symbols, column first
//! (`11`, `A3`), as accepted by [`Position`].
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit` - Exit the loop
//! - `boardsize <size>` - Start a new empty board of any odd size up to 35
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Place a stone (`pass` is accepted and ignored)
//! - `showboard` - Render the board
//! - `highlight <vertex>` - Mark the group at a vertex in `showboard`
//! - `liberties <vertex>` - Liberty count of the group at a vertex

use std::io::{self, BufRead, Write};

use crate::coord::Position;
use crate::error::BoardError;
use crate::goban::Board;
use crate::stone::Color;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "highlight",
    "known_command",
    "liberties",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
}

impl GtpEngine {
    /// Create an engine with an empty board of the given size.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    fn parse_vertex(args: &[&str], at: usize) -> Result<Position, String> {
        let vertex = args.get(at).ok_or_else(|| "missing argument".to_string())?;
        vertex.parse::<Position>().map_err(|e| format!("{e}"))
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match Board::new(size) {
                    Ok(board) => {
                        self.board = board;
                        (true, String::new())
                    }
                    Err(e) => (false, format!("unacceptable size: {e}")),
                }
            }

            "clear_board" => match Board::new(self.board.size()) {
                Ok(board) => {
                    self.board = board;
                    (true, String::new())
                }
                Err(e) => (false, e.to_string()),
            },

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = Self::parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if args[1].eq_ignore_ascii_case("pass") {
                    return (true, String::new());
                }
                let position = match Self::parse_vertex(args, 1) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                match self.board.place(color, position) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "highlight" => {
                let position = match Self::parse_vertex(args, 0) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                match self.board.highlight(position) {
                    Ok(Some(_)) => (true, String::new()),
                    Ok(None) => (false, "no stone at vertex".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "liberties" => {
                let position = match Self::parse_vertex(args, 0) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                match self.board.group_at(position) {
                    Ok(Some(id)) => (true, self.board.liberties(id).to_string()),
                    Ok(None) => (false, "no stone at vertex".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
