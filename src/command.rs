use crate::error::{CommandError, CommandResult};
use std::path::PathBuf;

pub const COMMAND_NAMES: &[&str] = &[
    "play", "list", "add", "remove", "create", "switch", "shuffle", "pause", "resume", "volume",
    "loop", "next", "prev", "mute", "status", "help", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(PathBuf),
    List,
    Add(PathBuf),
    Remove(String),
    Create(String),
    Switch(String),
    Shuffle,
    Pause,
    Resume,
    Volume(String),
    Loop,
    Next,
    Prev,
    Mute,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Tokenize one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let mut arg = |usage: &'static str| {
            tokens
                .next()
                .map(str::to_string)
                .ok_or(CommandError::MissingArgument { usage })
        };

        let command = match name {
            "play" => Self::Play(PathBuf::from(arg("play <filename>")?)),
            "list" => Self::List,
            "add" => Self::Add(PathBuf::from(arg("add <filename>")?)),
            "remove" => Self::Remove(arg("remove <filename>")?),
            "create" => Self::Create(arg("create <playlist_name>")?),
            "switch" => Self::Switch(arg("switch <playlist_name>")?),
            "shuffle" => Self::Shuffle,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "volume" => Self::Volume(arg("volume <level>")?),
            "loop" => Self::Loop,
            "next" => Self::Next,
            "prev" => Self::Prev,
            "mute" => Self::Mute,
            "status" => Self::Status,
            "help" => Self::Help,
            "quit" => Self::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

pub fn help_lines() -> Vec<String> {
    [
        "play <filename>        play now, remember it unless paused",
        "list                   show the current playlist",
        "add <filename>         append to the current playlist",
        "remove <filename>      drop the first matching entry",
        "create <name>          create an empty named playlist",
        "switch <name>          make a named playlist current",
        "shuffle                toggle shuffle, reorder when enabling",
        "pause | resume         pause flag / replay the current track",
        "volume <0-100>         volume passed to the player",
        "loop                   toggle wrap-around for next/prev",
        "next | prev            move through the current playlist",
        "mute                   toggle mute",
        "status                 show playback state",
        "quit                   exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
