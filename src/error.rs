use std::path::PathBuf;
use thiserror::Error;

pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Errors reported back to the prompt. None of them end the session.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Error: File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error playing file: {0}")]
    BackendLaunch(String),

    #[error("Playlist is empty.")]
    EmptyPlaylist,

    #[error("Error: File not found in playlist: {0}")]
    NotInPlaylist(String),

    #[error("Playlist already exists: {0}")]
    PlaylistAlreadyExists(String),

    #[error("Error: Playlist does not exist: {0}")]
    PlaylistNotFound(String),

    #[error("Music is already paused.")]
    AlreadyPaused,

    #[error("Music is already playing.")]
    NotPaused,

    #[error("Error: Invalid volume level {0:?}. Please enter a value between 0 and 100.")]
    InvalidVolume(String),

    #[error("No next song in the playlist.")]
    NoNextTrack,

    #[error("No previous song in the playlist.")]
    NoPreviousTrack,

    #[error("Unknown command {0:?}. Please use {commands}.", commands = crate::command::COMMAND_NAMES.join(", "))]
    UnknownCommand(String),

    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },
}
