use crate::audio::PlaybackBackend;
use crate::command::{Command, help_lines};
use crate::error::{CommandError, CommandResult};
use crate::model::{CurrentPlaylist, MAX_VOLUME, PlaybackState, Playlist};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a successful command hands back to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Status(String),
    Listing { title: String, entries: Vec<String> },
    /// Succeeded, but something along the way went wrong.
    Warned { warning: String, message: String },
    Quit,
}

impl Reply {
    fn status(message: impl Into<String>) -> Self {
        Self::Status(message.into())
    }
}

#[derive(Debug)]
pub struct PlaylistController {
    /// Named playlists. Entries are never removed once created.
    pub playlists: HashMap<String, Playlist>,
    pub state: PlaybackState,
    scratch: Playlist,
    current: CurrentPlaylist,
    rng: SmallRng,
}

impl Default for PlaylistController {
    fn default() -> Self {
        Self::new(MAX_VOLUME)
    }
}

impl PlaylistController {
    pub fn new(initial_volume: u8) -> Self {
        Self::with_rng(initial_volume, rand::make_rng::<SmallRng>())
    }

    pub fn with_seed(initial_volume: u8, seed: u64) -> Self {
        Self::with_rng(initial_volume, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(initial_volume: u8, rng: SmallRng) -> Self {
        Self {
            playlists: HashMap::new(),
            state: PlaybackState {
                volume: initial_volume.min(MAX_VOLUME),
                ..PlaybackState::default()
            },
            scratch: Playlist::default(),
            current: CurrentPlaylist::Scratch,
            rng,
        }
    }

    pub fn execute(
        &mut self,
        backend: &mut dyn PlaybackBackend,
        command: Command,
    ) -> CommandResult<Reply> {
        debug!(?command, "dispatching");
        match command {
            Command::Play(path) => self.play(backend, &path),
            Command::List => self.list(),
            Command::Add(path) => self.add(&path),
            Command::Remove(name) => self.remove(&name),
            Command::Create(name) => self.create(&name),
            Command::Switch(name) => self.switch(&name),
            Command::Shuffle => Ok(self.toggle_shuffle()),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(backend),
            Command::Volume(level) => self.set_volume(&level),
            Command::Loop => Ok(self.toggle_loop()),
            Command::Next => self.next(backend),
            Command::Prev => self.prev(backend),
            Command::Mute => Ok(self.toggle_mute()),
            Command::Status => Ok(self.status()),
            Command::Help => Ok(Reply::Listing {
                title: String::from("Commands:"),
                entries: help_lines(),
            }),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    /// Name of the current playlist, `None` while still on the unsaved one.
    pub fn current_name(&self) -> Option<&str> {
        match &self.current {
            CurrentPlaylist::Scratch => None,
            CurrentPlaylist::Named(name) => Some(name),
        }
    }

    pub fn current_tracks(&self) -> &[PathBuf] {
        &self.current_playlist().tracks
    }

    fn current_playlist(&self) -> &Playlist {
        match &self.current {
            CurrentPlaylist::Named(name) => self.playlists.get(name).unwrap_or(&self.scratch),
            CurrentPlaylist::Scratch => &self.scratch,
        }
    }

    fn current_playlist_mut(&mut self) -> &mut Playlist {
        match &self.current {
            CurrentPlaylist::Named(name) => self.playlists.entry(name.clone()).or_default(),
            CurrentPlaylist::Scratch => &mut self.scratch,
        }
    }

    pub fn play(&mut self, backend: &mut dyn PlaybackBackend, path: &Path) -> CommandResult<Reply> {
        ensure_exists(path)?;
        self.launch(backend, path)?;

        if !self.state.paused {
            self.current_playlist_mut().tracks.push(path.to_path_buf());
        }
        if !self.state.shuffle && !self.state.looping {
            self.state.current_index = self.current_playlist().len().saturating_sub(1);
        }
        Ok(Reply::status(format!("Finished: {}", path.display())))
    }

    /// Play the entry at `index` through the same path as the `play` command.
    fn play_entry(&mut self, backend: &mut dyn PlaybackBackend, index: usize) -> CommandResult<Reply> {
        let Some(path) = self.current_tracks().get(index).cloned() else {
            return Err(CommandError::EmptyPlaylist);
        };
        self.play(backend, &path)
    }

    fn launch(&self, backend: &mut dyn PlaybackBackend, path: &Path) -> CommandResult<()> {
        debug!(track = %path.display(), volume = self.state.volume, "handing track to backend");
        backend
            .play(path, self.state.volume)
            .map_err(|err| CommandError::BackendLaunch(format!("{err:#}")))
    }

    pub fn list(&self) -> CommandResult<Reply> {
        let tracks = self.current_tracks();
        if tracks.is_empty() {
            return Err(CommandError::EmptyPlaylist);
        }

        let entries = tracks
            .iter()
            .enumerate()
            .map(|(idx, track)| format!("{}. {}", idx + 1, track.display()))
            .collect();
        Ok(Reply::Listing {
            title: String::from("Current Playlist:"),
            entries,
        })
    }

    pub fn add(&mut self, path: &Path) -> CommandResult<Reply> {
        ensure_exists(path)?;
        self.current_playlist_mut().tracks.push(path.to_path_buf());
        Ok(Reply::status(format!("Added to playlist: {}", path.display())))
    }

    /// Remove the first entry whose path is exactly `name`.
    pub fn remove(&mut self, name: &str) -> CommandResult<Reply> {
        let playlist = self.current_playlist_mut();
        let Some(idx) = playlist
            .tracks
            .iter()
            .position(|track| track.as_os_str() == OsStr::new(name))
        else {
            return Err(CommandError::NotInPlaylist(name.to_string()));
        };

        playlist.tracks.remove(idx);
        Ok(Reply::status(format!("Removed from playlist: {name}")))
    }

    pub fn create(&mut self, name: &str) -> CommandResult<Reply> {
        if self.playlists.contains_key(name) {
            return Err(CommandError::PlaylistAlreadyExists(name.to_string()));
        }

        self.playlists.insert(name.to_string(), Playlist::default());
        Ok(Reply::status(format!("Playlist created: {name}")))
    }

    pub fn switch(&mut self, name: &str) -> CommandResult<Reply> {
        if !self.playlists.contains_key(name) {
            return Err(CommandError::PlaylistNotFound(name.to_string()));
        }

        self.current = CurrentPlaylist::Named(name.to_string());
        debug!(playlist = name, index = self.state.current_index, "switched playlist");
        Ok(Reply::status(format!("Switched to playlist: {name}")))
    }

    pub fn toggle_shuffle(&mut self) -> Reply {
        self.state.shuffle = !self.state.shuffle;
        if !self.state.shuffle {
            return Reply::status("Shuffle mode disabled.");
        }

        let tracks = match &self.current {
            CurrentPlaylist::Named(name) => {
                &mut self.playlists.entry(name.clone()).or_default().tracks
            }
            CurrentPlaylist::Scratch => &mut self.scratch.tracks,
        };
        tracks.shuffle(&mut self.rng);
        Reply::status("Shuffle mode enabled.")
    }

    pub fn pause(&mut self) -> CommandResult<Reply> {
        if self.state.paused {
            return Err(CommandError::AlreadyPaused);
        }
        self.state.paused = true;
        Ok(Reply::status("Music paused."))
    }

    pub fn resume(&mut self, backend: &mut dyn PlaybackBackend) -> CommandResult<Reply> {
        if !self.state.paused {
            return Err(CommandError::NotPaused);
        }
        self.state.paused = false;

        // The flag stays cleared even when the replay cannot start.
        let index = self.state.current_index;
        if index < self.current_playlist().len()
            && let Err(err) = self.play_entry(backend, index)
        {
            warn!(error = %err, "resumed without playback");
            return Ok(Reply::Warned {
                warning: err.to_string(),
                message: String::from("Music resumed."),
            });
        }
        Ok(Reply::status("Music resumed."))
    }

    pub fn set_volume(&mut self, level: &str) -> CommandResult<Reply> {
        let volume = level
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|value| u8::try_from(value).ok())
            .filter(|value| *value <= MAX_VOLUME)
            .ok_or_else(|| CommandError::InvalidVolume(level.to_string()))?;

        self.state.volume = volume;
        Ok(Reply::status(format!("Volume set to: {volume}")))
    }

    pub fn toggle_loop(&mut self) -> Reply {
        self.state.looping = !self.state.looping;
        if self.state.looping {
            Reply::status("Loop mode enabled.")
        } else {
            Reply::status("Loop mode disabled.")
        }
    }

    pub fn next(&mut self, backend: &mut dyn PlaybackBackend) -> CommandResult<Reply> {
        let len = self.current_playlist().len();
        let index = self.state.current_index;
        let target = if index + 1 < len {
            index + 1
        } else if self.state.looping && len > 0 {
            0
        } else {
            return Err(CommandError::NoNextTrack);
        };

        self.state.current_index = target;
        self.play_entry(backend, target)
    }

    pub fn prev(&mut self, backend: &mut dyn PlaybackBackend) -> CommandResult<Reply> {
        let len = self.current_playlist().len();
        // A stale index past the end (after switch/remove) steps back onto the last entry.
        let target = match self.state.current_index.checked_sub(1) {
            Some(prev) if len > 0 => prev.min(len - 1),
            _ if self.state.looping && len > 0 => len - 1,
            _ => return Err(CommandError::NoPreviousTrack),
        };

        self.state.current_index = target;
        self.play_entry(backend, target)
    }

    /// Unmuting always lands on full volume, whatever was set before.
    pub fn toggle_mute(&mut self) -> Reply {
        self.state.muted = !self.state.muted;
        if self.state.muted {
            self.state.volume = 0;
            Reply::status("Muted.")
        } else {
            self.state.volume = MAX_VOLUME;
            Reply::status("Unmuted.")
        }
    }

    pub fn status(&self) -> Reply {
        let name = self.current_name().unwrap_or("(unsaved)");
        Reply::Listing {
            title: format!(
                "Playlist: {name} ({} tracks, {} saved playlists)",
                self.current_playlist().len(),
                self.playlists.len()
            ),
            entries: vec![self.state.summary()],
        }
    }
}

fn ensure_exists(path: &Path) -> CommandResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CommandError::FileNotFound(path.to_path_buf()))
    }
}
