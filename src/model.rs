use std::path::PathBuf;

pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    pub tracks: Vec<PathBuf>,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Which playlist navigation and listing act on.
///
/// `Named` is a handle into the registry, so edits made through it land in
/// the stored playlist itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentPlaylist {
    #[default]
    Scratch,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub paused: bool,
    pub shuffle: bool,
    pub looping: bool,
    pub muted: bool,
    pub volume: u8,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            paused: false,
            shuffle: false,
            looping: false,
            muted: false,
            volume: MAX_VOLUME,
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

impl PlaybackState {
    pub fn summary(&self) -> String {
        format!(
            "index {} | paused {} | shuffle {} | loop {} | mute {} | volume {}",
            self.current_index,
            on_off(self.paused),
            on_off(self.shuffle),
            on_off(self.looping),
            on_off(self.muted),
            self.volume
        )
    }
}
