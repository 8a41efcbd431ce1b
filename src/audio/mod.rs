use crate::config::Settings;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

const VOLUME_PLACEHOLDER: &str = "{volume}";

/// Something that can play a single file to completion.
///
/// `play` blocks until the track is over. An `Err` from `start` means playback never
/// started; how the player exits afterwards is its own business.
pub trait PlaybackBackend {
    /// Launch playback of `path`. Returning `Ok` means the track is playing.
    fn start(&mut self, path: &Path, volume: u8) -> Result<()>;

    /// Block until the track launched by `start` is over.
    fn wait(&mut self);

    fn play(&mut self, path: &Path, volume: u8) -> Result<()> {
        self.start(path, volume)?;
        self.wait();
        Ok(())
    }
}

/// Runs an external media player (mpv by default) once per track.
#[derive(Debug)]
pub struct ExternalPlayer {
    program: String,
    extra_args: Vec<String>,
    volume_arg: String,
    child: Option<Child>,
}

impl ExternalPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        let defaults = Settings::default();
        Self {
            program: program.into(),
            extra_args: defaults.player_args,
            volume_arg: defaults.volume_arg,
            child: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            program: settings.player.clone(),
            extra_args: settings.player_args.clone(),
            volume_arg: settings.volume_arg.clone(),
            child: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, path: &Path, volume: u8) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.extra_args);
        if !self.volume_arg.is_empty() {
            command.arg(
                self.volume_arg
                    .replace(VOLUME_PLACEHOLDER, &volume.to_string()),
            );
        }
        command
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl PlaybackBackend for ExternalPlayer {
    fn start(&mut self, path: &Path, volume: u8) -> Result<()> {
        let mut command = self.command(path, volume);
        debug!(?command, "launching player");
        let child = command
            .spawn()
            .with_context(|| format!("failed to start {}", self.program))?;
        info!(pid = child.id(), track = %path.display(), "player started");
        self.child = Some(child);
        Ok(())
    }

    fn wait(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };
        match child.wait() {
            Ok(status) if status.success() => debug!("player finished"),
            Ok(status) => warn!(%status, "player exited abnormally"),
            Err(err) => warn!(error = %err, "failed to wait for player"),
        }
    }
}
