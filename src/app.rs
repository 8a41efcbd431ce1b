use crate::audio::{ExternalPlayer, PlaybackBackend};
use crate::command::Command;
use crate::config::Settings;
use crate::core::{PlaylistController, Reply};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

const PROMPT: &str = "Enter command: ";

pub fn run(settings: &Settings) -> Result<()> {
    let mut core = PlaylistController::new(settings.initial_volume);
    let mut player = ExternalPlayer::from_settings(settings);
    info!(player = player.program(), "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut core, &mut player, stdin.lock(), stdout.lock())
}

/// Read commands until `quit` or end of input.
pub fn run_session<R, W>(
    core: &mut PlaylistController,
    backend: &mut dyn PlaybackBackend,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT.blue().bold())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            debug!("input closed");
            return Ok(());
        };
        let line = line.context("failed to read command")?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", err.to_string().red().bold())?;
                continue;
            }
        };

        let mut announcing = Announcing {
            inner: &mut *backend,
            out: &mut out,
        };
        match core.execute(&mut announcing, command) {
            Ok(Reply::Quit) => {
                writeln!(out, "{}", "Goodbye!".green().bold())?;
                return Ok(());
            }
            Ok(reply) => render(&mut out, reply)?,
            Err(err) => writeln!(out, "{}", err.to_string().red().bold())?,
        }
    }
}

fn render(out: &mut impl Write, reply: Reply) -> io::Result<()> {
    match reply {
        Reply::Status(message) => writeln!(out, "{}", message.green().bold()),
        Reply::Listing { title, entries } => {
            writeln!(out, "{}", title.green().bold())?;
            for entry in entries {
                writeln!(out, "{}", entry.cyan())?;
            }
            Ok(())
        }
        Reply::Warned { warning, message } => {
            writeln!(out, "{}", warning.red().bold())?;
            writeln!(out, "{}", message.green().bold())
        }
        Reply::Quit => Ok(()),
    }
}

/// Prints "Now playing" once the player is up, before the blocking wait.
struct Announcing<'a, W: Write> {
    inner: &'a mut dyn PlaybackBackend,
    out: &'a mut W,
}

impl<W: Write> PlaybackBackend for Announcing<'_, W> {
    fn start(&mut self, path: &Path, volume: u8) -> Result<()> {
        self.inner.start(path, volume)?;
        let banner = format!("Now playing: {} (volume {volume})", path.display());
        writeln!(self.out, "{}", banner.green().bold())?;
        self.out.flush()?;
        Ok(())
    }

    fn wait(&mut self) {
        self.inner.wait();
    }
}
