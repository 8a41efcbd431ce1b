#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;
use termplay::audio::PlaybackBackend;
use termplay::command::Command;
use termplay::core::PlaylistController;
use termplay::model::MAX_VOLUME;

struct NoopBackend;

impl PlaybackBackend for NoopBackend {
    fn start(&mut self, _path: &Path, _volume: u8) -> anyhow::Result<()> {
        Ok(())
    }

    fn wait(&mut self) {}
}

fuzz_target!(|data: &[u8]| {
    let mut core = PlaylistController::with_seed(MAX_VOLUME, 0);
    let mut backend = NoopBackend;
    let script = String::from_utf8_lossy(data);

    for line in script.lines() {
        if let Ok(Some(command)) = Command::parse(line) {
            let _ = core.execute(&mut backend, command);
        }
        assert!(core.state.volume <= MAX_VOLUME);
    }
});
