use termplay::config::{self, Settings};
use termplay::model::MAX_VOLUME;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct CliArgs {
    player: Option<String>,
    volume: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    init_tracing();

    let mut settings = config::load_settings()?;
    apply_overrides(&mut settings, args);
    settings.validate()?;

    termplay::app::run(&settings)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TERMPLAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn apply_overrides(settings: &mut Settings, args: CliArgs) {
    if let Some(player) = args.player {
        settings.player = player;
    }
    if let Some(volume) = args.volume {
        settings.initial_volume = volume;
    }
}

fn parse_args(args: Vec<String>) -> anyhow::Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--player" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--player requires a program name");
                };
                if value.trim().is_empty() {
                    anyhow::bail!("--player cannot be empty");
                }
                out.player = Some(value.trim().to_string());
            }
            "--volume" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    anyhow::bail!("--volume requires a value between 0 and {MAX_VOLUME}");
                };
                match value.trim().parse::<u8>() {
                    Ok(volume) if volume <= MAX_VOLUME => out.volume = Some(volume),
                    _ => anyhow::bail!("--volume must be between 0 and {MAX_VOLUME}, got {value}"),
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument {other}"),
        }
        index += 1;
    }
    Ok(out)
}

fn print_help() {
    println!("termplay");
    println!("  --player <program>   Player binary to launch per track (default mpv)");
    println!("  --volume <0-100>     Starting volume");
    println!("Settings are read from $TERMPLAY_CONFIG_DIR/settings.json or ~/.config/termplay/settings.json.");
    println!("Set TERMPLAY_LOG=debug for diagnostics on stderr.");
}
