mod console;
mod session;

use clap::Parser;
use tictactoe_engine::config::{SettingsStore, Validate};
use tictactoe_engine::logger::{self, LogTarget};
use tictactoe_engine::tictactoe::Opponent;
use tictactoe_engine::{ConfigError, log};

const CONFIG_FILE_NAME: &str = "tictactoe_settings.yaml";

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// human, random, heuristic or exhaustive-search
    #[arg(long)]
    opponent: Option<Opponent>,

    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Log match events to stderr
    #[arg(long)]
    verbose: bool,
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        logger::init_logger(Some("Console".to_string()), LogTarget::Stderr);
    }

    let config_path = args.config.unwrap_or_else(get_config_path);
    let store = SettingsStore::from_yaml_file(&config_path);
    let mut settings = store.load()?;

    if let Some(opponent) = args.opponent {
        settings.opponent = opponent;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        settings.bot_delay_ms = bot_delay_ms;
    }
    settings.validate().map_err(ConfigError::Invalid)?;

    log!(
        "Loaded settings from {}: opponent {}, bot delay {} ms",
        config_path,
        settings.opponent,
        settings.bot_delay_ms
    );

    session::run_console_session(store, settings).await
}
