use std::io::Write;
use std::time::Duration;

use tictactoe_engine::config::{
    ConfigContentProvider, FileContentConfigProvider, MatchSettings, SettingsStore,
};
use tictactoe_engine::tictactoe::{MatchController, Opponent};
use tictactoe_engine::{ConfigError, log};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::console::{
    Command, HELP_TEXT, describe_rejection, parse_command, render_screen, score_line,
};

pub async fn run_console_session(
    store: SettingsStore<FileContentConfigProvider>,
    settings: MatchSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let bot_delay = Duration::from_millis(settings.bot_delay_ms);
    let mut controller = MatchController::new(settings.opponent, settings.seed);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP_TEXT);
    println!("{}", render_screen(&controller));

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Place(cell) => {
                if let Err(e) = controller.submit_human_move(cell) {
                    println!("{}", describe_rejection(&e));
                    continue;
                }
                println!("{}", render_screen(&controller));

                if controller.opponent_to_move() {
                    tokio::time::sleep(bot_delay).await;
                    controller = play_opponent_turn(controller).await?;
                    println!("{}", render_screen(&controller));
                }
            }
            Command::Restart => {
                controller.reset();
                println!("{}", render_screen(&controller));
            }
            Command::NewMatch(opponent) => {
                controller.new_match(opponent);
                println!("{}", render_screen(&controller));

                if let Err(e) = remember_opponent(&store, opponent) {
                    log!("Failed to save settings: {}", e);
                    println!("Could not remember the opponent choice: {}", e);
                }
            }
            Command::ResetScores => {
                controller.reset_scores();
                println!("{}", score_line(&controller.scores()));
            }
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => break,
        }
    }

    log!("Session finished with {}", score_line(&controller.scores()));
    Ok(())
}

/// Stores the opponent choice on top of what the file holds, leaving command
/// line overrides out of it.
fn remember_opponent<P: ConfigContentProvider>(
    store: &SettingsStore<P>,
    opponent: Opponent,
) -> Result<(), ConfigError> {
    let mut stored = store.load()?;
    stored.opponent = opponent;
    store.save(&stored)
}

/// The search can take a while on an open board, so it runs off the runtime
/// thread and hands the controller back when done.
async fn play_opponent_turn(
    mut controller: MatchController,
) -> Result<MatchController, Box<dyn std::error::Error>> {
    let (mut controller, result) = tokio::task::spawn_blocking(move || {
        let result = controller.play_opponent_turn();
        (controller, result)
    })
    .await?;

    if let Err(e) = result {
        log!("Opponent failed to move: {}", e);
        println!("Opponent failed to move: {}. Starting a new game", e);
        controller.reset();
    }
    Ok(controller)
}
