mod config;
mod render;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tictactoe_engine::{GameStatus, Mark, Session, log, logger};

use config::Config;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file; defaults to a file next to the
    /// executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

enum AfterGame {
    PlayAgain,
    ResetScores,
    Quit,
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Cli".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let cfg = match config::load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            log!("{}, falling back to defaults", e);
            Config::default()
        }
    };
    if !config_path.exists()
        && let Err(e) = config::save_config(&config_path, &cfg)
    {
        log!("Failed to write default config: {}", e);
    }

    let stdin = std::io::stdin();
    let mut session = Session::new();
    log!("Session started, game 1 begins with X");

    loop {
        if !run_game(&mut session, &cfg, &stdin) {
            break;
        }

        match prompt_after_game(&stdin) {
            AfterGame::PlayAgain => {
                session.new_game();
            }
            AfterGame::ResetScores => {
                session.reset_scores();
                session.new_game();
            }
            AfterGame::Quit => break,
        }
        log!(
            "Game {} begins with {:?}",
            session.games_started(),
            session.game().current_mark
        );
    }

    log!("Session ended after {} game(s)", session.games_started());
}

/// Plays one game to its end. Returns false when input ran out or the
/// engine reported an unrecoverable error.
fn run_game(session: &mut Session, cfg: &Config, stdin: &std::io::Stdin) -> bool {
    while session.game().status == GameStatus::InProgress {
        if session.game().current_mark == Mark::O {
            match session.computer_move() {
                Ok(index) => {
                    log!("Computer plays cell {}", index as u32 + cfg.input_base);
                }
                Err(e) => {
                    println!("{}", e);
                    return false;
                }
            }
            continue;
        }

        println!();
        print!("{}", render::render_board(session.game(), cfg));
        print!("Your move ({}-{}): ", cfg.input_base, cfg.input_base + 8);
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }

        let Ok(number) = line.trim().parse::<u32>() else {
            println!(
                "Enter a cell number between {} and {}",
                cfg.input_base,
                cfg.input_base + 8
            );
            continue;
        };
        if number < cfg.input_base || number > cfg.input_base + 8 {
            println!(
                "Enter a cell number between {} and {}",
                cfg.input_base,
                cfg.input_base + 8
            );
            continue;
        }

        let index = (number - cfg.input_base) as usize;
        if !session.game().board.is_valid_move(index) {
            println!("That cell is already taken");
            continue;
        }

        if let Err(e) = session.player_move(index) {
            println!("{}", e);
        }
    }

    println!();
    print!("{}", render::render_board(session.game(), cfg));
    println!("{}", render::outcome_message(session.game().status));
    println!("{}", render::render_scores(&session.scores()));
    true
}

fn prompt_after_game(stdin: &std::io::Stdin) -> AfterGame {
    print!("Play again? [y]es / [r]eset scores / [q]uit: ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) | Err(_) => return AfterGame::Quit,
        Ok(_) => {}
    }

    match line.trim().chars().next() {
        Some('y') | Some('Y') => AfterGame::PlayAgain,
        Some('r') | Some('R') => AfterGame::ResetScores,
        _ => AfterGame::Quit,
    }
}
