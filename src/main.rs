use chrono::Local;
use daily_wordle::cli::{CliInterface, parse_cli};
use daily_wordle::game_state::{GameSession, game_loop};
use daily_wordle::logging::{default_log_path, init_logging};
use daily_wordle::tui::TuiInterface;
use daily_wordle::wordbank::{
    EMBEDDED_DICTIONARY, EMBEDDED_WORDLIST, build_dictionary, elapsed_days,
    get_dictionary_override_path, get_wordlist_override_path, resolve_words, select_puzzle,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| if cli.plain { None } else { default_log_path() });
    if let Err(e) = init_logging(log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let wordlist = match resolve_words(
        cli.wordlist_path.as_deref(),
        get_wordlist_override_path(),
        EMBEDDED_WORDLIST,
    ) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dictionary = match resolve_words(
        cli.dictionary_path.as_deref(),
        get_dictionary_override_path(),
        EMBEDDED_DICTIONARY,
    ) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let puzzle = match select_puzzle(&wordlist, elapsed_days(cli.epoch, today)) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Cannot pick a puzzle: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Puzzle #{} for {}", puzzle.number, today);

    let mut session = GameSession::new(puzzle.target, build_dictionary(dictionary, &wordlist));

    let status = if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut session, &puzzle, &mut interface)
    } else {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&mut session, &puzzle, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    log::info!("Session ended: {:?}", status);
    ExitCode::SUCCESS
}
