use practice_wordle::cli::{Cli, parse_cli, run_plain};
use practice_wordle::logging;
use practice_wordle::session::Session;
use practice_wordle::storage::{FileStorage, MemoryStorage, Storage};
use practice_wordle::tui;
use practice_wordle::wordbank::WordBank;
use std::io;

fn main() {
    logging::init();
    let cli = parse_cli();

    let bank = match &cli.wordbank_path {
        Some(path) => match WordBank::from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => WordBank::embedded(),
    };

    if cli.no_save {
        run(Session::restore_or_new(bank, MemoryStorage::new(), cli.fresh), &cli);
    } else if let Some(storage) = FileStorage::in_user_data() {
        run(Session::restore_or_new(bank, storage, cli.fresh), &cli);
    } else {
        // Storage trouble is non-fatal: play on without saved state.
        log::warn!("no writable data directory, continuing without saved state");
        run(Session::restore_or_new(bank, MemoryStorage::new(), cli.fresh), &cli);
    }
}

fn run<S: Storage>(mut session: Session<S>, cli: &Cli) {
    if cli.plain {
        let stdin = io::stdin();
        run_plain(&mut session, &mut stdin.lock());
    } else if let Err(e) = tui::run(&mut session) {
        eprintln!("Terminal error: {e}");
        std::process::exit(1);
    }
}
