use clap::Parser;
use letter_counter_cli::args::{Args, Mode};
use letter_counter_cli::config::Config;
use letter_counter_cli::{interactive, logging, presentation};
use letter_counter_engine::session::{Outcome, Session};
use std::ops::ControlFlow;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    let mode = args.mode();
    let config = Config::from(args);

    if let Err(e) = config.validate() {
        eprintln!("Configuration Error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(?mode, file = ?config.file, letters = %config.letters, "starting");

    match mode {
        Mode::Check => check(&config.letters),
        Mode::Interactive => {
            let stdin = std::io::stdin();
            match interactive::run(&config, stdin.lock(), std::io::stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Application Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Mode::Watch => watch(&config),
        Mode::Once => match letter_counter_engine::run(&config) {
            Ok(session) => report(&session, &config),
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn check(letters: &str) -> ExitCode {
    match letter_counter_engine::validate_letters(letters) {
        Ok(_) => {
            println!("Valid input");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Invalid input");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn report(session: &Session, config: &Config) -> ExitCode {
    if let Err(e) = presentation::print_results(session, config) {
        eprintln!("Output Error: {e}");
        return ExitCode::FAILURE;
    }
    if matches!(session.outcome(), Outcome::Invalid) {
        if let Err(e) = letter_counter_engine::validate_letters(session.raw_letters()) {
            eprintln!("{e}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn watch(config: &Config) -> ExitCode {
    let mut session = Session::new(config);
    let run_cycle = || {
        if !config.format.is_structured() {
            presentation::print_clear_screen();
        }
        match session.submit_path(config.file.as_deref()) {
            Ok(_) => {
                if let Err(e) = presentation::print_results(&session, config) {
                    eprintln!("Output Error: {e}");
                }
            }
            // Keep what was shown last time.
            Err(e) => eprintln!("Error in watch cycle: {e}"),
        }
        ControlFlow::Continue(())
    };

    if let Err(e) = letter_counter_engine::watch::watch_loop(config, run_cycle) {
        eprintln!("Watch Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
