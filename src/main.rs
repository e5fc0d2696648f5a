use clap::Parser;
use log::debug;

use nutri_calc::cli::Cli;
use nutri_calc::error::Result;
use nutri_calc::interface::{Session, TerminalConsole};
use nutri_calc::state::DatasetStore;
use nutri_calc::summary::Summarizer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    debug!("{:?}", cli);

    let mut store = DatasetStore::open(&cli.file).inspect_err(|e| {
        if e.is_data_error() {
            eprintln!(
                "Please ensure {} exists and holds a JSON object of foods.",
                cli.file.display()
            );
        }
    })?;

    let mut session = Session::new(&mut store, Summarizer::default(), TerminalConsole::new())
        .with_breakdown(cli.breakdown);
    session.run()?;

    Ok(())
}
