use std::io;

use anyhow::Result;
use log::error;

use ledger::cli::Session;
use ledger::config::{LedgerPaths, Settings};
use ledger::storage::TransactionStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let paths = LedgerPaths::new()?;

    let settings = Settings::load_or_default(&paths).unwrap_or_else(|e| {
        error!("{}", e);
        println!("Error: {}; using default settings", e);
        Settings::default()
    });

    let path = settings.transactions_path(&paths);
    let store = TransactionStore::load(&path).unwrap_or_else(|e| {
        error!("failed to load {}: {}", path.display(), e);
        println!("Error: {}", e);
        TransactionStore::empty(&path)
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, settings, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
