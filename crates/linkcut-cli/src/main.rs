mod cli;
mod error;
mod logging;
mod menu;

use crate::cli::{Command, CLI};
use crate::error::Result;
use crate::menu::{describe, Menu, MenuOutcome};
use clap::Parser;
use linkcut_core::ShortCode;
use linkcut_gateway::AppState;
use linkcut_redirector::RedirectorService;
use linkcut_shortener::{
    ShortenParams, Shortener, ShortenerError, ShortenerService, ShortenerSettings,
};
use linkcut_storage::JsonFileRepository;
use std::net::SocketAddr;
use std::process::ExitCode;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let config = CLI::parse();

    if let Err(e) = logging::init(config.log_format) {
        eprintln!("error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: CLI) -> Result<()> {
    debug!(
        store_path = %config.store_path.display(),
        listen_addr = %config.listen_addr,
        log_format = %config.log_format,
        "starting linkcut"
    );

    let repository = JsonFileRepository::new(&config.store_path);
    let settings = ShortenerSettings::builder().start_id(config.start_id).build();
    let shortener = ShortenerService::with_settings(repository.clone(), settings);

    match config.command {
        Some(Command::Shorten { url }) => {
            let record = shortener.shorten(ShortenParams::generated(url)).await?;
            println!("{}", describe(&record, &config.public_base_url));
        }
        Some(Command::Custom { url, code }) => {
            let alias = ShortCode::custom(code).map_err(ShortenerError::from)?;
            let record = shortener.shorten(ShortenParams::custom(url, alias)).await?;
            println!("{}", describe(&record, &config.public_base_url));
        }
        Some(Command::Serve) => serve(config.listen_addr, repository).await?,
        None => {
            let mut menu = Menu::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
            if let MenuOutcome::Serve = menu.run(&shortener, &config.public_base_url).await? {
                serve(config.listen_addr, repository).await?;
            }
        }
    }

    Ok(())
}

async fn serve(listen_addr: SocketAddr, repository: JsonFileRepository) -> std::io::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    let state = AppState::new(RedirectorService::new(repository));
    linkcut_gateway::serve(listener, state).await
}
