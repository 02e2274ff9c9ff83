pub mod repl;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tome_session::Session;
use tome_store::fs::FsStore;

#[derive(Debug, Parser)]
#[command(
	version = tome_cli::VERSION,
	rename_all = "kebab",
	styles = tome_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = tome_config::load(&args.config)?;
	init_tracing(&config)?;

	let store = Arc::new(FsStore::new(config.storage.data_dir.clone()));
	let session = Session::new(config.clone(), store);

	tracing::info!(data_dir = %config.storage.data_dir, "Session storage ready.");

	// Initial load: default results, like opening the app.
	session.home().await;

	repl::run(&session, &config).await
}

fn init_tracing(config: &tome_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();
	Ok(())
}
