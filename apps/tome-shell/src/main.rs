use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = tome_shell::Args::parse();
	tome_shell::run(args).await
}
