use clap::Parser;
use doc_intake::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Extract(args) => cli::extract::run(args).await,
    }
}
