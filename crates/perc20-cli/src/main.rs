use anyhow::Result;
use clap::{Parser, Subcommand};
use perc20::{Address, TokenClient};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use url::Url;

mod sub_commands;

/// Address of the deployed PERC20 sample token.
const DEFAULT_CONTRACT: &str = "0x3D8589Eb557AD1988B512b8B83C89A8E5ff1e0dC";

/// Simple CLI application to interact with the PERC20 sample token
#[derive(Parser)]
#[command(name = "perc20-tool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON-RPC endpoint of the target network
    #[arg(short, long, env = "RPC_URL", default_value = "http://127.0.0.1:8545")]
    rpc_url: Url,
    /// Deployed token contract address
    #[arg(short, long, default_value = DEFAULT_CONTRACT)]
    contract: Address,
    /// Logging level
    #[arg(short, long, default_value = "error")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint tokens to the first node account
    Mint,
    /// Transfer tokens to a recipient
    Transfer(sub_commands::transfer::TransferSubCommand),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    let env_filter = EnvFilter::new(args.log_level.to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = TokenClient::new(args.rpc_url.clone(), args.contract);

    match &args.command {
        Commands::Mint => sub_commands::mint::mint(&client).await,
        Commands::Transfer(sub_command_args) => {
            sub_commands::transfer::transfer(&client, sub_command_args).await
        }
    }
}
