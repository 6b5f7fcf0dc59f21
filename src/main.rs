use anyhow::Result;
use clap::Parser;

use chartctl::commands;

/// chartctl - command-line client for the charts service
///
/// Talks to the charts REST backend (http://localhost:5000/api/charts by
/// default) and exposes its five operations: list, show, create, update
/// and delete.
///
/// Examples:
///   chartctl list
///   chartctl create --name "my flow" --data '{"nodes": []}'
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the charts API (also via CHARTCTL_API_URL)
    #[arg(
        long = "api-url",
        env = "CHARTCTL_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List all charts
    List,

    /// Show one chart as JSON
    Show(ShowArgs),

    /// Create a new chart
    Create(CreateArgs),

    /// Update an existing chart
    Update(UpdateArgs),

    /// Delete a chart
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Chart id
    #[arg(value_name = "ID")]
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Chart name
    #[arg(long)]
    pub name: String,

    /// Chart payload as a JSON document
    #[arg(long, value_name = "JSON")]
    pub data: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Chart id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New chart name (kept unchanged when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Chart payload as a JSON document
    #[arg(long, value_name = "JSON")]
    pub data: String,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Chart id
    #[arg(value_name = "ID")]
    pub id: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let client = commands::build_client(cli.api_url)?;

    match cli.command {
        Commands::List => commands::list(&client).await?,
        Commands::Show(args) => commands::show(&client, args.id).await?,
        Commands::Create(args) => commands::create(&client, &args.name, &args.data).await?,
        Commands::Update(args) => {
            commands::update(&client, args.id, args.name, &args.data).await?
        }
        Commands::Delete(args) => commands::remove(&client, args.id).await?,
    }
    Ok(())
}
