//! CTG command-line client
//!
//! Thin front end over the library: every command prints the raw response
//! body.

use clap::{Parser, Subcommand};
use ctg_client::{
    client::{BotListParams, DealListParams, DealScope, StatsParams},
    config::Config,
    CtgClient, RawResponse,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ctg")]
#[command(about = "Command-line client for the CTG trading-bot API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bots
    Bots {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show one bot
    Bot { bot_id: u64 },
    /// List deals
    Deals {
        #[arg(long)]
        bot_id: Option<u64>,
        /// active, finished or all
        #[arg(long)]
        scope: Option<DealScope>,
    },
    /// Show one deal
    Deal { deal_id: u64 },
    /// Freeze a deal
    Freeze { deal_id: u64 },
    /// Unfreeze a deal
    Unfreeze { deal_id: u64 },
    /// Profit statistics
    Stats {
        #[arg(long)]
        bot_id: Option<u64>,
    },
    /// Account balances
    Balances,
    /// Send an arbitrary signed request
    Raw {
        /// GET or POST
        method: String,
        /// Endpoint path without leading slash, e.g. bot/all
        path: String,
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    let client = CtgClient::new(&config.api)?;

    let response = match cli.command {
        Commands::Bots { limit } => {
            let params = BotListParams {
                limit,
                ..Default::default()
            };
            client.list_bots(&params).await?
        }
        Commands::Bot { bot_id } => client.bot_info(bot_id).await?,
        Commands::Deals { bot_id, scope } => {
            let params = DealListParams {
                bot_id,
                scope,
                ..Default::default()
            };
            client.list_deals(&params).await?
        }
        Commands::Deal { deal_id } => client.deal_info(deal_id).await?,
        Commands::Freeze { deal_id } => client.freeze_deal(deal_id).await?,
        Commands::Unfreeze { deal_id } => client.unfreeze_deal(deal_id).await?,
        Commands::Stats { bot_id } => {
            let params = StatsParams {
                bot_id,
                ..Default::default()
            };
            client.profit_stats(&params).await?
        }
        Commands::Balances => client.account_balances().await?,
        Commands::Raw {
            method,
            path,
            query,
        } => {
            client
                .dispatcher()
                .request(&method, &path, query.as_deref(), None)
                .await?
        }
    };

    print_response(response, cli.pretty);
    Ok(())
}

fn print_response(response: RawResponse, pretty: bool) {
    if !response.is_success() {
        eprintln!("status: {}", response.status);
    }

    let body = response.into_body();
    if pretty {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Ok(formatted) = serde_json::to_string_pretty(&value) {
                println!("{}", formatted);
                return;
            }
        }
    }
    println!("{}", body);
}
