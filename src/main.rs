use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use jupiter_api_rs::{
    save_to_file, ClientConfig, Context, GetTokensParams, GetTriggerOrdersParams, JupiterApi,
    SearchTokensParams, SwapQuoteParams, DEFAULT_URL,
};

#[derive(Parser)]
#[command(name = "jupiter-api-rs", about = "Query the Jupiter aggregation API")]
struct Cli {
    #[arg(long, env = "JUPITER_API_URL", default_value = DEFAULT_URL)]
    api_url: String,

    #[arg(long, env = "JUPITER_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Minimum spacing between requests; 0 disables pacing.
    #[arg(long, env = "JUPITER_RATE_LIMIT_MS", default_value_t = jupiter_api_rs::RATE_LIMIT_MILLISECONDS)]
    rate_limit_ms: u64,

    /// Abort the command after this many seconds.
    #[arg(long, env = "JUPITER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Write the JSON result to a file instead of stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// USD prices for one or more mints.
    Price {
        #[arg(required = true)]
        mints: Vec<String>,
    },
    /// Program id to venue label mapping.
    Labels,
    /// Swap quote.
    Quote {
        input_mint: String,
        output_mint: String,
        amount: String,
        #[arg(long)]
        slippage_bps: Option<u16>,
        #[arg(long)]
        swap_mode: Option<String>,
        #[arg(long)]
        dexes: Option<String>,
        #[arg(long)]
        exclude_dexes: Option<String>,
        #[arg(long)]
        restrict_intermediate_tokens: Option<bool>,
        #[arg(long)]
        only_direct_routes: bool,
        #[arg(long)]
        as_legacy_transaction: bool,
        #[arg(long)]
        platform_fee_bps: Option<u16>,
        #[arg(long)]
        max_accounts: Option<u32>,
    },
    /// Token listing for a category, e.g. `toptrending`.
    Tokens {
        sort_by: String,
        #[arg(long)]
        interval: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Search tokens by symbol, name or mint.
    Search { query: String },
    /// Trigger orders of a wallet.
    Orders {
        user: String,
        #[arg(long, default_value = "active")]
        status: String,
        #[arg(long)]
        input_mint: Option<String>,
        #[arg(long)]
        output_mint: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Routing venues available to Ultra.
    Routers,
}

fn emit<T: Serialize>(data: &T, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            save_to_file(data, path)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(data)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.api_url, &cli.api_key)
        .with_rate_limit(Duration::from_millis(cli.rate_limit_ms));
    let api = JupiterApi::from_config(config)?;
    let ctx = Context::with_timeout(Duration::from_secs(cli.timeout_secs));
    let out = cli.out.as_ref();

    match cli.command {
        Command::Price { mints } => {
            let prices = api.get_prices(&ctx, &mints.join(",")).await?;
            emit(&prices, out)?;
        }
        Command::Labels => emit(&api.get_program_id_to_label(&ctx).await?, out)?,
        Command::Quote {
            input_mint,
            output_mint,
            amount,
            slippage_bps,
            swap_mode,
            dexes,
            exclude_dexes,
            restrict_intermediate_tokens,
            only_direct_routes,
            as_legacy_transaction,
            platform_fee_bps,
            max_accounts,
        } => {
            let params = SwapQuoteParams {
                slippage_bps,
                swap_mode,
                dexes,
                exclude_dexes,
                restrict_intermediate_tokens,
                only_direct_routes,
                as_legacy_transaction,
                platform_fee_bps,
                max_accounts,
                ..SwapQuoteParams::new(&input_mint, &output_mint, &amount)
            };
            let quote = api.get_swap_quote(&ctx, &params).await?;
            eprintln!("Route: {}", quote.route_labels().join(" -> "));
            emit(&quote, out)?;
        }
        Command::Tokens {
            sort_by,
            interval,
            limit,
        } => {
            let params = GetTokensParams {
                sort_by,
                interval,
                limit,
            };
            emit(&api.get_tokens(&ctx, &params).await?, out)?;
        }
        Command::Search { query } => {
            let tokens = api.search_tokens(&ctx, &SearchTokensParams { query }).await?;
            eprintln!("Found {} token(s).", tokens.len());
            emit(&tokens, out)?;
        }
        Command::Orders {
            user,
            status,
            input_mint,
            output_mint,
            page,
        } => {
            let params = GetTriggerOrdersParams {
                input_mint,
                output_mint,
                page,
                ..GetTriggerOrdersParams::new(&user, &status)
            };
            let orders = api.get_trigger_orders(&ctx, &params).await?;
            eprintln!(
                "Page {}/{}: {} order(s).",
                orders.page,
                orders.total_pages,
                orders.orders.len()
            );
            emit(&orders, out)?;
        }
        Command::Routers => emit(&api.get_routers(&ctx).await?, out)?,
    }

    Ok(())
}
