//! # jupiter-api-rs
//!
//! A typed async client for the Jupiter aggregation API on Solana: prices,
//! token listings, swap quotes, trigger (limit) orders and Ultra execution.
//!
//! Every endpoint goes through one pipeline, [`JupiterApi::execute`]:
//! rate limiter admission, request assembly (`x-api-key` when configured),
//! dispatch, body read, status classification and JSON decoding. No retries
//! are performed; errors come back as [`JupiterError`].
//!
//! ## Endpoints
//!
//! | Method | Path | Function |
//! |--------|------|----------|
//! | GET | `/price/v3` | [`JupiterApi::get_prices`] |
//! | GET | `/swap/v1/program-id-to-label` | [`JupiterApi::get_program_id_to_label`] |
//! | GET | `/swap/v1/quote` | [`JupiterApi::get_swap_quote`] |
//! | GET | `/tokens/v2/{sortBy}` | [`JupiterApi::get_tokens`] |
//! | GET | `/tokens/v2/search` | [`JupiterApi::search_tokens`] |
//! | POST | `/trigger/v1/createOrder` | [`JupiterApi::create_order`] |
//! | POST | `/trigger/v1/cancelOrder` | [`JupiterApi::cancel_order`] |
//! | GET | `/trigger/v1/getTriggerOrders` | [`JupiterApi::get_trigger_orders`] |
//! | POST | `/trigger/v1/execute` | [`JupiterApi::execute_trigger`] |
//! | POST | `/ultra/v1/execute` | [`JupiterApi::execute_ultra`] |
//! | GET | `/ultra/v1/order/routers` | [`JupiterApi::get_routers`] |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jupiter_api_rs::{Context, JupiterApi, DEFAULT_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = JupiterApi::new(DEFAULT_URL, "my-api-key");
//!     let ctx = Context::with_timeout(std::time::Duration::from_secs(10));
//!
//!     let prices = api
//!         .get_prices(&ctx, "So11111111111111111111111111111111111111112")
//!         .await?;
//!     for (mint, entry) in &prices {
//!         println!("{mint}: ${}", entry.usd_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! export JUPITER_API_KEY=...
//! cargo run --release -- price So11111111111111111111111111111111111111112
//! cargo run --release -- quote <input_mint> <output_mint> 1000000 --slippage-bps 50
//! cargo run --release -- tokens toptrending --interval 1h --limit 20 --out tokens.json
//! ```

pub mod config;
pub mod context;
pub mod endpoints;
pub mod error;
pub mod export;
pub mod jupiter;
pub mod models;
pub mod rate_limit;
pub mod request;
pub mod utils;

pub use config::{ClientConfig, API_KEY_HEADER, DEFAULT_URL, RATE_LIMIT_MILLISECONDS};
pub use context::Context;
pub use error::{ApiError, ContextError, JupiterError, Result};
pub use export::{load_from_file, save_to_file};
pub use jupiter::{ApiResponse, JupiterApi};
pub use models::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderParams, CreateOrderRequest,
    CreateOrderResponse, ExecuteRequest, ExecuteResponse, GetTokensParams, GetTriggerOrdersParams,
    GetTriggerOrdersResponse, PriceV3Entry, PriceV3Response, ProgramIdToLabelResponse, Router,
    RoutersResponse, SearchTokensParams, SwapQuoteParams, SwapQuoteResponse, TokenV2, TriggerOrder,
};
pub use rate_limit::RateLimiter;
pub use request::{QueryParams, Request};
