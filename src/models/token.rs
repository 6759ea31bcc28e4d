use serde::{Deserialize, Serialize};

/// Trading statistics over one interval (`stats5m`, `stats1h`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_organic_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_organic_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_buys: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_sells: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_traders: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_organic_buyers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_net_buyers: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_authority_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze_authority_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_holders_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FirstPool {
    pub id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenV2 {
    /// Mint address.
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circ_supply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_program: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_pool: Option<FirstPool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic_score_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cexes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_block_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats5m: Option<TokenStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats1h: Option<TokenStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats6h: Option<TokenStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats24h: Option<TokenStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Query for `GET /tokens/v2/{sortBy}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTokensParams {
    /// Listing category, used as the final path segment (e.g. `toptrending`).
    pub sort_by: String,
    /// e.g. `5m`, `1h`, `6h`, `24h`.
    pub interval: Option<String>,
    pub limit: Option<u32>,
}

/// Query for `GET /tokens/v2/search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTokensParams {
    /// Symbol, name or comma-separated mints.
    pub query: String,
}
