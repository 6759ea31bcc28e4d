use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{PlatformFee, RoutePlanStep};

/// Program id -> venue label.
pub type ProgramIdToLabelResponse = HashMap<String, String>;

/// Query for `GET /swap/v1/quote`.
///
/// `input_mint`, `output_mint` and `amount` are always sent. Everything else
/// is sent only when set (numbers only when positive, flags only when true).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapQuoteParams {
    pub input_mint: String,
    pub output_mint: String,
    /// Raw amount in the smallest unit of the input (or output, for ExactOut) mint.
    pub amount: String,
    pub slippage_bps: Option<u16>,
    /// `ExactIn` or `ExactOut`.
    pub swap_mode: Option<String>,
    /// Comma-separated venue labels.
    pub dexes: Option<String>,
    pub exclude_dexes: Option<String>,
    /// Sent for both `true` and `false` when set.
    pub restrict_intermediate_tokens: Option<bool>,
    pub only_direct_routes: bool,
    pub as_legacy_transaction: bool,
    pub platform_fee_bps: Option<u16>,
    pub max_accounts: Option<u32>,
}

impl SwapQuoteParams {
    pub fn new(input_mint: &str, output_mint: &str, amount: &str) -> Self {
        Self {
            input_mint: input_mint.to_string(),
            output_mint: output_mint.to_string(),
            amount: amount.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteResponse {
    pub input_mint: String,
    pub in_amount: String,
    pub output_mint: String,
    pub out_amount: String,
    pub other_amount_threshold: String,
    pub swap_mode: String,
    pub slippage_bps: u16,
    pub price_impact_pct: String,
    pub route_plan: Vec<RoutePlanStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<PlatformFee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_slot: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
}

impl SwapQuoteResponse {
    /// Venue labels along the route, in hop order.
    pub fn route_labels(&self) -> Vec<&str> {
        self.route_plan
            .iter()
            .filter_map(|step| step.swap_info.label.as_deref())
            .collect()
    }
}
