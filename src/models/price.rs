use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceV3Entry {
    pub usd_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<f64>,
}

/// Prices keyed by the requested token id. Unknown ids are simply absent.
pub type PriceV3Response = HashMap<String, PriceV3Entry>;
