use serde::{Deserialize, Serialize};

use crate::utils::opt_string_number;

/// Order terms of a trigger order. Amounts are raw, unscaled integers as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    pub making_amount: String,
    pub taking_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_string_number")]
    pub slippage_bps: Option<u16>,
    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_string_number")]
    pub expired_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "opt_string_number")]
    pub fee_bps: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub input_mint: String,
    pub output_mint: String,
    pub maker: String,
    pub payer: String,
    pub params: CreateOrderParams,
    /// Micro-lamports, or `"auto"`.
    pub compute_unit_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_and_unwrap_sol: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// Order account address.
    pub order: String,
    /// Unsigned transaction, base64.
    pub transaction: String,
    pub request_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub maker: String,
    pub order: String,
    pub compute_unit_price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    pub transaction: String,
    pub request_id: String,
}

/// Query for `GET /trigger/v1/getTriggerOrders`. `user` and `order_status`
/// are always sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTriggerOrdersParams {
    pub user: String,
    /// `active` or `history`.
    pub order_status: String,
    pub input_mint: Option<String>,
    pub output_mint: Option<String>,
    pub page: Option<u32>,
}

impl GetTriggerOrdersParams {
    pub fn new(user: &str, order_status: &str) -> Self {
        Self {
            user: user.to_string(),
            order_status: order_status.to_string(),
            ..Self::default()
        }
    }
}

/// A fill against a trigger order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerTrade {
    pub order_key: String,
    pub keeper: String,
    pub input_mint: String,
    pub output_mint: String,
    pub input_amount: String,
    pub output_amount: String,
    pub raw_input_amount: String,
    pub raw_output_amount: String,
    pub fee_mint: String,
    pub fee_amount: String,
    pub raw_fee_amount: String,
    pub tx_id: String,
    pub confirmed_at: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_meta: Option<serde_json::Value>,
}

/// Human amounts (`making_amount`, ...) are decimal-adjusted; the `raw_*`
/// variants are in the mint's smallest unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerOrder {
    pub user_pubkey: String,
    pub order_key: String,
    pub input_mint: String,
    pub output_mint: String,
    pub making_amount: String,
    pub taking_amount: String,
    pub remaining_making_amount: String,
    pub remaining_taking_amount: String,
    pub raw_making_amount: String,
    pub raw_taking_amount: String,
    pub raw_remaining_making_amount: String,
    pub raw_remaining_taking_amount: String,
    #[serde(skip_serializing_if = "Option::is_none", with = "opt_string_number")]
    pub slippage_bps: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub status: String,
    pub open_tx: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_tx: Option<String>,
    pub program_version: String,
    pub trades: Vec<TriggerTrade>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GetTriggerOrdersResponse {
    pub user: String,
    pub order_status: String,
    pub orders: Vec<TriggerOrder>,
    pub total_pages: u32,
    pub page: u32,
}

impl GetTriggerOrdersResponse {
    pub fn has_more_pages(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_slippage_is_omitted_from_params() {
        let body = serde_json::to_value(CreateOrderRequest {
            input_mint: "SOL".into(),
            output_mint: "USDC".into(),
            maker: "maker1".into(),
            payer: "payer1".into(),
            params: CreateOrderParams {
                making_amount: "1000000".into(),
                taking_amount: "150000".into(),
                ..Default::default()
            },
            compute_unit_price: "auto".into(),
            ..Default::default()
        })
        .unwrap();

        let params = body["params"].as_object().unwrap();
        assert!(!params.contains_key("slippageBps"));
        assert!(!params.contains_key("expiredAt"));
        assert!(!params.contains_key("feeBps"));
        assert_eq!(params["makingAmount"], "1000000");
        assert!(!body.as_object().unwrap().contains_key("feeAccount"));
        assert!(!body.as_object().unwrap().contains_key("wrapAndUnwrapSol"));
    }

    #[test]
    fn test_set_params_are_sent_as_strings() {
        let body = serde_json::to_value(CreateOrderParams {
            making_amount: "1".into(),
            taking_amount: "2".into(),
            slippage_bps: Some(0),
            expired_at: Some(1_700_000_000),
            fee_bps: Some(10),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "makingAmount": "1",
                "takingAmount": "2",
                "slippageBps": "0",
                "expiredAt": "1700000000",
                "feeBps": "10"
            })
        );
    }

    #[test]
    fn test_decode_trigger_orders() {
        let raw = json!({
            "user": "user1",
            "orderStatus": "active",
            "orders": [{
                "userPubkey": "user1",
                "orderKey": "order1",
                "inputMint": "SOL",
                "outputMint": "USDC",
                "makingAmount": "1",
                "takingAmount": "150",
                "remainingMakingAmount": "1",
                "remainingTakingAmount": "150",
                "rawMakingAmount": "1000000000",
                "rawTakingAmount": "150000000",
                "rawRemainingMakingAmount": "1000000000",
                "rawRemainingTakingAmount": "150000000",
                "slippageBps": "0",
                "expiredAt": null,
                "createdAt": "2025-01-01T00:00:00Z",
                "updatedAt": "2025-01-01T00:00:00Z",
                "status": "Open",
                "openTx": "tx1",
                "closeTx": "",
                "programVersion": "j1o",
                "trades": []
            }],
            "totalPages": 3,
            "page": 1
        });
        let response: GetTriggerOrdersResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.orders.len(), 1);
        let order = &response.orders[0];
        assert_eq!(order.order_key, "order1");
        assert_eq!(order.slippage_bps, Some(0));
        assert_eq!(order.expired_at, None);
        assert!(response.has_more_pages());
    }
}
