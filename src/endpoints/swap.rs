use crate::context::Context;
use crate::error::Result;
use crate::jupiter::JupiterApi;
use crate::models::{ProgramIdToLabelResponse, SwapQuoteParams, SwapQuoteResponse};
use crate::request::{QueryParams, Request};

use super::{PROGRAM_ID_TO_LABEL_PATH, SWAP_QUOTE_PATH};

fn swap_quote_query(params: &SwapQuoteParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .set("inputMint", &params.input_mint)
        .set("outputMint", &params.output_mint)
        .set("amount", &params.amount)
        .set_opt("slippageBps", params.slippage_bps.filter(|v| *v > 0))
        .set_opt("swapMode", params.swap_mode.as_deref())
        .set_opt("dexes", params.dexes.as_deref())
        .set_opt("excludeDexes", params.exclude_dexes.as_deref())
        .set_opt("restrictIntermediateTokens", params.restrict_intermediate_tokens)
        .set_flag("onlyDirectRoutes", params.only_direct_routes)
        .set_flag("asLegacyTransaction", params.as_legacy_transaction)
        .set_opt("platformFeeBps", params.platform_fee_bps.filter(|v| *v > 0))
        .set_opt("maxAccounts", params.max_accounts.filter(|v| *v > 0));
    query
}

impl JupiterApi {
    pub async fn get_program_id_to_label(&self, ctx: &Context) -> Result<ProgramIdToLabelResponse> {
        self.call(ctx, Request::get(PROGRAM_ID_TO_LABEL_PATH)).await
    }

    pub async fn get_swap_quote(
        &self,
        ctx: &Context,
        params: &SwapQuoteParams,
    ) -> Result<SwapQuoteResponse> {
        let request = Request::get(SWAP_QUOTE_PATH).with_query(swap_quote_query(params));
        self.call(ctx, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_params_only() {
        let query = swap_quote_query(&SwapQuoteParams::new("SOL111", "USDC111", "1000000000"));
        assert_eq!(query.get("inputMint"), Some("SOL111"));
        assert_eq!(query.get("outputMint"), Some("USDC111"));
        assert_eq!(query.get("amount"), Some("1000000000"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_required_params_sent_when_empty() {
        let query = swap_quote_query(&SwapQuoteParams::default());
        assert_eq!(query.get("inputMint"), Some(""));
        assert_eq!(query.get("amount"), Some(""));
    }

    #[test]
    fn test_zero_and_empty_optionals_are_omitted() {
        let params = SwapQuoteParams {
            slippage_bps: Some(0),
            swap_mode: Some(String::new()),
            platform_fee_bps: Some(0),
            max_accounts: Some(0),
            ..SwapQuoteParams::new("A", "B", "1")
        };
        let query = swap_quote_query(&params);
        for key in ["slippageBps", "swapMode", "platformFeeBps", "maxAccounts", "onlyDirectRoutes"] {
            assert!(!query.contains(key), "{key} should be omitted");
        }
    }

    #[test]
    fn test_all_optionals_encoded() {
        let params = SwapQuoteParams {
            slippage_bps: Some(50),
            swap_mode: Some("ExactOut".into()),
            dexes: Some("Raydium,Orca V2".into()),
            exclude_dexes: Some("Meteora".into()),
            restrict_intermediate_tokens: Some(false),
            only_direct_routes: true,
            as_legacy_transaction: true,
            platform_fee_bps: Some(20),
            max_accounts: Some(64),
            ..SwapQuoteParams::new("A", "B", "1")
        };
        let query = swap_quote_query(&params);
        assert_eq!(query.get("slippageBps"), Some("50"));
        assert_eq!(query.get("swapMode"), Some("ExactOut"));
        assert_eq!(query.get("dexes"), Some("Raydium,Orca V2"));
        assert_eq!(query.get("excludeDexes"), Some("Meteora"));
        assert_eq!(query.get("restrictIntermediateTokens"), Some("false"));
        assert_eq!(query.get("onlyDirectRoutes"), Some("true"));
        assert_eq!(query.get("asLegacyTransaction"), Some("true"));
        assert_eq!(query.get("platformFeeBps"), Some("20"));
        assert_eq!(query.get("maxAccounts"), Some("64"));
    }
}
