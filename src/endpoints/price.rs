use crate::context::Context;
use crate::error::Result;
use crate::jupiter::JupiterApi;
use crate::models::PriceV3Response;
use crate::request::{QueryParams, Request};

use super::PRICE_V3_PATH;

fn price_query(ids: &str) -> QueryParams {
    let mut query = QueryParams::new();
    query.set("ids", ids);
    query
}

impl JupiterApi {
    /// USD prices for a comma-separated list of mints.
    pub async fn get_prices(&self, ctx: &Context, ids: &str) -> Result<PriceV3Response> {
        let request = Request::get(PRICE_V3_PATH).with_query(price_query(ids));
        self.call(ctx, request).await
    }

    /// Same as [`get_prices`](Self::get_prices) for a slice of mints.
    pub async fn get_prices_for(&self, ctx: &Context, mints: &[&str]) -> Result<PriceV3Response> {
        self.get_prices(ctx, &mints.join(",")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_always_sent() {
        assert_eq!(price_query("SOL,USDC").get("ids"), Some("SOL,USDC"));
        assert_eq!(price_query("").get("ids"), Some(""));
    }
}
