use crate::context::Context;
use crate::error::Result;
use crate::jupiter::JupiterApi;
use crate::models::{GetTokensParams, SearchTokensParams, TokenV2};
use crate::request::{QueryParams, Request};

use super::{TOKENS_SEARCH_PATH, TOKENS_V2_PATH};

fn tokens_request(params: &GetTokensParams) -> Request {
    let mut query = QueryParams::new();
    query
        .set_opt("interval", params.interval.as_deref())
        .set_opt("limit", params.limit.filter(|v| *v > 0));
    Request::get(&format!("{}/{}", TOKENS_V2_PATH, params.sort_by)).with_query(query)
}

impl JupiterApi {
    /// Token listing for a category such as `toptrending` or `recent`.
    pub async fn get_tokens(&self, ctx: &Context, params: &GetTokensParams) -> Result<Vec<TokenV2>> {
        self.call(ctx, tokens_request(params)).await
    }

    pub async fn search_tokens(
        &self,
        ctx: &Context,
        params: &SearchTokensParams,
    ) -> Result<Vec<TokenV2>> {
        let mut query = QueryParams::new();
        query.set("query", &params.query);
        self.call(ctx, Request::get(TOKENS_SEARCH_PATH).with_query(query))
            .await
    }
}
