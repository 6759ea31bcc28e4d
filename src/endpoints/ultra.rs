use crate::context::Context;
use crate::error::Result;
use crate::jupiter::JupiterApi;
use crate::models::{ExecuteRequest, ExecuteResponse, RoutersResponse};
use crate::request::Request;

use super::{ULTRA_EXECUTE_PATH, ULTRA_ROUTERS_PATH};

impl JupiterApi {
    pub async fn execute_ultra(&self, ctx: &Context, body: &ExecuteRequest) -> Result<ExecuteResponse> {
        let request = Request::post_json(ULTRA_EXECUTE_PATH, body)?;
        self.call(ctx, request).await
    }

    pub async fn get_routers(&self, ctx: &Context) -> Result<RoutersResponse> {
        self.call(ctx, Request::get(ULTRA_ROUTERS_PATH)).await
    }
}
