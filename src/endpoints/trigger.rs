use crate::context::Context;
use crate::error::Result;
use crate::jupiter::JupiterApi;
use crate::models::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, CreateOrderResponse,
    ExecuteRequest, ExecuteResponse, GetTriggerOrdersParams, GetTriggerOrdersResponse,
};
use crate::request::{QueryParams, Request};

use super::{
    TRIGGER_CANCEL_ORDER_PATH, TRIGGER_CREATE_ORDER_PATH, TRIGGER_EXECUTE_PATH,
    TRIGGER_GET_ORDERS_PATH,
};

fn trigger_orders_query(params: &GetTriggerOrdersParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .set("user", &params.user)
        .set("orderStatus", &params.order_status)
        .set_opt("inputMint", params.input_mint.as_deref())
        .set_opt("outputMint", params.output_mint.as_deref())
        .set_opt("page", params.page.filter(|v| *v > 0));
    query
}

impl JupiterApi {
    /// Returns the unsigned transaction that opens the order.
    pub async fn create_order(
        &self,
        ctx: &Context,
        body: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse> {
        let request = Request::post_json(TRIGGER_CREATE_ORDER_PATH, body)?;
        self.call(ctx, request).await
    }

    pub async fn cancel_order(
        &self,
        ctx: &Context,
        body: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse> {
        let request = Request::post_json(TRIGGER_CANCEL_ORDER_PATH, body)?;
        self.call(ctx, request).await
    }

    pub async fn get_trigger_orders(
        &self,
        ctx: &Context,
        params: &GetTriggerOrdersParams,
    ) -> Result<GetTriggerOrdersResponse> {
        let request = Request::get(TRIGGER_GET_ORDERS_PATH).with_query(trigger_orders_query(params));
        self.call(ctx, request).await
    }

    /// Submit a signed create/cancel transaction.
    pub async fn execute_trigger(
        &self,
        ctx: &Context,
        body: &ExecuteRequest,
    ) -> Result<ExecuteResponse> {
        let request = Request::post_json(TRIGGER_EXECUTE_PATH, body)?;
        self.call(ctx, request).await
    }
}
