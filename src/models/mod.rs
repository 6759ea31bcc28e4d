pub mod common;
pub mod price;
pub mod swap;
pub mod token;
pub mod trigger;
pub mod ultra;

pub use common::{ExecuteRequest, ExecuteResponse, PlatformFee, RoutePlanStep, SwapInfo};
pub use price::{PriceV3Entry, PriceV3Response};
pub use swap::{ProgramIdToLabelResponse, SwapQuoteParams, SwapQuoteResponse};
pub use token::{Audit, FirstPool, GetTokensParams, SearchTokensParams, TokenStats, TokenV2};
pub use trigger::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderParams, CreateOrderRequest,
    CreateOrderResponse, GetTriggerOrdersParams, GetTriggerOrdersResponse, TriggerOrder,
    TriggerTrade,
};
pub use ultra::{Router, RoutersResponse};
