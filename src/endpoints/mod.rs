//! One `impl JupiterApi` block per API family. Every function builds a
//! [`Request`](crate::request::Request), runs it through
//! [`JupiterApi::execute`](crate::JupiterApi::execute) once and returns the
//! pipeline error untouched.

pub mod price;
pub mod swap;
pub mod tokens;
pub mod trigger;
pub mod ultra;

pub const PRICE_V3_PATH: &str = "/price/v3";
pub const PROGRAM_ID_TO_LABEL_PATH: &str = "/swap/v1/program-id-to-label";
pub const SWAP_QUOTE_PATH: &str = "/swap/v1/quote";
pub const TOKENS_V2_PATH: &str = "/tokens/v2";
pub const TOKENS_SEARCH_PATH: &str = "/tokens/v2/search";
pub const TRIGGER_CREATE_ORDER_PATH: &str = "/trigger/v1/createOrder";
pub const TRIGGER_CANCEL_ORDER_PATH: &str = "/trigger/v1/cancelOrder";
pub const TRIGGER_GET_ORDERS_PATH: &str = "/trigger/v1/getTriggerOrders";
pub const TRIGGER_EXECUTE_PATH: &str = "/trigger/v1/execute";
pub const ULTRA_EXECUTE_PATH: &str = "/ultra/v1/execute";
pub const ULTRA_ROUTERS_PATH: &str = "/ultra/v1/order/routers";
