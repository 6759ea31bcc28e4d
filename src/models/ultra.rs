use serde::{Deserialize, Serialize};

/// A routing venue available to Ultra orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Router {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub type RoutersResponse = Vec<Router>;
