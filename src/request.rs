use std::collections::BTreeMap;
use std::fmt::Display;

use reqwest::Method;
use serde::Serialize;

use crate::error::{JupiterError, Result};

/// Query string parameters, emitted in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always sent, even when empty.
    pub fn set(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Sent only when present and not rendering to an empty string.
    pub fn set_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.0.insert(key.to_string(), value);
            }
        }
        self
    }

    /// Sent as `"true"` when set, omitted otherwise.
    pub fn set_flag(&mut self, key: &str, flag: bool) -> &mut Self {
        if flag {
            self.0.insert(key.to_string(), "true".to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering, e.g. `ids=SOL%2CUSDC`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// One outgoing call: endpoint path, method, query and an already-encoded body.
#[derive(Debug, Clone)]
pub struct Request {
    path: String,
    method: Method,
    query: QueryParams,
    body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(path: &str, method: Method) -> Self {
        Self {
            path: path.to_string(),
            method,
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(path, Method::GET)
    }

    /// POST with `body` encoded as JSON.
    pub fn post_json<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Self> {
        let body = serde_json::to_vec(body).map_err(JupiterError::Serialize)?;
        Ok(Self {
            body: Some(body),
            ..Self::new(path, Method::POST)
        })
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn into_body(self) -> Option<Vec<u8>> {
        self.body
    }
}
