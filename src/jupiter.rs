use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::context::Context;
use crate::error::{ApiError, JupiterError, Result};
use crate::rate_limit::RateLimiter;
use crate::request::Request;

/// Decoded body together with the response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// Client for the Jupiter API. Share one instance between tasks (e.g. in an
/// `Arc`); its rate limiter paces every call made through it.
pub struct JupiterApi {
    api_url: String,
    api_key: String,
    limiter: RateLimiter,
    client: reqwest::Client,
}

impl std::fmt::Debug for JupiterApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JupiterApi")
            .field("api_url", &self.api_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .field("rate_limit", &self.limiter.interval())
            .finish()
    }
}

impl JupiterApi {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self::with_client(api_url, api_key, reqwest::Client::new())
    }

    pub fn with_client(api_url: &str, api_key: &str, client: reqwest::Client) -> Self {
        Self {
            api_url: crate::utils::remove_trailing_slash(api_url),
            api_key: api_key.to_string(),
            limiter: RateLimiter::new(Duration::from_millis(crate::config::RATE_LIMIT_MILLISECONDS)),
            client,
        }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(JupiterError::Build)?;
        Ok(Self::with_client(&config.api_url, &config.api_key, client).with_rate_limit(config.rate_limit))
    }

    /// Replace the limiter; `Duration::ZERO` turns pacing off.
    pub fn with_rate_limit(mut self, interval: Duration) -> Self {
        self.limiter = RateLimiter::new(interval);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }

    fn resolve_url(&self, request: &Request) -> Result<Url> {
        let raw = self.url(request.path());
        let mut url = Url::parse(&raw).map_err(|source| JupiterError::InvalidUrl { url: raw, source })?;
        if !request.query().is_empty() {
            url.set_query(Some(&request.query().encode()));
        }
        Ok(url)
    }

    /// Run one request through the pipeline: rate limiter admission, dispatch,
    /// body read, status classification and JSON decoding into `T`.
    ///
    /// Statuses of 400 and above come back as [`JupiterError::Api`] with the
    /// raw body and are never decoded. Nothing is sent if `ctx` fires before
    /// admission.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: Request,
    ) -> Result<ApiResponse<T>> {
        if let Some(reason) = ctx.err() {
            return Err(JupiterError::Wait(reason));
        }
        tokio::select! {
            biased;
            reason = ctx.done() => return Err(JupiterError::Wait(reason)),
            _ = self.limiter.acquire() => {}
        }

        let url = self.resolve_url(&request)?;
        let method = request.method().clone();
        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if !self.api_key.is_empty() {
            builder = builder.header(API_KEY_HEADER, &self.api_key);
        }
        if let Some(body) = request.into_body() {
            builder = builder.body(body);
        }

        debug!(%method, %url, "dispatching request");
        let response = tokio::select! {
            biased;
            reason = ctx.done() => {
                return Err(JupiterError::Interrupted { method, url: url.to_string(), reason });
            }
            sent = builder.send() => sent.map_err(|source| JupiterError::Transport {
                method: method.clone(),
                url: url.to_string(),
                source,
            })?,
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = tokio::select! {
            biased;
            reason = ctx.done() => {
                return Err(JupiterError::Interrupted { method, url: url.to_string(), reason });
            }
            read = response.bytes() => read.map_err(|source| JupiterError::BodyRead {
                method: method.clone(),
                url: url.to_string(),
                status: status.as_u16(),
                source,
            })?,
        };
        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "response received");

        if status.as_u16() >= StatusCode::BAD_REQUEST.as_u16() {
            return Err(ApiError {
                method,
                url: url.to_string(),
                status,
                raw_body: body.to_vec(),
            }
            .into());
        }

        let data = serde_json::from_slice(&body).map_err(|source| JupiterError::Decode {
            method: method.clone(),
            url: url.to_string(),
            status: status.as_u16(),
            source,
        })?;

        Ok(ApiResponse {
            data,
            status,
            headers,
        })
    }

    /// [`execute`](Self::execute) without the response metadata.
    pub(crate) async fn call<T: DeserializeOwned>(&self, ctx: &Context, request: Request) -> Result<T> {
        Ok(self.execute(ctx, request).await?.data)
    }
}
