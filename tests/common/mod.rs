//! In-process Axum server standing in for the Jupiter API.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode},
    response::Response,
    Router,
};
use jupiter_api_rs::JupiterApi;

pub const TEST_API_KEY: &str = "test-api-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub raw_query: Option<String>,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn json(value: serde_json::Value) -> Self {
        Self::raw(StatusCode::OK, value.to_string())
    }

    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: Vec::new(),
            delay: None,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> MockReply + Send + Sync>;

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> MockReply + Send + Sync + 'static,
    {
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
        let responder: Responder = Arc::new(responder);

        let recorded = Arc::clone(&requests);
        let app = Router::new().fallback(move |req: Request| {
            let recorded = Arc::clone(&recorded);
            let responder = Arc::clone(&responder);
            async move { handle(req, recorded, responder).await }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Server that answers every request with the same JSON document.
    pub async fn json(value: serde_json::Value) -> Self {
        Self::start(move |_| MockReply::json(value.clone())).await
    }

    pub async fn error(status: StatusCode, body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| MockReply::raw(status, body.clone())).await
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("server saw no request")
    }

    /// Client with pacing disabled.
    pub fn client(&self) -> JupiterApi {
        JupiterApi::new(&self.base_url, TEST_API_KEY).with_rate_limit(Duration::ZERO)
    }
}

async fn handle(
    req: Request,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Responder,
) -> Response {
    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map(|b| b.to_vec())
        .unwrap_or_default();
    let raw_query = parts.uri.query().map(str::to_string);
    let query = raw_query
        .as_deref()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let request = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        raw_query,
        query,
        headers: parts.headers,
        body,
    };
    recorded.lock().unwrap().push(request.clone());

    let reply = responder(&request);
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let mut builder = Response::builder()
        .status(reply.status)
        .header("content-type", "application/json");
    for (name, value) in &reply.headers {
        builder = builder.header(*name, value.as_str());
    }
    builder.body(Body::from(reply.body)).unwrap()
}
