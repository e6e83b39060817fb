use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use sqlreview_sdk::{ApiRequest, ApiResponse, Confirmer, Method, Transport};

/// In-memory stand-in for the review service.
///
/// Responses are queued per `(method, path)`; the last queued response keeps
/// answering once the others are used up. Unknown routes get a 404.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use sqlreview_sdk::{Client, Method};
/// use sqlreview_testing::FakeTransport;
///
/// let fake = Arc::new(FakeTransport::new());
/// fake.on(Method::Get, "/health", 200, serde_json::json!({"status": "healthy"}));
/// let client = Client::new(fake.clone());
/// ```
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.on_raw(method, path, status, body.to_string().into_bytes())
    }

    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: Vec<u8>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(ApiResponse { status, body });
        self
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `(method, path)` of every request, in order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|(m, p)| *m == method && p == path)
            .count()
    }

    pub fn last_request(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> sqlreview_sdk::Result<ApiResponse> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        let response = match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        Ok(response.unwrap_or_else(|| ApiResponse {
            status: 404,
            body: json!({"detail": "Not Found"}).to_string().into_bytes(),
        }))
    }

    fn base_url(&self) -> &str {
        "http://fake.invalid"
    }
}

/// Answers every confirmation the same way and keeps the prompts.
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared view of the prompts, usable after the confirmer is boxed.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
