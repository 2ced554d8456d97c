// In-memory transport for exercising client flows without a browser.
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::client::ApiClient;
use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, Method, Transport};

pub const TEST_BASE_URL: &str = "http://backend.test";

type Reply = Result<HttpResponse, ApiError>;

#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    replies: Rc<RefCell<HashMap<(Method, String), VecDeque<Reply>>>>,
}

impl RecordingTransport {
    /// Queues a reply for `method path`. Multiple replies for the same route
    /// are served in order; the last one repeats.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Err(ApiError::Network(message.to_string())));
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// `(method, path)` of every request, in send order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| (r.method, path_of(&r.url)))
            .collect()
    }

    pub fn body_of(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.borrow();
        let body = requests[index].body.as_deref().unwrap_or("null");
        serde_json::from_str(body).unwrap()
    }
}

fn path_of(url: &str) -> String {
    url.strip_prefix(TEST_BASE_URL).unwrap_or(url).to_string()
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = (request.method, path_of(&request.url));
        self.requests.borrow_mut().push(request);

        let mut replies = self.replies.borrow_mut();
        match replies.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue.front().cloned().unwrap(),
            _ => Ok(HttpResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            }),
        }
    }
}

pub fn client(transport: &RecordingTransport) -> ApiClient<RecordingTransport> {
    ApiClient::with_transport(TEST_BASE_URL, transport.clone())
}
