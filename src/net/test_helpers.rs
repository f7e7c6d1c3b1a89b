//! Scripted `Transport` used by unit tests across modules.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{Value, json};

use super::api::Transport;
use crate::error::ApiError;

/// One request observed by [`MockTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// Replays queued replies in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<Value, ApiError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(replies: Vec<Result<Value, ApiError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next_reply(&self) -> Result<Value, ApiError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn post_json(&self, path: &str, body: Value, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "POST",
            path: path.to_owned(),
            query: Vec::new(),
            body: Some(body),
            bearer: bearer.map(str::to_owned),
        });
        self.next_reply()
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)], bearer: Option<&str>) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "GET",
            path: path.to_owned(),
            query: query.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect(),
            body: None,
            bearer: bearer.map(str::to_owned),
        });
        self.next_reply()
    }
}

/// Transport whose single reply is held back until the test releases it.
pub struct GatedTransport {
    gate: RefCell<Option<oneshot::Receiver<Result<Value, ApiError>>>>,
}

impl GatedTransport {
    /// The transport plus the sender that releases its reply.
    pub fn new() -> (Self, oneshot::Sender<Result<Value, ApiError>>) {
        let (tx, rx) = oneshot::channel();
        (Self { gate: RefCell::new(Some(rx)) }, tx)
    }

    async fn wait(&self) -> Result<Value, ApiError> {
        let Some(rx) = self.gate.borrow_mut().take() else {
            return Err(ApiError::Network("gate already used".to_owned()));
        };
        rx.await.unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_owned())))
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn post_json(&self, _path: &str, _body: Value, _bearer: Option<&str>) -> Result<Value, ApiError> {
        self.wait().await
    }

    async fn get_json(&self, _path: &str, _query: &[(&str, &str)], _bearer: Option<&str>) -> Result<Value, ApiError> {
        self.wait().await
    }
}

/// Backend reply for a successful login/register.
pub fn auth_reply(token: &str, email: &str, first: &str, last: &str) -> Value {
    json!({ "token": token, "email": email, "firstName": first, "lastName": last })
}

/// Backend rejection carrying an `{error}` body.
pub fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Status { status, message: Some(message.to_owned()) }
}
