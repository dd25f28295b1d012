//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::http::{ApiError, ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
    seen: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub(crate) fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, error: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.seen.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.seen.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}
