//! A scripted in-memory wallet for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::VecDeque;

use serde_json::Value;

use crate::eip1193::Eip1193;
use crate::eip1193::ProviderError;

#[derive(Default)]
pub struct MockWallet {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ProviderError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next call to `method`.
    pub fn respond(self, method: &str, response: Result<Value, ProviderError>) -> Self {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }
}

impl Eip1193 for MockWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls.borrow_mut().push((method.to_string(), params));
        self.responses
            .borrow_mut()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(ProviderError::Rpc {
                    code: -32601,
                    message: format!("the method {method} does not exist/is not available"),
                })
            })
    }
}
