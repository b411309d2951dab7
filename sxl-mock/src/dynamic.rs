use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use sxl_core::{FetchError, SxlConnector};

/// Instruction for how a fetch should behave for a given URL.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(FetchError),
    /// Hang indefinitely (simulate a stalled connection).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior<Value>>,
    requests: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for fetches of `url`.
    pub async fn set_behavior(&self, url: impl Into<String>, behavior: MockBehavior<Value>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(url.into(), behavior);
    }

    /// Shorthand for `set_behavior(url, MockBehavior::Return(doc))`.
    pub async fn respond(&self, url: impl Into<String>, doc: Value) {
        self.set_behavior(url, MockBehavior::Return(doc)).await;
    }

    /// Shorthand for a non-success HTTP status on `url`.
    pub async fn fail_with_status(&self, url: impl Into<String>, status: u16, reason: &str) {
        let url = url.into();
        let err = FetchError::status(status, reason, url.clone());
        self.set_behavior(url, MockBehavior::Fail(err)).await;
    }

    /// URLs requested so far, in call order.
    pub async fn requests(&self) -> Vec<String> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// URLs without a configured behavior answer `404 Not Found`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SxlConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SxlConnector>, controller)
    }
}

#[async_trait]
impl SxlConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        // Log and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(url.to_string());
            guard.rules.get(url).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(doc)) => Ok(doc),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(FetchError::status(404, "Not Found", url)),
        }
    }
}
