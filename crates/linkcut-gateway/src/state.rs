use std::sync::Arc;

use linkcut_redirector::Redirector;

#[derive(Clone)]
pub struct AppState {
    redirector: Arc<dyn Redirector>,
}

impl AppState {
    pub fn new(redirector: impl Redirector) -> Self {
        Self {
            redirector: Arc::new(redirector),
        }
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }
}
