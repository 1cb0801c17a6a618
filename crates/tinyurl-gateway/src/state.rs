use std::sync::Arc;

use tinyurl_core::{Redirector, Shortener};

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    public_origin: Option<String>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, redirector: Arc<dyn Redirector>) -> Self {
        Self {
            shortener,
            redirector,
            public_origin: None,
        }
    }

    /// Origin used to compose tiny URLs when a create request carries no
    /// `Origin` header.
    pub fn with_public_origin(mut self, public_origin: impl Into<String>) -> Self {
        self.public_origin = Some(public_origin.into());
        self
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn public_origin(&self) -> Option<&str> {
        self.public_origin.as_deref()
    }
}
