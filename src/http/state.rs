//! Application state for the HTTP server.

use std::sync::Arc;

use crate::engine::Engine;

/// Shared state handed to every handler. The engine is immutable and
/// lock-free; cloning the state clones an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}
