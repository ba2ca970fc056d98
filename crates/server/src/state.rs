use std::sync::Arc;

use service::singers::SingerService;

/// Shared router state; cloned per request, the service itself is behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub singers: Arc<SingerService>,
}

impl ServerState {
    pub fn new(singers: SingerService) -> Self {
        Self { singers: Arc::new(singers) }
    }
}
