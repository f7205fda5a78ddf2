//! Application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use house_price_protocols::PriceModel;

/// Application state shared across handlers.
///
/// Read-only after construction.
pub struct AppState {
    pub model: Arc<dyn PriceModel>,
    start_time: Instant,
}

impl AppState {
    pub fn new(model: Arc<dyn PriceModel>) -> Self {
        Self {
            model,
            start_time: Instant::now(),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}
