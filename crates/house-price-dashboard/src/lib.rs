//! House price dashboard.
//!
//! Serves an HTML form, forwards each submission to the prediction API as a
//! single `POST /predict` call and renders whatever comes back. Missing or
//! malformed response fields are reported as warnings instead of failing the
//! page.

mod client;
mod error;
mod form;
mod render;
mod server;
mod view;

pub use client::{ApiClient, ApiReply};
pub use error::DashboardError;
pub use form::PredictionForm;
pub use render::{Outcome, render_page};
pub use server::{DashboardServer, DashboardState, create_router};
pub use view::{PredictionView, format_currency, format_prediction_time};
