//! Every path and method answers with the current local time

use axum::{response::IntoResponse, Router};
use chrono::Local;

/// `strftime` pattern for the reported time, e.g. `2024-05-01 13:45:09`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn create_router() -> Router {
    Router::new().fallback(handle_time)
}

async fn handle_time() -> impl IntoResponse {
    let now = Local::now();
    format!(
        "Hello GCR Test!\nThe local time now is: {}",
        now.format(TIME_FORMAT)
    )
}
