pub mod blogs;
pub mod health;
pub mod users;

use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde_json::json;

use crate::presentation::middleware::RequestId;

pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "unknown endpoint" }))
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
