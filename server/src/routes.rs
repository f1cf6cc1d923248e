use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::HeaderMap,
    Json,
};
use menu::MenuSection;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{error::AppError, fetch, mailer::Inquiry, state};

pub async fn menu_handler(
    State(state): State<Arc<state::State>>,
) -> Result<Json<Vec<MenuSection>>, AppError> {
    Ok(Json(fetch::menu_sections(&state).await?))
}

#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    tel: String,
    #[serde(default)]
    message: String,
    // honeypot, hidden on the form so only bots fill it
    #[serde(default)]
    company: String,
}

pub async fn contact_handler(
    State(state): State<Arc<state::State>>,
    headers: HeaderMap,
    Form(payload): Form<ContactForm>,
) -> Result<Json<Value>, AppError> {
    if !sanitize(&payload.company).is_empty() {
        return Err(AppError::Validation("Bot detected."));
    }

    if let Some(key) = client_key(&headers) {
        if !state.limiter.allow(&key).await {
            return Err(AppError::RateLimited);
        }
    }

    let inquiry = Inquiry {
        name: sanitize(&payload.name),
        email: sanitize(&payload.email),
        tel: sanitize(&payload.tel),
        message: sanitize(&payload.message),
    };

    if inquiry.name.is_empty() || inquiry.email.is_empty() || inquiry.message.is_empty() {
        return Err(AppError::Validation("Name, email, and message are required."));
    }

    if !is_valid_email(&inquiry.email) {
        return Err(AppError::Validation("Please provide a valid email address."));
    }

    state.mailer.send_inquiry(&inquiry).await?;
    info!("Dispatched contact inquiry from {}", inquiry.email);

    Ok(Json(json!({ "success": true })))
}

/// Strip control characters and angle brackets, then trim.
fn sanitize(input: &str) -> String {
    let strip = Regex::new(r"[\x00-\x1f\x7f<>]").unwrap();

    strip.replace_all(input, "").trim().to_string()
}

fn is_valid_email(email: &str) -> bool {
    let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    pattern.is_match(email)
}

/// Client address as seen through the proxy, first forwarded hop wins.
fn client_key(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
