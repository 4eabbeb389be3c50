use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_token;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (email, password) = require_credentials(&req)?;

    if !is_valid_email(email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let hashed = hash_password(password)?;
    let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
        .bind(email)
        .bind(&hashed)
        .execute(&state.db)
        .await?;
    let user_id = result.last_insert_id();

    info!("Registered new account {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Account created successfully",
            "user": { "id": user_id, "email": email }
        })),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<Value>, AppError> {
    let (email, password) = require_credentials(&req)?;

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(&state.db)
        .await?;
    // Same answer for unknown email and wrong password.
    let user = user.ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    if !verify_password(password, &user.password)? {
        return Err(AppError::Unauthorized("User not found".to_string()));
    }

    let token = issue_token(user.user_id, &user.email, &state.config.jwt_secret)?;

    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
        "user": { "id": user.user_id, "email": user.email }
    })))
}

/// GET /api/auth/login
/// Method hint for anyone poking the endpoint from a browser.
pub async fn handle_login_method_hint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": "Method not allowed",
            "message": "Login endpoint only accepts POST requests. Use POST /api/auth/login with email and password in the request body."
        })),
    )
}

fn require_credentials(req: &Credentials) -> Result<(&str, &str), AppError> {
    match (req.email.as_deref(), req.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok((email, password))
        }
        _ => Err(AppError::Validation(
            "Email and password are required".to_string(),
        )),
    }
}

/// Same shape as the classic `^[^\s@]+@[^\s@]+\.[^\s@]+$` check: a local
/// part, an `@`, and a domain whose last dot separates two non-empty halves,
/// with no whitespace or extra `@` anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        assert!(is_valid_email("student@example.com"));
        assert!(is_valid_email("first.last@sub.domain.edu"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced user@example.com"));
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let req = Credentials {
            email: Some("student@example.com".to_string()),
            password: None,
        };
        assert!(require_credentials(&req).is_err());

        let req = Credentials {
            email: Some(String::new()),
            password: Some("pw".to_string()),
        };
        assert!(require_credentials(&req).is_err());
    }
}
