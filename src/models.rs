//! User entity and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-generated identifier, immutable once assigned
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Set by the store at insertion time
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/users`.
///
/// Fields are optional so that missing keys reach validation and produce a
/// 400 with a meaningful message instead of an extractor rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Validate that both fields are present and non-empty
    pub fn validate(&self) -> std::result::Result<(String, String), String> {
        match (&self.name, &self.email) {
            (Some(name), Some(email))
                if !name.trim().is_empty() && !email.trim().is_empty() =>
            {
                Ok((name.clone(), email.clone()))
            }
            _ => Err("Name and email are required".to_string()),
        }
    }
}

/// Body of a successful `POST /api/users`
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Confirmation body for `DELETE /api/users/:id`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status literal, always "healthy"
    pub status: String,
    /// ISO-8601 timestamp of the probe
    pub timestamp: String,
    /// Process uptime in seconds
    pub uptime: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_validate_accepts_non_empty_fields() {
        let (name, email) = request(Some("Ada"), Some("ada@example.com"))
            .validate()
            .unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(email, "ada@example.com");
    }

    #[test]
    fn test_validate_rejects_missing_email() {
        assert!(request(Some("Ada"), None).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = request(Some(""), Some("ada@example.com"))
            .validate()
            .unwrap_err();
        assert_eq!(err, "Name and email are required");
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        assert!(request(Some("  "), Some("ada@example.com")).validate().is_err());
    }

    #[test]
    fn test_user_serializes_with_rfc3339_timestamp() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: "2026-01-02T03:04:05Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["created_at"], "2026-01-02T03:04:05Z");
    }

    #[test]
    fn test_create_request_tolerates_absent_keys() {
        let request: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }
}
