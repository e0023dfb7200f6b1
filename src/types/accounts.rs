use serde::{Deserialize, Serialize};

pub const REGISTERED_MESSAGE: &str = "Користувач зареєстрований!";
pub const LOGIN_OK_MESSAGE: &str = "Успішний вхід!";
pub const LOGIN_FAILED_MESSAGE: &str = "Невірний логін або пароль!";
pub const POINTS_UPDATED_MESSAGE: &str = "Очки оновлено!";

/// Body of `POST /register` and `POST /login`.
///
/// Both fields are optional on the wire; an absent field binds SQL NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Body of `POST /add_points`. `points` is 0 when absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddPointsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub points: Option<i64>,
}

impl AddPointsRequest {
    pub fn points_or_zero(&self) -> i64 {
        self.points.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
