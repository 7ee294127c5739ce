use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub usr: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub pwd: String,
}

/// What the backend's login method answers with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackendLoginResponse {
    pub message: Option<String>,
    pub full_name: Option<String>,
    pub home_page: Option<String>,
}

impl BackendLoginResponse {
    pub fn is_logged_in(&self) -> bool {
        self.message.as_deref() == Some("Logged In")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub full_name: Option<String>,
    pub home_page: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginSuccess {
    pub success: bool,
    pub message: String,
    pub user: LoginUser,
}
