use serde::Deserialize;

// Login page query
#[derive(Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

// Login form submission
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
    pub next: Option<String>,
}
