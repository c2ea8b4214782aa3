use serde::{Deserialize, Serialize};

/// Credenciales introducidas en el formulario de login.
/// No se persisten: viven solo durante el intento de autenticación.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginEntity {
    pub login: String,
    pub password: String,
}

pub fn create_empty_login() -> LoginEntity {
    LoginEntity::default()
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
}
