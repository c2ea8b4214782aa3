use gloo_net::http::Request;

use crate::models::{LoginEntity, LoginRequest, LoginResponse};
use crate::utils::BACKEND_URL;

/// Comprueba las credenciales contra el backend.
/// `Ok(false)` = credenciales rechazadas; `Err` = el propio servicio falló
/// (red caída, error del servidor), que el flujo trata como categoría aparte.
pub async fn is_valid_login(entity: &LoginEntity) -> Result<bool, String> {
    let url = format!("{}/login", BACKEND_URL);
    let request_body = LoginRequest {
        login: entity.login.clone(),
        password: entity.password.clone(),
    };

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    // 401 es un rechazo limpio, no un error de transporte
    if response.status() == 401 {
        return Ok(false);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let login_response = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(login_response.success)
}
