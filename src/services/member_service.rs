use gloo_net::http::Request;

use crate::models::MemberEntity;
use crate::utils::BACKEND_URL;

/// Obtiene la lista completa de miembros (solo lectura).
pub async fn fetch_all_members() -> Result<Vec<MemberEntity>, String> {
    let url = format!("{}/members", BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<MemberEntity>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
