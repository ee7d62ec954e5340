use contracts::domain::clients::{ClientPatchRequest, ClientSummary, RegisterClientRequest};
use contracts::domain::signup::{
    GenerateMarksRequest, GenerateMarksResponse, SignupWithMarkRequest, SignupWithMarkResponse,
};
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

/// A failed request whose body may carry a field-keyed validation map.
///
/// `body` is `None` for transport errors and unparsable responses; callers
/// turn it into a human-readable message via
/// `contracts::domain::clients::format_field_errors`.
#[derive(Debug, Clone)]
pub struct RequestFailure {
    pub message: String,
    pub body: Option<serde_json::Value>,
}

impl RequestFailure {
    fn transport(message: String) -> Self {
        Self {
            message,
            body: None,
        }
    }
}

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Login with phone and password
pub async fn login(phone: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { phone, password };

    let response = Request::post(&format!("{}/api/auth/login/", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a client account via the public register endpoint.
///
/// Returns the raw response body so callers can extract the created id from
/// either envelope shape; a non-2xx response surfaces the body for
/// field-error parsing.
pub async fn register_client(
    request: &RegisterClientRequest,
) -> Result<serde_json::Value, RequestFailure> {
    let response = Request::post(&format!("{}/api/auth/register/", api_base()))
        .json(request)
        .map_err(|e| RequestFailure::transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| RequestFailure::transport(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(RequestFailure {
            message: format!("Registration failed: {}", status),
            body,
        });
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| RequestFailure::transport(format!("Failed to parse response: {}", e)))
}

/// Best-effort admin PATCH that stores the shipping mark and marks the
/// account verified. Callers treat failure as non-fatal.
pub async fn patch_client(id: i64, request: &ClientPatchRequest) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::patch(&format!("{}/api/auth/admin/clients/{}/", api_base(), id))
        .header("Authorization", &auth_header)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update client: {}", response.status()));
    }

    Ok(())
}

/// Fetch the admin clients list
pub async fn fetch_clients() -> Result<Vec<ClientSummary>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/auth/admin/clients/", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch clients: {}", response.status()));
    }

    response
        .json::<Vec<ClientSummary>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Request a fresh set of shipping-mark suggestions for a draft.
pub async fn generate_shipping_marks(
    request: &GenerateMarksRequest,
) -> Result<GenerateMarksResponse, String> {
    let response = Request::post(&format!("{}/api/auth/generate-shipping-marks/", api_base()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to generate shipping marks: {}",
            response.status()
        ));
    }

    response
        .json::<GenerateMarksResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit the full signup draft together with the chosen shipping mark.
///
/// Business failures (including the mark-taken race) come back inside the
/// response envelope, so non-2xx statuses are parsed the same way.
pub async fn signup_with_shipping_mark(
    request: &SignupWithMarkRequest,
) -> Result<SignupWithMarkResponse, String> {
    let response = Request::post(&format!(
        "{}/api/auth/signup/with-shipping-mark/",
        api_base()
    ))
    .json(request)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<SignupWithMarkResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
