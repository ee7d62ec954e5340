use contracts::domain::clients::{ClientPatchRequest, RegisterClientRequest};

use crate::system::auth::api::{self, RequestFailure};

pub async fn register_client(
    request: &RegisterClientRequest,
) -> Result<serde_json::Value, RequestFailure> {
    api::register_client(request).await
}

pub async fn patch_client(id: i64, shipping_mark: String) -> Result<(), String> {
    api::patch_client(id, &ClientPatchRequest::new(shipping_mark)).await
}
