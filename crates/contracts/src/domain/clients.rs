//! Wire contracts for client account creation and administration.
//!
//! The register endpoint accepts the full signup payload; the admin PATCH
//! endpoint is a best-effort follow-up used to store the shipping mark when
//! the register endpoint ignores it.

use serde::{Deserialize, Serialize};

use crate::system::auth::UserRole;

/// Ghanaian regions accepted by the backend (`region` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    #[default]
    GreaterAccra,
    Ashanti,
    Western,
    Eastern,
    Central,
    Northern,
    UpperEast,
    UpperWest,
    Volta,
    Bono,
    BonoEast,
    Ahafo,
    BrongAhafo,
    Savannah,
    NorthEast,
    Oti,
    WesternNorth,
}

impl Region {
    /// Display order used by region selects, matching the backend choices.
    pub const ALL: [Region; 17] = [
        Region::GreaterAccra,
        Region::Ashanti,
        Region::Western,
        Region::Eastern,
        Region::Central,
        Region::Northern,
        Region::UpperEast,
        Region::UpperWest,
        Region::Volta,
        Region::Bono,
        Region::BonoEast,
        Region::Ahafo,
        Region::BrongAhafo,
        Region::Savannah,
        Region::NorthEast,
        Region::Oti,
        Region::WesternNorth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::GreaterAccra => "GREATER_ACCRA",
            Region::Ashanti => "ASHANTI",
            Region::Western => "WESTERN",
            Region::Eastern => "EASTERN",
            Region::Central => "CENTRAL",
            Region::Northern => "NORTHERN",
            Region::UpperEast => "UPPER_EAST",
            Region::UpperWest => "UPPER_WEST",
            Region::Volta => "VOLTA",
            Region::Bono => "BONO",
            Region::BonoEast => "BONO_EAST",
            Region::Ahafo => "AHAFO",
            Region::BrongAhafo => "BRONG_AHAFO",
            Region::Savannah => "SAVANNAH",
            Region::NorthEast => "NORTH_EAST",
            Region::Oti => "OTI",
            Region::WesternNorth => "WESTERN_NORTH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::GreaterAccra => "Greater Accra",
            Region::Ashanti => "Ashanti",
            Region::Western => "Western",
            Region::Eastern => "Eastern",
            Region::Central => "Central",
            Region::Northern => "Northern",
            Region::UpperEast => "Upper East",
            Region::UpperWest => "Upper West",
            Region::Volta => "Volta",
            Region::Bono => "Bono",
            Region::BonoEast => "Bono East",
            Region::Ahafo => "Ahafo",
            Region::BrongAhafo => "Brong Ahafo",
            Region::Savannah => "Savannah",
            Region::NorthEast => "North East",
            Region::Oti => "Oti",
            Region::WesternNorth => "Western North",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Region> {
        Region::ALL.iter().copied().find(|r| r.as_str() == value)
    }
}

/// Business classification of an account (`user_type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    #[default]
    Individual,
    Business,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Individual => "INDIVIDUAL",
            UserType::Business => "BUSINESS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Individual => "Individual",
            UserType::Business => "Business",
        }
    }
}

/// Payload for `POST /api/auth/register/`.
///
/// Carries the extended admin fields (shipping mark, role, flags) even though
/// the register endpoint may ignore them; the caller follows up with
/// [`ClientPatchRequest`] in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub region: Region,
    pub user_type: UserType,
    pub password: String,
    pub confirm_password: String,
    pub shipping_mark: String,
    pub user_role: UserRole,
    pub is_active: bool,
    pub is_verified: bool,
}

/// Best-effort payload for the admin client PATCH endpoint.
///
/// Always forces `is_verified = true`: the admin explicitly assigned the mark,
/// so the account is considered vetted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientPatchRequest {
    pub shipping_mark: String,
    pub is_verified: bool,
}

impl ClientPatchRequest {
    pub fn new(shipping_mark: String) -> Self {
        Self {
            shipping_mark,
            is_verified: true,
        }
    }
}

/// Client row as listed by the admin clients endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub shipping_mark: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Extract the created record's id from a register response body.
///
/// The endpoint has shipped two envelope shapes: `{data: {user: {id}}}` and
/// `{data: {id}}`. Both are accepted.
pub fn created_client_id(body: &serde_json::Value) -> Option<i64> {
    let data = body.get("data")?;
    data.get("user")
        .and_then(|u| u.get("id"))
        .or_else(|| data.get("id"))
        .and_then(|id| id.as_i64())
}

/// The created record handed to the dialog's `on_created` callback.
pub fn created_client_record(body: &serde_json::Value) -> Option<serde_json::Value> {
    body.get("data").cloned()
}

pub const GENERIC_CREATE_ERROR: &str = "Failed to create client";

/// Render a backend error body as a human-readable message.
///
/// A field-keyed validation map becomes `field: msg1, msg2; field2: ...`;
/// any other JSON body is stringified; a missing body yields the generic
/// fallback. Raw error objects are never shown to the user.
pub fn format_field_errors(body: Option<&serde_json::Value>) -> String {
    let Some(body) = body else {
        return GENERIC_CREATE_ERROR.to_string();
    };

    match body.as_object() {
        Some(map) if !map.is_empty() => map
            .iter()
            .map(|(field, messages)| {
                let joined = match messages {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .map(value_to_message)
                        .collect::<Vec<_>>()
                        .join(", "),
                    other => value_to_message(other),
                };
                format!("{}: {}", field, joined)
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(_) => GENERIC_CREATE_ERROR.to_string(),
        None => value_to_message(body),
    }
}

fn value_to_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn region_serializes_to_backend_strings() {
        assert_eq!(
            serde_json::to_string(&Region::GreaterAccra).unwrap(),
            "\"GREATER_ACCRA\""
        );
        assert_eq!(
            serde_json::to_string(&Region::WesternNorth).unwrap(),
            "\"WESTERN_NORTH\""
        );
        for region in Region::ALL {
            assert_eq!(Region::from_str_opt(region.as_str()), Some(region));
        }
    }

    #[test]
    fn defaults_match_register_endpoint_requirements() {
        assert_eq!(Region::default(), Region::GreaterAccra);
        assert_eq!(UserType::default(), UserType::Individual);
    }

    #[test]
    fn created_id_accepts_both_envelope_shapes() {
        let nested = json!({"data": {"user": {"id": 42}}});
        assert_eq!(created_client_id(&nested), Some(42));

        let flat = json!({"data": {"id": 7, "first_name": "Ama"}});
        assert_eq!(created_client_id(&flat), Some(7));

        let empty = json!({"success": true});
        assert_eq!(created_client_id(&empty), None);
    }

    #[test]
    fn field_error_map_renders_joined_messages() {
        let body = json!({
            "email": ["Enter a valid email address.", "This field is required."],
            "phone": ["A user with this phone already exists."],
        });
        let msg = format_field_errors(Some(&body));
        assert_eq!(
            msg,
            "email: Enter a valid email address., This field is required.; \
             phone: A user with this phone already exists."
        );
    }

    #[test]
    fn non_object_body_is_stringified() {
        let body = json!("internal server error");
        assert_eq!(format_field_errors(Some(&body)), "internal server error");
    }

    #[test]
    fn missing_body_yields_generic_message() {
        assert_eq!(format_field_errors(None), GENERIC_CREATE_ERROR);
    }
}
