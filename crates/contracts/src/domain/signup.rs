//! Wire contracts and validation for the two-step signup flow.
//!
//! The first screen collects a [`SignupDraft`] without touching the network;
//! the second screen negotiates a unique shipping mark with the backend and
//! submits the draft together with the chosen mark.

use serde::{Deserialize, Serialize};

use super::clients::{Region, UserType};
use crate::system::auth::{AuthTokens, UserInfo};

/// Distinguished error code returned when the chosen mark was taken by a
/// concurrent signup. Treated as a recoverable race, not a failure.
pub const SHIPPING_MARK_TAKEN: &str = "shipping_mark_taken";

/// Not-yet-submitted signup form data, carried between the two signup
/// screens. Never persisted; the selection screen redirects back to the form
/// when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub region: Option<Region>,
    pub user_type: UserType,
    pub password: String,
    pub confirm_password: String,
}

impl Default for SignupDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            nickname: None,
            company_name: None,
            email: String::new(),
            phone: String::new(),
            region: None,
            user_type: UserType::Individual,
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

/// A single field-level validation failure, rendered under its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validate a draft before it is handed to the shipping-mark screen.
///
/// Mirrors the backend's registration rules so that most rejections happen
/// before any network call: min-length names, well-formed email, phone length,
/// mandatory region, password policy (8+ chars, an uppercase letter and a
/// digit) and password/confirmation equality.
pub fn validate_draft(draft: &SignupDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.first_name.trim().len() < 2 {
        errors.push(FieldError::new(
            "first_name",
            "First name must be at least 2 characters",
        ));
    }
    if draft.last_name.trim().len() < 2 {
        errors.push(FieldError::new(
            "last_name",
            "Last name must be at least 2 characters",
        ));
    }
    if !is_valid_email(&draft.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if draft.phone.trim().len() < 10 {
        errors.push(FieldError::new(
            "phone",
            "Phone number must be at least 10 digits",
        ));
    }
    if draft.region.is_none() {
        errors.push(FieldError::new("region", "Please select your region"));
    }
    if draft.password.len() < 8 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    } else {
        if !draft.password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push(FieldError::new(
                "password",
                "Password must contain at least one uppercase letter",
            ));
        }
        if !draft.password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new(
                "password",
                "Password must contain at least one number",
            ));
        }
    }
    if draft.password != draft.confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords don't match"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Payload for `POST /api/auth/generate-shipping-marks/`.
///
/// Optional draft fields are sent as empty strings, matching what the
/// generator expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMarksRequest {
    pub first_name: String,
    pub last_name: String,
    pub region: Region,
    pub email: String,
    pub company_name: String,
    pub nickname: String,
}

impl GenerateMarksRequest {
    pub fn from_draft(draft: &SignupDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            region: draft.region.unwrap_or_default(),
            email: draft.email.clone(),
            company_name: draft.company_name.clone().unwrap_or_default(),
            nickname: draft.nickname.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMarksResponse {
    pub success: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for `POST /api/auth/signup/with-shipping-mark/`: the full draft
/// plus the mark the user picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupWithMarkRequest {
    #[serde(flatten)]
    pub draft: SignupDraft,
    pub shipping_mark: String,
}

impl SignupWithMarkRequest {
    pub fn new(draft: SignupDraft, shipping_mark: String) -> Self {
        Self {
            draft,
            shipping_mark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupData {
    pub user: UserInfo,
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupWithMarkResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<SignupData>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SignupWithMarkResponse {
    pub fn is_mark_taken(&self) -> bool {
        self.error.as_deref() == Some(SHIPPING_MARK_TAKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SignupDraft {
        SignupDraft {
            first_name: "John".into(),
            last_name: "Mensah".into(),
            email: "john@example.com".into(),
            phone: "+233501234567".into(),
            region: Some(Region::Ashanti),
            password: "Secret123".into(),
            confirm_password: "Secret123".into(),
            ..SignupDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn short_names_and_phone_are_rejected() {
        let draft = SignupDraft {
            first_name: "J".into(),
            phone: "12345".into(),
            ..valid_draft()
        };
        let errors = validate_draft(&draft).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"first_name"));
        assert!(fields.contains(&"phone"));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["", "plain", "no-at.example.com", "a@", "@example.com", "a@b"] {
            let draft = SignupDraft {
                email: bad.into(),
                ..valid_draft()
            };
            assert!(validate_draft(&draft).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn password_policy_is_enforced() {
        let cases = [
            ("short1A", "too short"),
            ("lowercase1", "no uppercase"),
            ("NoDigitsHere", "no digit"),
        ];
        for (password, why) in cases {
            let draft = SignupDraft {
                password: password.into(),
                confirm_password: password.into(),
                ..valid_draft()
            };
            assert!(validate_draft(&draft).is_err(), "accepted: {}", why);
        }
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let draft = SignupDraft {
            confirm_password: "Different1".into(),
            ..valid_draft()
        };
        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "confirm_password"));
    }

    #[test]
    fn missing_region_is_rejected() {
        let draft = SignupDraft {
            region: None,
            ..valid_draft()
        };
        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "region"));
    }

    #[test]
    fn generate_request_fills_optionals_with_empty_strings() {
        let req = GenerateMarksRequest::from_draft(&valid_draft());
        assert_eq!(req.company_name, "");
        assert_eq!(req.nickname, "");
        assert_eq!(req.region, Region::Ashanti);
    }

    #[test]
    fn mark_taken_error_code_is_distinguished() {
        let resp: SignupWithMarkResponse = serde_json::from_str(
            r#"{"success": false, "error": "shipping_mark_taken"}"#,
        )
        .unwrap();
        assert!(resp.is_mark_taken());

        let other: SignupWithMarkResponse =
            serde_json::from_str(r#"{"success": false, "message": "boom"}"#).unwrap();
        assert!(!other.is_mark_taken());
    }

    #[test]
    fn signup_request_flattens_draft_fields() {
        let req = SignupWithMarkRequest::new(valid_draft(), "JOHN1".into());
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["first_name"], "John");
        assert_eq!(value["shipping_mark"], "JOHN1");
        assert_eq!(value["region"], "ASHANTI");
    }
}
