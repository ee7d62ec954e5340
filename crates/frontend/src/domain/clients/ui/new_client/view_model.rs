use std::rc::Rc;

use contracts::domain::clients::{
    created_client_id, created_client_record, format_field_errors, RegisterClientRequest, Region,
    UserType,
};
use contracts::system::auth::{RoleClass, UserRole};
use leptos::prelude::*;

use super::model;
use crate::shared::notify::Notifier;
use crate::system::auth::api::RequestFailure;

/// Password assigned to accounts created through the simplified admin form.
/// Inherited backend policy: such accounts are provisioned verified with a
/// known password the operator hands to the client.
pub const ADMIN_DEFAULT_PASSWORD: &str = "MeridianCargo1";

/// Which field set the dialog renders. Chosen once when the dialog opens,
/// never re-evaluated mid-edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Reduced field set for admin-like operators: names, shipping mark,
    /// phone mandatory; email optional; credentials fixed to defaults.
    Admin,
    /// Full field set with explicit role, flags and credentials.
    Full,
}

impl FormVariant {
    pub fn for_role(class: RoleClass) -> FormVariant {
        match class {
            RoleClass::AdminLike => FormVariant::Admin,
            RoleClass::Customer => FormVariant::Full,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientFormData {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub company_name: String,
    pub shipping_mark: String,
    pub email: String,
    pub phone: String,
    pub region: Option<Region>,
    pub user_type: UserType,
    pub user_role: UserRole,
    pub is_active: bool,
    pub is_verified: bool,
    pub password: String,
    pub confirm_password: String,
    pub notes: String,
}

impl ClientFormData {
    /// Variant-aware defaults: the admin variant pins credentials and
    /// verification so they are not user-editable.
    pub fn defaults(variant: FormVariant) -> Self {
        let admin = variant == FormVariant::Admin;
        Self {
            first_name: String::new(),
            last_name: String::new(),
            nickname: String::new(),
            company_name: String::new(),
            shipping_mark: String::new(),
            email: String::new(),
            phone: String::new(),
            region: None,
            user_type: UserType::Individual,
            user_role: UserRole::Customer,
            is_active: true,
            is_verified: admin,
            password: if admin {
                ADMIN_DEFAULT_PASSWORD.to_string()
            } else {
                String::new()
            },
            confirm_password: if admin {
                ADMIN_DEFAULT_PASSWORD.to_string()
            } else {
                String::new()
            },
            notes: String::new(),
        }
    }

    /// Local precondition checked before any network call.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Labels of mandatory fields still empty, in display order. Submission
    /// is blocked locally while any remain.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("First name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("Last name");
        }
        if self.shipping_mark.trim().is_empty() {
            missing.push("Shipping mark");
        }
        if self.phone.trim().is_empty() {
            missing.push("Phone");
        }
        if self.password.is_empty() {
            missing.push("Password");
        }
        missing
    }

    /// Build the outgoing register payload, applying the endpoint's required
    /// defaults for fields the reduced form leaves unset. `nickname` and
    /// `notes` are dialog-local; the register endpoint has no fields for
    /// them.
    pub fn to_register_request(&self) -> RegisterClientRequest {
        RegisterClientRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company_name: self.company_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            region: self.region.unwrap_or_default(),
            user_type: self.user_type,
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            shipping_mark: self.shipping_mark.clone(),
            user_role: self.user_role,
            is_active: self.is_active,
            is_verified: self.is_verified,
        }
    }
}

/// The id to PATCH after creation, if a follow-up write is warranted: the
/// register endpoint may ignore the shipping mark, so a non-empty mark plus a
/// created id means one best-effort patch.
pub fn patch_target(body: &serde_json::Value, shipping_mark: &str) -> Option<i64> {
    if shipping_mark.is_empty() {
        return None;
    }
    created_client_id(body)
}

/// Human-readable message for a failed creation attempt.
pub fn failure_message(failure: &RequestFailure) -> String {
    match &failure.body {
        Some(body) => format_field_errors(Some(body)),
        None => failure.message.clone(),
    }
}

/// ViewModel for the New Client dialog. Cheap to copy: both signals are
/// arena handles.
#[derive(Clone, Copy)]
pub struct NewClientViewModel {
    pub variant: FormVariant,
    pub form: RwSignal<ClientFormData>,
    pub submitting: RwSignal<bool>,
}

impl NewClientViewModel {
    pub fn new(class: RoleClass) -> Self {
        let variant = FormVariant::for_role(class);
        Self {
            variant,
            form: RwSignal::new(ClientFormData::defaults(variant)),
            submitting: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.form.set(ClientFormData::defaults(self.variant));
    }

    /// Submit the form: register, then best-effort patch of the shipping
    /// mark. Failure of the patch is surfaced as a partial success and does
    /// not fail the creation.
    pub fn submit(
        &self,
        notifier: Notifier,
        on_created: Rc<dyn Fn(Option<serde_json::Value>)>,
        on_close: Rc<dyn Fn()>,
    ) {
        let this = self.clone();
        let form = this.form.get_untracked();

        let missing = form.missing_required();
        if !missing.is_empty() {
            notifier.error(
                "Missing Information",
                &format!("Please fill in: {}", missing.join(", ")),
            );
            return;
        }

        if !form.passwords_match() {
            notifier.error("Password mismatch", "Password and confirmation do not match");
            return;
        }

        if this.submitting.get_untracked() {
            return;
        }
        this.submitting.set(true);

        leptos::task::spawn_local(async move {
            let request = form.to_register_request();
            let result = model::register_client(&request).await;
            this.submitting.set(false);

            let body = match result {
                Ok(body) => body,
                Err(failure) => {
                    // Form state is preserved for another attempt.
                    notifier.error("Create Failed", &failure_message(&failure));
                    return;
                }
            };

            if let Some(id) = patch_target(&body, &form.shipping_mark) {
                if let Err(e) = model::patch_client(id, form.shipping_mark.clone()).await {
                    log::warn!("failed to set shipping mark via admin update: {}", e);
                    notifier.warning(
                        "Partial Success",
                        "Client created but failed to set shipping mark automatically.",
                    );
                }
            }

            notifier.success(
                "Client Created",
                &format!(
                    "New client {} {} has been added successfully.",
                    form.first_name, form.last_name
                ),
            );

            this.reset();
            on_close();
            // Always invoked, whatever the response shape, so the caller's
            // list view can refresh.
            on_created(created_client_record(&body));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mismatched_passwords_fail_the_local_precheck() {
        let mut form = ClientFormData::defaults(FormVariant::Full);
        form.password = "A".into();
        form.confirm_password = "B".into();
        assert!(!form.passwords_match());
    }

    #[test]
    fn admin_defaults_pin_credentials_and_verification() {
        let form = ClientFormData::defaults(FormVariant::Admin);
        assert_eq!(form.password, ADMIN_DEFAULT_PASSWORD);
        assert_eq!(form.confirm_password, ADMIN_DEFAULT_PASSWORD);
        assert!(form.is_verified);
        assert!(form.passwords_match());

        let full = ClientFormData::defaults(FormVariant::Full);
        assert!(full.password.is_empty());
        assert!(!full.is_verified);
    }

    #[test]
    fn empty_mandatory_fields_block_submission_locally() {
        let form = ClientFormData::defaults(FormVariant::Admin);
        assert_eq!(
            form.missing_required(),
            ["First name", "Last name", "Shipping mark", "Phone"]
        );

        let mut filled = form.clone();
        filled.first_name = "Ama".into();
        filled.last_name = "Mensah".into();
        filled.shipping_mark = "PM 001 AMA".into();
        filled.phone = "0501234567".into();
        assert!(filled.missing_required().is_empty());

        // The full variant starts with empty credentials, so the password
        // counts as missing too.
        let full = ClientFormData::defaults(FormVariant::Full);
        assert!(full.missing_required().contains(&"Password"));
    }

    #[test]
    fn nickname_and_notes_stay_off_the_wire() {
        let mut form = ClientFormData::defaults(FormVariant::Full);
        form.first_name = "Ama".into();
        form.last_name = "Mensah".into();
        let bare = serde_json::to_value(form.to_register_request()).unwrap();

        form.nickname = "Auntie Ama".into();
        form.notes = "Prefers pickup at Tema".into();
        let annotated = serde_json::to_value(form.to_register_request()).unwrap();

        assert_eq!(bare, annotated);
        assert!(annotated.get("nickname").is_none());
        assert!(annotated.get("notes").is_none());
    }

    #[test]
    fn register_payload_defaults_region_and_user_type() {
        let mut form = ClientFormData::defaults(FormVariant::Admin);
        form.shipping_mark = "ABC-1".into();
        let request = form.to_register_request();
        assert_eq!(request.region, Region::GreaterAccra);
        assert_eq!(request.user_type, UserType::Individual);
        assert_eq!(request.shipping_mark, "ABC-1");
    }

    #[test]
    fn patch_is_planned_only_with_id_and_mark() {
        let body = json!({"data": {"user": {"id": 42}}});
        assert_eq!(patch_target(&body, "ABC-1"), Some(42));
        assert_eq!(patch_target(&body, ""), None);

        let no_id = json!({"success": true});
        assert_eq!(patch_target(&no_id, "ABC-1"), None);
    }

    #[test]
    fn failure_message_prefers_field_errors_over_status_text() {
        let failure = RequestFailure {
            message: "Registration failed: 400".into(),
            body: Some(json!({"phone": ["already registered"]})),
        };
        assert_eq!(failure_message(&failure), "phone: already registered");

        let transport = RequestFailure {
            message: "Failed to send request: timeout".into(),
            body: None,
        };
        assert_eq!(failure_message(&transport), "Failed to send request: timeout");
    }
}
