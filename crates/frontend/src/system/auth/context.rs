use contracts::domain::signup::SignupDraft;
use contracts::system::auth::{AuthTokens, RoleClass, UserInfo};
use leptos::prelude::*;

use super::storage;

/// Process-wide session holder, provided via context in `App`.
///
/// Mutated only by the login and signup success paths; read by every
/// role-aware view. Also carries the transient signup draft handed from the
/// signup form to the shipping-mark selection screen (never persisted).
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<UserInfo>>,
    pub signup_draft: RwSignal<Option<SignupDraft>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            signup_draft: RwSignal::new(None),
        }
    }

    /// Restore the persisted user on startup, if any.
    pub fn restore(&self) {
        if let Some(user) = storage::get_user() {
            self.user.set(Some(user));
        }
    }

    /// Install a freshly authenticated user: storage first, then the signal.
    pub fn install(&self, user: UserInfo, tokens: &AuthTokens) {
        storage::save_tokens(tokens);
        storage::save_user(&user);
        self.user.set(Some(user));
    }

    pub fn clear(&self) {
        storage::clear_session();
        self.user.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    /// Fail-closed capability class of the current user: absent or unknown
    /// roles classify as `Customer`.
    pub fn role_class(&self) -> RoleClass {
        self.user
            .with(|user| RoleClass::classify(user.as_ref().map(|u| &u.user_role)))
    }

    pub fn is_admin_like(&self) -> bool {
        self.role_class().is_admin_like()
    }
}

/// Hook to access the session from any component below `App`.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
