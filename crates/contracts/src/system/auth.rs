use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role as stored by the backend (`user_role` field).
///
/// Unknown role strings deserialize as `Customer` so that a new backend role
/// never grants admin UI by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Staff,
    Admin,
    Manager,
    SuperAdmin,
    #[serde(other)]
    Customer,
}

impl UserRole {
    /// All roles selectable in the admin client form, in display order.
    pub const ALL: [UserRole; 5] = [
        UserRole::Customer,
        UserRole::Staff,
        UserRole::Admin,
        UserRole::Manager,
        UserRole::SuperAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "CUSTOMER",
            UserRole::Staff => "STAFF",
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Staff => "Staff",
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::SuperAdmin => "Super Admin",
        }
    }
}

/// Coarse capability class derived from [`UserRole`].
///
/// Drives both the navigation tree and the client-form variant. The absent /
/// unauthenticated case always classifies as `Customer` (fail closed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleClass {
    AdminLike,
    Customer,
}

impl RoleClass {
    pub fn classify(role: Option<&UserRole>) -> RoleClass {
        match role {
            Some(UserRole::Admin)
            | Some(UserRole::Manager)
            | Some(UserRole::Staff)
            | Some(UserRole::SuperAdmin) => RoleClass::AdminLike,
            Some(UserRole::Customer) | None => RoleClass::Customer,
        }
    }

    pub fn is_admin_like(&self) -> bool {
        matches!(self, RoleClass::AdminLike)
    }
}

/// Authenticated user as returned by the auth endpoints and persisted in
/// browser storage under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    pub user_role: UserRole,
    #[serde(default)]
    pub shipping_mark: Option<String>,
    #[serde(default)]
    pub is_admin_user: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl UserInfo {
    pub fn role_class(&self) -> RoleClass {
        RoleClass::classify(Some(&self.user_role))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Access/refresh token pair issued on login and signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub tokens: AuthTokens,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_like_roles_classify_as_admin() {
        for role in [
            UserRole::Admin,
            UserRole::Manager,
            UserRole::Staff,
            UserRole::SuperAdmin,
        ] {
            assert_eq!(RoleClass::classify(Some(&role)), RoleClass::AdminLike);
        }
    }

    #[test]
    fn customer_and_absent_classify_as_customer() {
        assert_eq!(
            RoleClass::classify(Some(&UserRole::Customer)),
            RoleClass::Customer
        );
        assert_eq!(RoleClass::classify(None), RoleClass::Customer);
    }

    #[test]
    fn role_round_trips_backend_strings() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"SUPER_ADMIN\"");
        let role: UserRole = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, UserRole::Manager);
    }

    #[test]
    fn unknown_role_string_falls_back_to_customer() {
        let role: UserRole = serde_json::from_str("\"AUDITOR\"").unwrap();
        assert_eq!(role, UserRole::Customer);
    }
}
