//! User types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Harbor user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    /// Only sent when creating a user; Harbor never returns it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub realname: String,
    pub comment: String,
    pub deleted: bool,
    #[serde(rename = "role_name")]
    pub rolename: String,
    #[serde(rename = "role_id")]
    pub role: i64,
    pub has_admin_role: bool,
    pub reset_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Payload for toggling the system administrator flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRole {
    /// 1 grants administrator rights, 0 revokes them.
    pub has_admin_role: i32,
}

/// Payload for changing a password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePassword {
    pub old_password: String,
    pub new_password: String,
}

impl std::fmt::Debug for UpdatePassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UpdatePassword { .. }")
    }
}
