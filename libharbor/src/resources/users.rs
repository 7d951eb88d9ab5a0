//! User resource.

use crate::client::{CallResult, Method};
use crate::harbor::Harbor;
use crate::models::{UpdatePassword, UpdateRole, User};
use crate::routes::RouteParams;

const ROOT: &str = "users.root";
const BASE: &str = "users.base";
const CURRENT: &str = "users.current";
const PASSWORD: &str = "users.password";
const SYSADMIN: &str = "users.sysadmin";

pub(crate) const ROUTES: &[&str] = &[ROOT, BASE, CURRENT, PASSWORD, SYSADMIN];

fn user(id: i64) -> RouteParams {
    RouteParams::new().with("user_id", id)
}

/// Operations on users. Most require administrator rights.
pub struct UsersResource<'h> {
    harbor: &'h Harbor,
}

impl<'h> UsersResource<'h> {
    pub(crate) fn new(harbor: &'h Harbor) -> Self {
        Self { harbor }
    }

    pub fn list(&self) -> CallResult<Vec<User>> {
        self.harbor.call(Method::Get, ROOT, &RouteParams::new(), |r| r)
    }

    pub fn get(&self, id: i64) -> CallResult<User> {
        self.harbor.call(Method::Get, BASE, &user(id), |r| r)
    }

    /// Register a new user; `password` must be set.
    pub fn create(&self, new_user: &User) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Post, ROOT, &RouteParams::new(), |r| r.json(new_user))
    }

    /// Update the profile of user `id`.
    pub fn update(&self, id: i64, profile: &User) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Put, BASE, &user(id), |r| r.json(profile))
    }

    pub fn delete(&self, id: i64) -> CallResult<()> {
        self.harbor.call_unit(Method::Delete, BASE, &user(id), |r| r)
    }

    /// The user the client is authenticated as.
    pub fn current(&self) -> CallResult<User> {
        self.harbor
            .call(Method::Get, CURRENT, &RouteParams::new(), |r| r)
    }

    /// Grant or revoke system administrator rights.
    pub fn change_sysadmin(&self, id: i64, role: &UpdateRole) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Put, SYSADMIN, &user(id), |r| r.json(role))
    }

    pub fn change_password(&self, id: i64, password: &UpdatePassword) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Put, PASSWORD, &user(id), |r| r.json(password))
    }
}
