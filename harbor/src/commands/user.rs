use super::{CommandOutput, render};
use crate::context::AppContext;
use crate::format::{Formattable, format_timestamp, table};
use libharbor::models::User;
use tabled::Tabled;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "USERNAME")]
    username: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "ADMIN")]
    admin: &'static str,
    #[tabled(rename = "CREATED")]
    created: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            admin: if user.has_admin_role { "yes" } else { "no" },
            created: format_timestamp(user.creation_time.as_ref()),
        }
    }
}

impl Formattable for User {
    fn format_pretty(&self) -> String {
        let mut lines = vec![
            format!("ID:        {}", self.user_id),
            format!("Username:  {}", self.username),
            format!("Email:     {}", self.email),
            format!("Real name: {}", self.realname),
            format!("Admin:     {}", self.has_admin_role),
        ];
        if !self.rolename.is_empty() {
            lines.push(format!("Role:      {}", self.rolename));
        }
        lines.push(format!(
            "Created:   {}",
            format_timestamp(self.creation_time.as_ref())
        ));
        lines.join("\n")
    }
}

impl Formattable for Vec<User> {
    fn format_pretty(&self) -> String {
        table(self.iter().map(UserRow::from).collect(), "No users found.")
    }
}

/// Show the authenticated user
pub fn handle_user_current(ctx: &AppContext) -> CommandOutput {
    render(ctx.harbor.users().current(), ctx.format)
}

/// List all users
pub fn handle_user_list(ctx: &AppContext) -> CommandOutput {
    render(ctx.harbor.users().list(), ctx.format)
}

/// Show one user
pub fn handle_user_get(ctx: &AppContext, id: i64) -> CommandOutput {
    render(ctx.harbor.users().get(id), ctx.format)
}
