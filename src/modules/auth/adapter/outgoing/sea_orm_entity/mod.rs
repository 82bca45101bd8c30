pub mod admin_users;
pub mod user_roles;
