pub mod authorize_admin;
pub mod bootstrap_admin;
pub mod login_admin;
pub mod logout_admin;
