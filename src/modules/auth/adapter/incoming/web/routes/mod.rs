mod login;
mod logout;
mod session;

pub use login::{__path_login_admin_handler, login_admin_handler, LoginRequestDto, LoginResponse};
pub use logout::{__path_logout_admin_handler, logout_admin_handler, LogoutResponse};
pub use session::{__path_current_session_handler, current_session_handler, SessionResponse};
