pub mod list_state;
pub mod use_authentication;
pub mod use_extension_preview;
pub mod use_list;
pub mod use_logout;
pub mod use_push_route;
pub mod use_require_auth;

pub use list_state::{ListPhase, ListState};
pub use use_authentication::use_authentication;
pub use use_extension_preview::use_extension_preview;
pub use use_list::{ListHandle, use_list};
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_require_auth::use_require_auth;
