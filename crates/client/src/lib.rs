//! HTTP access to the GPDI backend plus the navigation flows that sit on
//! top of it: the layout gate check, the project selector and logout.

pub mod api;
pub mod backend;
pub mod config;
pub mod error_convert;
pub mod markers;
pub mod selector;
pub mod session;

pub use api::ApiClient;
pub use backend::Backend;
pub use config::load_config;
