pub mod config;
pub mod error;
pub mod gate;
pub mod markers;
pub mod models;
pub mod resource;
pub mod role;
pub mod selector;

pub use config::*;
pub use error::*;
pub use gate::*;
pub use markers::*;
pub use models::*;
pub use resource::*;
pub use role::*;
pub use selector::*;
