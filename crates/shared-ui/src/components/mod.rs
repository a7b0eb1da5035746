// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod notice;
pub mod page_header;
pub mod pagination;
pub mod spinner;

// Primitive wrappers
pub mod avatar;
pub mod toast;

// Depends on button
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use notice::*;
pub use page_header::*;
pub use pagination::*;
pub use sidebar::*;
pub use spinner::*;
pub use toast::*;
