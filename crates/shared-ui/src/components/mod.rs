// Standalone components
pub mod banner;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_field;
pub mod input;
pub mod loading;
pub mod page_header;
pub mod pagination;
pub mod status_badge;

// Primitive wrappers
pub mod confirm_dialog;
pub mod toast;

pub use banner::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use form_field::*;
pub use input::*;
pub use loading::*;
pub use page_header::*;
pub use pagination::*;
pub use status_badge::*;
pub use toast::*;
