pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod requests;
pub mod session;

pub use config::*;
pub use error::*;
pub use models::*;
pub use pagination::*;
pub use requests::*;
pub use session::*;
