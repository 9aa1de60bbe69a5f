//! REST client and view state for the account portal.
//!
//! Nothing here renders markup: the `app` crate owns the components and
//! drives these types from its signals.

pub mod api;
pub mod directory;
pub mod forms;
pub mod storage;

pub use api::ApiClient;
pub use directory::{PageRequest, UserDirectory};
pub use forms::{PasswordChangeForm, ProfileEditForm};
pub use storage::{KeyValueStore, MemoryStore, SessionStore};
