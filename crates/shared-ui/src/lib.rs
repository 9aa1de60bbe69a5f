//! Styled building blocks shared by every view of the portal.

pub mod components;

pub use components::*;
