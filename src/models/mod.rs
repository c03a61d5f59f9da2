//! Data models for the menu administration console.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod menu;
mod user;

pub use menu::*;
pub use user::*;
