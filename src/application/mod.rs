//! # Application Layer
//!
//! Contains the core business logic of the bot: command parsing and routing,
//! plus the in-process random utility.

pub mod random;
pub mod router;
