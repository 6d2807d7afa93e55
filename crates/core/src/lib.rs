//! Domain primitives shared by the Gorello database and API crates.

pub mod error;
pub mod roles;
pub mod search;
pub mod types;
pub mod validation;
