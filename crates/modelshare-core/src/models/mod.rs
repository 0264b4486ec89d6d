//! Data models for ModelShare.
//!
//! Wire names are camelCase so the same JSON is produced by the store, the
//! RPC server and any front end consuming it.

mod catalog;
mod model;
mod review;
mod user;

pub use catalog::*;
pub use model::*;
pub use review::*;
pub use user::*;

pub type ModelId = i64;
pub type VersionId = i64;
pub type UserId = i64;
pub type ReviewId = i64;
