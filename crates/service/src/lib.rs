//! Service layer providing singer operations on top of `models`.
//! - Keeps HTTP concerns out of business rules.
//! - Storage is reached through the `SingerRepository` trait.

pub mod errors;
pub mod singers;
pub mod seed;
