//! Domain logic shared by the persistence and API layers.
//!
//! This crate has no internal dependencies so both `medialib-db` and
//! `medialib-api` can build on it.

pub mod filter;
pub mod genre;
pub mod types;
