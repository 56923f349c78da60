//! # Base types for makruk
//!
//! This is an auxiliary crate for `makruk`, which contains the core value types. It was split from the
//! main crate, so everything declared here can be used in the build script for `makruk`.
//!
//! Normally you don't want to use this crate directly. Use `makruk` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
