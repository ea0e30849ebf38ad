//! # Base types for geochess
//!
//! This is an auxiliary crate for `geochess`, which contains plain value types: coordinates,
//! colors, pieces, cells and sets of squares. It contains no game logic.
//!
//! Normally you don't want to use this crate directly. Use `geochess` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
