//! # klokan-core
//!
//! Core types, answer-grid decoding, and error types for Klokan.
//!
//! This crate provides the foundational types shared across all Klokan crates:
//! - Entity structs for instances, answer sheets, and their answers
//! - The `Category` enum and the `(year, category)` instance key
//! - The answer-grid decoder used by the review display
//! - Cross-cutting error types
//! - Report types returned by import and export

pub mod entities;
pub mod enums;
pub mod errors;
pub mod grid;
pub mod responses;

/// Number of questions on a well-formed answer sheet.
pub const QUESTION_COUNT: usize = 24;
