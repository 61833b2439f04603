//! # prolio-core
//!
//! Core types and error types for the Prolio marketplace dashboard.
//!
//! This crate provides the foundational types shared across all Prolio crates:
//! - Entity structs for marketplace records (companies, banners, influencers, products)
//! - Status enums with state machine transitions
//! - Checklist templates used by review gates
//! - Table filtering and date display
//! - Banner image dimension validation
//! - The [`api::EntityApi`] capability trait and its [`errors::RemoteError`]

pub mod api;
pub mod checklist;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod media;
pub mod responses;
