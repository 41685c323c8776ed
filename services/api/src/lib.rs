//! services/api/src/lib.rs
//!
//! HTTP service for the StyleConnect marketplace.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
