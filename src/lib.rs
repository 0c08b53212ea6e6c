//! PlanFed - A lightweight federated query plan rewrite library implemented in Rust
//!
//! This crate provides a heuristic rewrite pass over relational query plans:
//! field usage analysis, rewriting of logical table scans into joins across
//! federated physical partitions, and a structural eligibility check for
//! incremental materialized view refresh.

pub mod analysis;
pub mod config;
pub mod core;
pub mod mv;
pub mod plan;
pub mod rewrite;
