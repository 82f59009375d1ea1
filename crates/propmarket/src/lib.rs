//! Financial estimation engine for the property and mortgage marketplace.
//!
//! Everything under [`finance`] is a pure, synchronous function of its
//! arguments: amortization, mortgage product matching, heuristic rent
//! estimation, and affordability analysis. The remaining modules carry the
//! service plumbing (configuration, telemetry, error mapping) shared with
//! the HTTP front end.

pub mod catalog;
pub mod config;
pub mod error;
pub mod finance;
pub mod telemetry;
