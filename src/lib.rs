//! payband: Token payout schedule calculator
//!
//! This library provides the core components for:
//! - Daily price history loading and lookup
//! - Trailing lookback baseline computation
//! - Forward-looking price resolution for non-trading payout dates
//! - Monthly payout generation with floor/ceiling band repricing
//! - Per-year aggregation of payout records
//! - CLI reporting surface
//!
//! The engine is a pure function over immutable inputs: callers re-run
//! [`schedule::compute`] wholesale whenever the series, parameters, or
//! year range change.

pub mod band;
pub mod baseline;
pub mod cli;
pub mod config;
pub mod report;
pub mod resolve;
pub mod schedule;
pub mod series;
pub mod summary;
pub mod telemetry;
