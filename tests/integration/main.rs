//! Integration test harness

mod loader_test;
mod pipeline_test;
