//! Benchmark support crate for arbor.
//!
//! Provides parameter types used by the Criterion benchmarks comparing the
//! spanning-tree algorithms.

pub mod params;
