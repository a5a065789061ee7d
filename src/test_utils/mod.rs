//! Consolidated test utilities for the Octopus Energy to tado° sync.
//!
//! Config builders, consumption page fixtures, and mock implementations of
//! the page source and reading sink traits.

#![cfg(test)]

pub mod config;
pub mod fixtures;
pub mod mocks;
