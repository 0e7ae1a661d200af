//! Manifest resource extraction and aggregation.
//!
//! Pure domain logic with no I/O: rendered templates go in, ordered summary
//! rows (or raw passthrough text) come out.

pub mod domain;
pub mod policies;
pub mod services;
