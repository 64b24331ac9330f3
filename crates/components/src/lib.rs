//! A collection of components for the Braid framework.
//!
//! - [`sellar`] — the classic two-discipline coupled system and its
//!   fixed-point problem adapter
//! - [`cost`] — aircraft flyaway cost estimation with year-based escalation
//! - [`test_functions`] — benchmark objectives for external optimization
//!   drivers

pub mod cost;
pub mod sellar;
pub mod test_functions;
