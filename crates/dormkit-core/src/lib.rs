//! # DormKit Core
//!
//! Core types and utilities shared by the DormKit crates:
//! - Typed errors for preset loading and command parsing
//! - Feet/inch formatting and pixel-to-inch scale factors

pub mod error;
pub mod units;

pub use error::{CommandError, LayoutError};
pub use units::{format_feet_inches, RealDimensions, ScaleFactors};
