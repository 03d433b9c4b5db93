//! Combat resolution math.
//!
//! This module provides pure functions for damage arithmetic.
//! All combat logic is deterministic and side-effect free: no floating point,
//! every percentage is applied as `value * percent / 100` with truncation.
//!
//! # Core Functions
//!
//! - `calculate_damage`: Attack minus divided defense, floored at the minimum
//! - `reflected_damage`: Share of an absorbed hit sent back to the attacker
//! - `percent_of`: Truncating percentage used by environments and revivals

pub mod damage;

pub use damage::{calculate_damage, percent_of, reflected_damage};
