//! Numerical integration.

mod gauss;

pub use gauss::{GaussLegendre, MAX_ORDER, MIN_ORDER};
