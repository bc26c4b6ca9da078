//! Closed-form Black-Scholes-Merton valuation of European options on assets
//! paying a continuous dividend yield.
//!
//! ```
//! use pricing::{price, OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.0, OptionType::Call).unwrap();
//! let result = price(params);
//! assert!((result.value - 10.4506).abs() < 1e-4);
//! ```

pub mod analytic;
pub mod common;

pub use analytic::black_scholes::{price, try_price};
pub use common::error::PricingError;
pub use common::models::{OptionParameters, OptionType, PricingResult};
