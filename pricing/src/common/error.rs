use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("underlying price must be positive, got {underlying_price}")]
    NonPositiveUnderlying { underlying_price: f64 },
    #[error("strike price must be positive, got {strike_price}")]
    NonPositiveStrike { strike_price: f64 },
    #[error("volatility must be positive, got {volatility}")]
    NonPositiveVolatility { volatility: f64 },
    #[error("time to expiry must be positive, got {time_to_expiry}")]
    NonPositiveTimeToExpiry { time_to_expiry: f64 },
    #[error("{field} must be finite, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },
}
