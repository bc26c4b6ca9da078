#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::error::PricingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

/// Contract and market state of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptionParameters {
    /// the asset's price at time t
    pub underlying_price: f64,
    /// the strike or exercise price of the asset
    pub strike_price: f64,
    /// the continuously compounded annual risk-free rate
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the stock's returns
    pub volatility: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiry: f64,
    /// the continuous annual dividend yield
    pub dividend_yield: f64,
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Checked constructor, rejects parameters outside of the model's domain.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        time_to_expiry: f64,
        dividend_yield: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let params = Self {
            underlying_price,
            strike_price,
            risk_free_rate,
            volatility,
            time_to_expiry,
            dividend_yield,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Same contract with a different option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Finite inputs with `s > 0`, `k > 0`, `v > 0` and `t > 0`.
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("underlying_price", self.underlying_price),
            ("strike_price", self.strike_price),
            ("risk_free_rate", self.risk_free_rate),
            ("volatility", self.volatility),
            ("time_to_expiry", self.time_to_expiry),
            ("dividend_yield", self.dividend_yield),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(PricingError::NonFiniteInput { field, value });
        }

        if self.underlying_price <= 0.0 {
            return Err(PricingError::NonPositiveUnderlying {
                underlying_price: self.underlying_price,
            });
        }
        if self.strike_price <= 0.0 {
            return Err(PricingError::NonPositiveStrike {
                strike_price: self.strike_price,
            });
        }
        if self.volatility <= 0.0 {
            return Err(PricingError::NonPositiveVolatility {
                volatility: self.volatility,
            });
        }
        if self.time_to_expiry <= 0.0 {
            return Err(PricingError::NonPositiveTimeToExpiry {
                time_to_expiry: self.time_to_expiry,
            });
        }
        Ok(())
    }

    /// Model-free difference of call and put value, `s e^(-qt) - k e^(-rt)`.
    pub fn forward_parity(&self) -> f64 {
        self.underlying_price * (-self.dividend_yield * self.time_to_expiry).exp()
            - self.strike_price * (-self.risk_free_rate * self.time_to_expiry).exp()
    }
}

/// Theoretical value and Greeks of one option, all evaluated from the same d1 and d2.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingResult {
    pub value: f64,
    /// dV / ds
    pub delta: f64,
    /// d^2V / ds^2
    pub gamma: f64,
    /// dV / dv
    pub vega: f64,
    /// dV / dr
    pub rho: f64,
    /// -dV / dt
    pub theta: f64,
    /// dV / dq
    pub epsilon: f64,
    /// dV / dk
    pub strike_sensitivity: f64,
}
