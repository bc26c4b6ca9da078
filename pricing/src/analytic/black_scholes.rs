use crate::analytic::normal::{cdf, pdf};
use crate::common::error::PricingError;
use crate::common::models::{OptionParameters, OptionType, PricingResult};

pub trait OptionPricer {
    type Params;
    type Output;
    fn price(params: &Self::Params) -> Self::Output;
}

/// Auxiliary terms of the closed form, evaluated once per contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesTerms {
    pub d1: f64,
    pub d2: f64,
    /// sqrt(t)
    pub sqrt_t: f64,
    /// e^(-qt)
    pub dividend_discount: f64,
    /// e^(-rt)
    pub rate_discount: f64,
}

impl BlackScholesTerms {
    pub fn new(dp: &OptionParameters) -> Self {
        let sqrt_t = dp.time_to_expiry.sqrt();
        let sigma_exp = dp.volatility * sqrt_t;
        let d1 = ((dp.underlying_price / dp.strike_price).ln()
            + (dp.risk_free_rate - dp.dividend_yield + dp.volatility.powi(2) / 2.0)
                * dp.time_to_expiry)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        Self {
            d1,
            d2,
            sqrt_t,
            dividend_discount: (-dp.dividend_yield * dp.time_to_expiry).exp(),
            rate_discount: (-dp.risk_free_rate * dp.time_to_expiry).exp(),
        }
    }
}

/// European put and call options on a stock paying a continuous dividend yield.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPricer for BlackScholesMerton {
    type Params = OptionParameters;
    type Output = PricingResult;

    fn price(dp: &OptionParameters) -> PricingResult {
        let terms = BlackScholesTerms::new(dp);
        tracing::trace!(d1 = terms.d1, d2 = terms.d2, option_type = ?dp.option_type, "black-scholes terms");

        let BlackScholesTerms {
            d1,
            d2,
            sqrt_t,
            dividend_discount: q_disc,
            rate_discount: r_disc,
        } = terms;
        let s = dp.underlying_price;
        let k = dp.strike_price;
        let r = dp.risk_free_rate;
        let q = dp.dividend_yield;
        let t = dp.time_to_expiry;
        let v = dp.volatility;

        // shared by both option types
        let density = q_disc * pdf(d1);
        let gamma = density / (s * v * sqrt_t);
        let vega = s * density * sqrt_t;
        let time_decay = -s * density * v / (2.0 * sqrt_t);

        match dp.option_type {
            OptionType::Call => {
                let n_d1 = cdf(d1);
                let n_d2 = cdf(d2);
                PricingResult {
                    value: s * q_disc * n_d1 - k * r_disc * n_d2,
                    delta: q_disc * n_d1,
                    gamma,
                    vega,
                    rho: k * t * r_disc * n_d2,
                    theta: time_decay - r * k * r_disc * n_d2 + q * s * q_disc * n_d1,
                    epsilon: -s * t * q_disc * n_d1,
                    strike_sensitivity: -r_disc * n_d2,
                }
            }
            OptionType::Put => {
                let n_d1 = cdf(-d1);
                let n_d2 = cdf(-d2);
                PricingResult {
                    value: k * r_disc * n_d2 - s * q_disc * n_d1,
                    delta: -q_disc * n_d1,
                    gamma,
                    vega,
                    rho: -k * t * r_disc * n_d2,
                    theta: time_decay + r * k * r_disc * n_d2 - q * s * q_disc * n_d1,
                    epsilon: s * t * q_disc * n_d1,
                    strike_sensitivity: r_disc * n_d2,
                }
            }
        }
    }
}

/// Value and Greeks of a European option.
///
/// Inputs are not validated: a zero time to expiry or volatility yields NaN or
/// infinite fields instead of a clamped result. Use [`try_price`] to reject them upfront.
pub fn price(params: OptionParameters) -> PricingResult {
    BlackScholesMerton::price(&params)
}

/// Like [`price`], but fails fast on parameters outside of the model's domain.
pub fn try_price(params: OptionParameters) -> Result<PricingResult, PricingError> {
    if let Err(err) = params.validate() {
        tracing::debug!(error = %err, "rejected option parameters");
        return Err(err);
    }
    Ok(price(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    fn contract(
        underlying_price: f64,
        strike_price: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> OptionParameters {
        OptionParameters {
            underlying_price,
            strike_price,
            risk_free_rate,
            volatility,
            time_to_expiry,
            dividend_yield: 0.0,
            option_type,
        }
    }

    #[test]
    fn terms() {
        let dp = contract(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        let terms = BlackScholesTerms::new(&dp);
        assert_approx_eq!(terms.d1, 0.35, 1e-12);
        assert_approx_eq!(terms.d2, 0.15, 1e-12);
        assert_eq!(terms.dividend_discount, 1.0);
        assert_approx_eq!(terms.rate_discount, (-0.05_f64).exp(), 1e-15);
    }

    #[test]
    fn terms_with_dividend_yield() {
        let dp = OptionParameters {
            dividend_yield: 0.05,
            ..contract(100.0, 100.0, 4.0, 0.05, 0.2, OptionType::Put)
        };
        let terms = BlackScholesTerms::new(&dp);
        // carry cancels, only the convexity term is left
        assert_approx_eq!(terms.d1, 0.2, 1e-12);
        assert_approx_eq!(terms.d2, -0.2, 1e-12);
    }

    #[test]
    fn european_call() {
        let dp = contract(300.0, 250.0, 1.0, 0.03, 0.15, OptionType::Call);
        assert_approx_eq!(price(dp).value, 58.8197, TOLERANCE);

        let dp = contract(310.0, 250.0, 3.5, 0.05, 0.25, OptionType::Call);
        assert_approx_eq!(price(dp).value, 113.4155, TOLERANCE);
    }

    #[test]
    fn european_put() {
        let dp = contract(300.0, 250.0, 1.0, 0.03, 0.15, OptionType::Put);
        assert_approx_eq!(price(dp).value, 1.4311, TOLERANCE);

        let dp = contract(310.0, 250.0, 3.5, 0.05, 0.25, OptionType::Put);
        assert_approx_eq!(price(dp).value, 13.2797, TOLERANCE);
    }

    #[test]
    fn textbook_at_the_money() {
        let call = price(contract(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call));
        assert_approx_eq!(call.value, 10.4506, TOLERANCE);
        assert_approx_eq!(call.delta, 0.6368, TOLERANCE);
        assert_approx_eq!(call.gamma, 0.018762, 1e-6);
        assert_approx_eq!(call.vega, 37.524, 1e-3);
        assert_approx_eq!(call.rho, 53.2325, TOLERANCE);
        assert_approx_eq!(call.theta, -6.4140, TOLERANCE);

        let put = price(contract(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put));
        assert_approx_eq!(put.value, 5.5735, TOLERANCE);
        assert_approx_eq!(put.delta, -0.3632, TOLERANCE);
        assert_approx_eq!(put.rho, -41.8905, TOLERANCE);
        assert_approx_eq!(put.theta, -1.6579, TOLERANCE);
    }

    #[test]
    fn european_put_call_parity() {
        let call = contract(300.0, 250.0, 1.0, 0.03, 0.15, OptionType::Call);
        let put = call.with_option_type(OptionType::Put);
        let put_call_parity = price(call).value - price(put).value;
        assert_approx_eq!(put_call_parity, call.forward_parity(), 1e-9);
    }

    #[test]
    fn greeks_shared_by_call_and_put() {
        let call = OptionParameters {
            dividend_yield: 0.02,
            ..contract(95.0, 105.0, 0.75, 0.01, 0.3, OptionType::Call)
        };
        let c = price(call);
        let p = price(call.with_option_type(OptionType::Put));
        assert_eq!(c.gamma, p.gamma);
        assert_eq!(c.vega, p.vega);

        let q_disc = (-0.02_f64 * 0.75).exp();
        assert_approx_eq!(c.delta - p.delta, q_disc, 1e-12);
        assert_approx_eq!(c.epsilon - p.epsilon, -95.0 * 0.75 * q_disc, 1e-9);
        assert_approx_eq!(
            c.strike_sensitivity - p.strike_sensitivity,
            -(-0.01_f64 * 0.75).exp(),
            1e-12
        );
    }

    #[test]
    fn zero_expiry_is_not_clamped() {
        let dp = contract(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
        let result = price(dp);
        assert!(result.gamma.is_nan() || result.gamma.is_infinite());
    }

    #[test]
    fn zero_volatility_is_not_clamped() {
        let dp = contract(100.0, 100.0, 1.0, 0.0, 0.0, OptionType::Put);
        assert!(price(dp).value.is_nan());
    }

    #[test]
    fn try_price_rejects_invalid_inputs() {
        let dp = contract(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
        assert_eq!(
            try_price(dp),
            Err(PricingError::NonPositiveTimeToExpiry {
                time_to_expiry: 0.0
            })
        );

        let dp = contract(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert_eq!(try_price(dp), Ok(price(dp)));
    }
}
