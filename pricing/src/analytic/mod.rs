pub mod black_scholes;
pub mod normal;

pub use black_scholes::{BlackScholesMerton, BlackScholesTerms, OptionPricer};
