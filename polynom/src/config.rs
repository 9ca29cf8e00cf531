//! This module contains various configuration options. In general, the
//! configuration options impact performance only. The default configuration is
//! sane and should provide good performance for most users.
//!
//! Most configuration options can also be set via environment variables.
//! Generally, the environment variables take precedence over the options set
//! in this module.

use std::cell::RefCell;

use arbitrary::Arbitrary;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::new());
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
struct Config {
    pub fast_multiply_cutoff: FastMultiplyCutoff,
}

impl Config {
    fn new() -> Self {
        let fast_multiply_cutoff = FastMultiplyCutoff::new(None);

        Self {
            fast_multiply_cutoff,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
struct FastMultiplyCutoff(usize);

impl FastMultiplyCutoff {
    const ENV_VAR: &'static str = "POLYNOM_FAST_MULTIPLY_CUTOFF";
    const DEFAULT: usize = 64;
    const MINIMUM: usize = 1;

    /// Creates a new `FastMultiplyCutoff` with the given value. Respects the
    /// precedence of the environment variable if set. Uses the default if no
    /// value is provided.
    fn new(config_value: Option<usize>) -> Self {
        let cutoff = std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .or(config_value)
            .unwrap_or(Self::DEFAULT)
            .max(Self::MINIMUM);

        Self(cutoff)
    }
}

/// Sets the cutoff above which polynomial multiplication switches from the
/// direct convolution to FFT-based multiplication.
///
/// The cutoff is compared against the sum of the operands' degrees. For
/// example, if the cutoff is set to 64, multiplying two polynomials of degree
/// 40 uses the FFT, while multiplying two polynomials of degree 20 convolves
/// directly.
///
/// Can also be set via the environment variable
/// `POLYNOM_FAST_MULTIPLY_CUTOFF`. The environment variable has higher
/// precedence than this function.
///
/// The default is 64. The minimum is always 1.
pub fn set_fast_multiply_cutoff(cutoff: usize) {
    let cutoff = FastMultiplyCutoff::new(Some(cutoff));
    CONFIG.with(|c| c.borrow_mut().fast_multiply_cutoff = cutoff);
}

pub(crate) fn fast_multiply_cutoff() -> usize {
    CONFIG.with(|c| c.borrow().fast_multiply_cutoff).0
}
