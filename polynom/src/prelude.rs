pub use num_traits::One;
pub use num_traits::Zero;

pub use crate::config::set_fast_multiply_cutoff;
pub use crate::error::PolynomialError;
pub use crate::math::polynomial::Polynomial;
