//! Dense univariate polynomials with `f64` coefficients.
//!
//! The central type is [`Polynomial`](math::polynomial::Polynomial). Its
//! arithmetic can write results into existing polynomials, reusing their
//! coefficient buffers, or produce fresh values through the usual operators.
//!
//! ```
//! use polynom::prelude::*;
//!
//! let x_plus_one = Polynomial::from([1.0, 1.0]);
//! let mut square = Polynomial::new();
//! square.set_product(&x_plus_one, &x_plus_one);
//!
//! assert_eq!(Polynomial::from([1.0, 2.0, 1.0]), square);
//! assert_eq!("x^2 + 2x + 1", square.to_string());
//! assert_eq!(16.0, square.evaluate(3.0));
//! ```
#![deny(clippy::shadow_unrelated)]

pub mod config;
pub mod error;
pub mod math;
pub mod prelude;
