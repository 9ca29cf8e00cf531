use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::DivAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Rem;
use std::ops::Sub;
use std::ops::SubAssign;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use get_size2::GetSize;
use itertools::Itertools;
use num_traits::One;
use num_traits::Zero;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use tracing::debug;
use tracing::trace;

use crate::config;
use crate::error::PolynomialError;
use crate::math::fft::Complex;
use crate::math::fft::fft;
use crate::math::fft::ifft;

/// A univariate polynomial with `f64` coefficients, in monomial form.
///
/// The polynomial owns a coefficient buffer whose length, the _capacity_, is at
/// least `degree + 1`. The degree is cached and always _normalized_: it is the
/// index of the highest nonzero coefficient, or 0 for the zero polynomial.
/// Slots above the degree always hold zero.
///
/// Arithmetic comes in two flavors. The `set_*` methods write their result into
/// an existing polynomial, reusing its buffer. The operator traits (`+`, `-`,
/// `*`, …) produce fresh values or, for the compound assignments, update the
/// left-hand side in place.
#[derive(Clone, GetSize)]
pub struct Polynomial {
    /// The polynomial's coefficients, in order of increasing power. Only the
    /// first `degree + 1` entries are meaningful; the rest are zero.
    coefficients: Vec<f64>,
    degree: usize,
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::from_constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.degree == 0 && self.coefficients[0] == 0.0
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::from_constant(1.0)
    }

    fn is_one(&self) -> bool {
        self.degree == 0 && self.coefficients[0] == 1.0
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Polynomial")
            .field("coefficients", &self.coefficients())
            .field("degree", &self.degree)
            .finish()
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms = (0..=self.degree)
            .rev()
            .filter(|&pow| self.coefficients[pow] != 0.0)
            .map(|pow| {
                let coeff = self.coefficients[pow];
                let coeff = if coeff == 1.0 && pow != 0 {
                    String::new()
                } else {
                    coeff.to_string()
                };
                match pow {
                    0 => coeff,
                    1 => format!("{coeff}x"),
                    _ => format!("{coeff}x^{pow}"),
                }
            })
            .join(" + ");

        write!(f, "{terms}")
    }
}

// Exact IEEE-754 comparison. Because of NaN, `Eq` is not implemented.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree && self.coefficients() == other.coefficients()
    }
}

impl<'a> Arbitrary<'a> for Polynomial {
    /// Generates polynomials with small, integral coefficients. Sums and
    /// products of such polynomials are computed exactly, which lets property
    /// tests compare results with `==`.
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let coefficients = u
            .arbitrary_iter::<i8>()?
            .map(|c| c.map(f64::from))
            .collect::<arbitrary::Result<Vec<_>>>()?;

        Ok(Self::from_coefficients(coefficients))
    }
}

impl Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.coefficients().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_coefficients(Vec::deserialize(deserializer)?))
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial {
    fn from(coefficients: [f64; N]) -> Self {
        Self::from_coefficients(coefficients.to_vec())
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::from_coefficients(coefficients.to_vec())
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::from_coefficients(coefficients)
    }
}

impl From<&Vec<f64>> for Polynomial {
    fn from(coefficients: &Vec<f64>) -> Self {
        Self::from_coefficients(coefficients.to_vec())
    }
}

impl Polynomial {
    /// A polynomial of degree 0 with a buffer of minimal size.
    ///
    /// No guarantee is made about the value of the constant term: write it with
    /// [`set_coefficient`](Self::set_coefficient) before relying on it. Use
    /// [`Polynomial::zero`](Zero::zero) for a polynomial of known value.
    pub fn new() -> Self {
        Self {
            coefficients: vec![0.0],
            degree: 0,
        }
    }

    /// The zero polynomial, with room for a polynomial of degree
    /// `capacity - 1` before the buffer has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coefficients: vec![0.0; capacity.max(1)],
            degree: 0,
        }
    }

    pub fn from_constant(constant: f64) -> Self {
        Self {
            coefficients: vec![constant],
            degree: 0,
        }
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::x_to_the(1)
    }

    /// The monomial `x^k`. In particular, `x_to_the(0)` is [one](One::one).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polynom::prelude::*;
    /// let x_cubed = Polynomial::x_to_the(3);
    /// assert_eq!(3, x_cubed.degree());
    /// assert_eq!(1000.0, x_cubed.evaluate(10.0));
    /// ```
    pub fn x_to_the(k: usize) -> Self {
        let mut coefficients = vec![0.0; k + 1];
        coefficients[k] = 1.0;

        Self {
            coefficients,
            degree: k,
        }
    }

    /// Build a polynomial from its coefficients, given in order of increasing
    /// power. Trailing zeros do not contribute to the degree. An empty vector
    /// gives the zero polynomial.
    ///
    /// The vector is used as the coefficient buffer as-is; no copy is made.
    pub fn from_coefficients(mut coefficients: Vec<f64>) -> Self {
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }

        let top = coefficients.len() - 1;
        let mut polynomial = Self {
            coefficients,
            degree: top,
        };
        polynomial.recompute_degree(top);

        polynomial
    }

    pub fn is_x(&self) -> bool {
        self.degree == 1 && self.coefficients[0] == 0.0 && self.coefficients[1] == 1.0
    }
}

impl Polynomial {
    /// Grow the coefficient buffer such that it can hold a polynomial of the
    /// given degree. Existing coefficients are preserved and new slots are
    /// zero. Never shrinks.
    fn ensure_capacity(&mut self, degree: usize) {
        let current = self.coefficients.len();
        let required = degree + 1;
        if current < required {
            trace!(current, required, "growing coefficient buffer");
            self.coefficients.resize(required, 0.0);
        }
    }

    /// Prepare `self` to be overwritten with a result of at most the given
    /// degree: the buffer is large enough and every slot is zero.
    fn clear_for_degree(&mut self, degree: usize) {
        self.ensure_capacity(degree);
        self.coefficients.fill(0.0);
        self.degree = 0;
    }

    /// Set the degree to the index of the highest nonzero coefficient at or
    /// below `from`. Every slot above `from` must already be zero.
    fn recompute_degree(&mut self, from: usize) {
        self.degree = (0..=from)
            .rev()
            .find(|&i| self.coefficients[i] != 0.0)
            .unwrap_or(0);

        debug_assert!(self.is_normalized(), "{self:?}");
    }

    fn is_normalized(&self) -> bool {
        let Some(tail) = self.coefficients.get(self.degree + 1..) else {
            return false;
        };
        let top_is_nonzero = self.degree == 0 || self.coefficients[self.degree] != 0.0;

        top_is_nonzero && tail.iter().all(|&c| c == 0.0)
    }

    /// Overwrite `self` with a copy of `other`, reusing `self`'s buffer.
    fn copy_from(&mut self, other: &Self) {
        self.clear_for_degree(other.degree);
        self.coefficients[..=other.degree].copy_from_slice(other.coefficients());
        self.degree = other.degree;
    }

    /// The number of coefficient slots currently allocated. Always at least
    /// `degree + 1`.
    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }

    /// Shrink the coefficient buffer to exactly `degree + 1` slots.
    pub fn compact(&mut self) {
        self.coefficients.truncate(self.degree + 1);
        self.coefficients.shrink_to_fit();
    }
}

impl Polynomial {
    /// The coefficient of `x^i`. Zero for any `i` above the degree.
    pub fn coefficient(&self, i: usize) -> f64 {
        if i > self.degree {
            return 0.0;
        }

        self.coefficients[i]
    }

    /// Set the coefficient of `x^i` to `a`, growing the buffer if needed.
    ///
    /// The degree follows: writing a nonzero value above the degree raises it,
    /// writing zero to the leading coefficient lowers it to the next nonzero
    /// coefficient (or to 0 if there is none).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polynom::prelude::*;
    /// let mut p = Polynomial::x_to_the(3);
    /// p.set_coefficient(4, 2.0);
    /// assert_eq!(4, p.degree());
    ///
    /// p.set_coefficient(4, 0.0);
    /// assert_eq!(3, p.degree());
    ///
    /// p.set_coefficient(3, 0.0);
    /// assert!(p.is_zero());
    /// ```
    pub fn set_coefficient(&mut self, i: usize, a: f64) {
        self.ensure_capacity(i);

        match (i.cmp(&self.degree), a == 0.0) {
            // slots above the degree are zero already
            (Ordering::Greater, true) => (),
            (Ordering::Greater, false) => {
                self.coefficients[i] = a;
                self.degree = i;
            }
            (Ordering::Equal, true) => {
                self.coefficients[i] = a;
                self.recompute_degree(i);
            }
            _ => self.coefficients[i] = a,
        }
    }

    /// The coefficients `0..=degree`, in order of increasing power.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients[..=self.degree]
    }

    /// Copy the coefficients `0..=degree` into a new vector. The inverse of
    /// [`from_coefficients`](Self::from_coefficients).
    pub fn to_vec(&self) -> Vec<f64> {
        self.coefficients().to_vec()
    }

    /// The degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn degree_cmp(&self, other: &Self) -> Ordering {
        self.degree.cmp(&other.degree)
    }

    pub fn degree_max(&self, other: &Self) -> usize {
        self.degree.max(other.degree)
    }

    /// The coefficient of the term of highest power. Zero only for the zero
    /// polynomial.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.degree]
    }

    /// A total order on polynomials: first by degree, then by coefficients from
    /// the highest power down, each compared with [`f64::total_cmp`].
    ///
    /// Unlike `==`, this order distinguishes `0.0` from `-0.0` and treats NaNs
    /// as ordinary values.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.degree_cmp(other).then_with(|| {
            let lhs = self.coefficients().iter().rev();
            let rhs = other.coefficients().iter().rev();
            lhs.zip(rhs)
                .map(|(l, r)| l.total_cmp(r))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl Polynomial {
    /// Evaluate the polynomial in `x` using Horner's method.
    ///
    /// A constant polynomial evaluates to its constant for every `x`, including
    /// non-finite ones. Otherwise, non-finite values propagate.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut acc = self.coefficients[self.degree];
        for &c in self.coefficients[..self.degree].iter().rev() {
            acc = acc * x + c;
        }

        acc
    }

    pub fn batch_evaluate(&self, domain: &[f64]) -> Vec<f64> {
        domain.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Parallel version of [`batch_evaluate`](Self::batch_evaluate).
    pub fn par_batch_evaluate(&self, domain: &[f64]) -> Vec<f64> {
        domain.par_iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl Polynomial {
    /// `self = lhs + rhs`
    ///
    /// `lhs` and `rhs` may be the same polynomial. To add to `self` in place,
    /// use `+=`.
    pub fn set_sum(&mut self, lhs: &Self, rhs: &Self) {
        self.set_zipped(lhs, rhs, |l, r| l + r);
    }

    /// `self = lhs - rhs`
    ///
    /// `lhs` and `rhs` may be the same polynomial. To subtract from `self` in
    /// place, use `-=`.
    pub fn set_difference(&mut self, lhs: &Self, rhs: &Self) {
        self.set_zipped(lhs, rhs, |l, r| l - r);
    }

    /// `self = polynomial · scalar`
    pub fn set_scalar_product(&mut self, polynomial: &Self, scalar: f64) {
        self.set_mapped(polynomial, |c| c * scalar);
    }

    /// `self = polynomial / scalar`
    ///
    /// Division by zero is not checked; the coefficients become infinite or NaN.
    pub fn set_scalar_quotient(&mut self, polynomial: &Self, scalar: f64) {
        self.set_mapped(polynomial, |c| c / scalar);
    }

    /// Multiply a polynomial with a scalar, _i.e._, compute `scalar · self(x)`.
    pub fn scalar_mul(&self, scalar: f64) -> Self {
        let mut product = Self::with_capacity(self.degree + 1);
        product.set_scalar_product(self, scalar);
        product
    }

    /// Multiply a polynomial with a scalar in place.
    pub fn scalar_mul_mut(&mut self, scalar: f64) {
        self.map_assign(|c| c * scalar);
    }

    fn set_zipped(&mut self, lhs: &Self, rhs: &Self, op: impl Fn(f64, f64) -> f64) {
        let degree = lhs.degree_max(rhs);
        self.clear_for_degree(degree);
        for i in 0..=degree {
            self.coefficients[i] = op(lhs.coefficient(i), rhs.coefficient(i));
        }
        self.recompute_degree(degree);
    }

    // Index `i` of the result only depends on index `i` of the operands, and
    // growing the buffer keeps all of `self`'s coefficients. Hence, updating
    // `self` in place never reads an already-overwritten value.
    fn zip_assign(&mut self, rhs: &Self, op: impl Fn(f64, f64) -> f64) {
        let degree = self.degree_max(rhs);
        self.ensure_capacity(degree);
        for i in 0..=degree {
            self.coefficients[i] = op(self.coefficients[i], rhs.coefficient(i));
        }
        self.recompute_degree(degree);
    }

    fn set_mapped(&mut self, polynomial: &Self, op: impl Fn(f64) -> f64) {
        let degree = polynomial.degree;
        self.clear_for_degree(degree);
        for (target, &c) in self.coefficients.iter_mut().zip(polynomial.coefficients()) {
            *target = op(c);
        }
        self.recompute_degree(degree);
    }

    fn map_assign(&mut self, op: impl Fn(f64) -> f64) {
        let degree = self.degree;
        for c in &mut self.coefficients[..=degree] {
            *c = op(*c);
        }
        self.recompute_degree(degree);
    }
}

impl Polynomial {
    /// `self = polynomial · x^shift`
    ///
    /// A negative `shift` divides by `x^|shift|`, discarding the terms of power
    /// below `|shift|`.
    ///
    /// # Panics
    ///
    /// Panics if `shift` is negative and its magnitude exceeds the degree of
    /// `polynomial`. See [`try_set_shifted`](Self::try_set_shifted) for a
    /// non-panicking variant.
    pub fn set_shifted(&mut self, polynomial: &Self, shift: isize) {
        self.try_set_shifted(polynomial, shift)
            .unwrap_or_else(|err| panic!("{err}"));
    }

    /// Like [`set_shifted`](Self::set_shifted), but returns an error instead of
    /// panicking. On error, `self` is left untouched.
    pub fn try_set_shifted(&mut self, polynomial: &Self, shift: isize) -> Result<(), PolynomialError> {
        let degree = polynomial.shifted_degree(shift)?;
        if polynomial.is_zero() {
            self.clear_for_degree(0);
            return Ok(());
        }

        self.clear_for_degree(degree);
        let magnitude = shift.unsigned_abs();
        if shift >= 0 {
            self.coefficients[magnitude..=degree].copy_from_slice(polynomial.coefficients());
        } else {
            self.coefficients[..=degree].copy_from_slice(&polynomial.coefficients()[magnitude..]);
        }
        self.recompute_degree(degree);

        Ok(())
    }

    /// Multiply a polynomial with `x^shift`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`set_shifted`](Self::set_shifted).
    #[must_use]
    pub fn shift_coefficients(&self, shift: isize) -> Self {
        let mut shifted = Self::new();
        shifted.set_shifted(self, shift);
        shifted
    }

    /// In-place version of [`shift_coefficients`](Self::shift_coefficients).
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`set_shifted`](Self::set_shifted).
    pub fn shift_coefficients_mut(&mut self, shift: isize) {
        self.try_shift_coefficients_mut(shift)
            .unwrap_or_else(|err| panic!("{err}"));
    }

    /// Like [`shift_coefficients_mut`](Self::shift_coefficients_mut), but
    /// returns an error instead of panicking. On error, `self` is left
    /// untouched.
    pub fn try_shift_coefficients_mut(&mut self, shift: isize) -> Result<(), PolynomialError> {
        let degree = self.shifted_degree(shift)?;
        if self.is_zero() {
            return Ok(());
        }

        let magnitude = shift.unsigned_abs();
        if shift >= 0 {
            self.ensure_capacity(degree);
            self.coefficients.copy_within(0..=self.degree, magnitude);
            self.coefficients[..magnitude].fill(0.0);
        } else {
            self.coefficients.copy_within(magnitude..=self.degree, 0);
            self.coefficients[degree + 1..=self.degree].fill(0.0);
        }
        self.recompute_degree(degree);

        Ok(())
    }

    fn shifted_degree(&self, shift: isize) -> Result<usize, PolynomialError> {
        let magnitude = shift.unsigned_abs();
        if shift >= 0 {
            return Ok(self.degree + magnitude);
        }

        self.degree
            .checked_sub(magnitude)
            .ok_or(PolynomialError::ShiftBelowConstantTerm {
                shift,
                degree: self.degree,
            })
    }
}

impl Polynomial {
    /// `self = lhs · rhs`
    ///
    /// Chooses the faster of [naïve](Self::naive_multiply) and
    /// [FFT-based](Self::fast_multiply) multiplication, depending on the degree
    /// of the product. See also [`crate::config::set_fast_multiply_cutoff`].
    pub fn set_product(&mut self, lhs: &Self, rhs: &Self) {
        let degree = lhs.degree + rhs.degree;
        if degree < config::fast_multiply_cutoff() {
            debug!(degree, "multiplying polynomials by direct convolution");
            self.set_naive_product(lhs, rhs);
        } else {
            debug!(degree, "multiplying polynomials using the FFT");
            self.set_fast_product(lhs, rhs);
        }
    }

    /// Multiply `self` by `other`.
    ///
    /// Prefer this over [`naive_multiply`](Self::naive_multiply) and
    /// [`fast_multiply`](Self::fast_multiply) since it chooses the fastest
    /// multiplication strategy.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut product = Self::with_capacity(self.degree + other.degree + 1);
        product.set_product(self, other);
        product
    }

    /// Use [Self::multiply] instead. Only `pub` to allow benchmarking; not
    /// considered part of the public API.
    #[doc(hidden)]
    pub fn naive_multiply(&self, other: &Self) -> Self {
        let mut product = Self::with_capacity(self.degree + other.degree + 1);
        product.set_naive_product(self, other);
        product
    }

    /// Use [Self::multiply] instead. Only `pub` to allow benchmarking; not
    /// considered part of the public API.
    ///
    /// The time complexity of this method is in O(n·log(n)), where `n` is the
    /// sum of the degrees of the operands. The result agrees with
    /// [naïve multiplication](Self::naive_multiply) up to floating-point
    /// rounding.
    #[doc(hidden)]
    pub fn fast_multiply(&self, other: &Self) -> Self {
        let mut product = Self::with_capacity(self.degree + other.degree + 1);
        product.set_fast_product(self, other);
        product
    }

    fn set_naive_product(&mut self, lhs: &Self, rhs: &Self) {
        let degree = lhs.degree + rhs.degree;
        self.clear_for_degree(degree);
        for (i, &l) in lhs.coefficients().iter().enumerate() {
            for (j, &r) in rhs.coefficients().iter().enumerate() {
                self.coefficients[i + j] += l * r;
            }
        }
        self.recompute_degree(degree);
    }

    fn set_fast_product(&mut self, lhs: &Self, rhs: &Self) {
        if lhs.is_zero() || rhs.is_zero() {
            self.clear_for_degree(0);
            return;
        }

        let degree = lhs.degree + rhs.degree;
        let order = (degree + 1).next_power_of_two();
        let to_padded_complex = |polynomial: &Self| {
            let mut values = polynomial
                .coefficients()
                .iter()
                .map(|&c| Complex::from(c))
                .collect_vec();
            values.resize(order, Complex::ZERO);
            values
        };

        let mut lhs_values = to_padded_complex(lhs);
        let mut rhs_values = to_padded_complex(rhs);
        fft(&mut lhs_values);
        fft(&mut rhs_values);

        let mut hadamard_product = lhs_values
            .into_iter()
            .zip(rhs_values)
            .map(|(l, r)| l * r)
            .collect_vec();
        ifft(&mut hadamard_product);

        self.clear_for_degree(degree);
        let product = &mut self.coefficients[..=degree];
        for (target, value) in product.iter_mut().zip(&hadamard_product) {
            *target = value.re;
        }
        self.recompute_degree(degree);
    }

    /// `self = polynomial^exponent`
    ///
    /// Any polynomial to the power of 0 is [one](One::one), including the zero
    /// polynomial.
    pub fn set_power(&mut self, polynomial: &Self, exponent: u32) {
        let mut acc = Self::one();
        let bit_length = u32::BITS - exponent.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = acc.multiply(&acc);
            if (exponent >> i) & 1 == 1 {
                acc = acc.multiply(polynomial);
            }
        }

        self.copy_from(&acc);
    }

    /// Multiply a polynomial with itself `exponent` times.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut power = Self::new();
        power.set_power(self, exponent);
        power
    }

    /// Polynomial long division. Writes the quotient into `quotient` and the
    /// remainder into `remainder`, such that
    /// `self = quotient · divisor + remainder` and the remainder is zero or of
    /// lower degree than the divisor.
    ///
    /// Every leading coefficient that is eliminated is set to exactly zero,
    /// so rounding errors never inflate the degree of the remainder.
    ///
    /// # Errors
    ///
    /// Returns an error if the divisor is the zero polynomial. In that case,
    /// neither `quotient` nor `remainder` are modified.
    pub fn try_divide_into(
        &self,
        divisor: &Self,
        quotient: &mut Self,
        remainder: &mut Self,
    ) -> Result<(), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }

        remainder.copy_from(self);
        if self.degree < divisor.degree {
            quotient.clear_for_degree(0);
            return Ok(());
        }

        let quotient_degree = self.degree - divisor.degree;
        quotient.clear_for_degree(quotient_degree);
        let leading_coefficient = divisor.leading_coefficient();
        let divisor_tail = &divisor.coefficients()[..divisor.degree];
        for power in (0..=quotient_degree).rev() {
            let top = power + divisor.degree;
            let factor = remainder.coefficients[top] / leading_coefficient;
            quotient.coefficients[power] = factor;
            for (j, &d) in divisor_tail.iter().enumerate() {
                remainder.coefficients[power + j] -= factor * d;
            }
            remainder.coefficients[top] = 0.0;
        }

        quotient.recompute_degree(quotient_degree);
        remainder.recompute_degree(self.degree);

        Ok(())
    }

    /// Return (quotient, remainder). See [`try_divide_into`](Self::try_divide_into).
    pub fn try_divide(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let mut quotient = Self::new();
        let mut remainder = Self::new();
        self.try_divide_into(divisor, &mut quotient, &mut remainder)?;

        Ok((quotient, remainder))
    }

    /// Return (quotient, remainder).
    ///
    /// # Panics
    ///
    /// Panics if the divisor is the zero polynomial.
    pub fn divide(&self, divisor: &Self) -> (Self, Self) {
        self.try_divide(divisor)
            .unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Polynomial {
    /// `self = polynomial'`
    pub fn set_derivative(&mut self, polynomial: &Self) {
        let Some(degree) = polynomial.degree.checked_sub(1) else {
            self.clear_for_degree(0);
            return;
        };

        self.clear_for_degree(degree);
        for (i, &c) in polynomial.coefficients().iter().enumerate().skip(1) {
            self.coefficients[i - 1] = c * i as f64;
        }
        self.recompute_degree(degree);
    }

    /// `self = ∫ polynomial dx`, with the given constant of integration.
    pub fn set_integral(&mut self, polynomial: &Self, constant: f64) {
        let degree = polynomial.degree + 1;
        self.clear_for_degree(degree);
        self.coefficients[0] = constant;
        for (i, &c) in polynomial.coefficients().iter().enumerate() {
            self.coefficients[i + 1] = c / (i + 1) as f64;
        }
        self.recompute_degree(degree);
    }

    #[must_use]
    pub fn formal_derivative(&self) -> Self {
        let mut derivative = Self::with_capacity(self.degree);
        derivative.set_derivative(self);
        derivative
    }

    #[must_use]
    pub fn integral(&self, constant: f64) -> Self {
        let mut integral = Self::with_capacity(self.degree + 2);
        integral.set_integral(self, constant);
        integral
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let mut sum = Polynomial::with_capacity(self.degree_max(other) + 1);
        sum.set_sum(self, other);
        sum
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        self.zip_assign(rhs, |l, r| l + r);
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        let mut difference = Polynomial::with_capacity(self.degree_max(other) + 1);
        difference.set_difference(self, other);
        difference
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        self.zip_assign(rhs, |l, r| l - r);
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        self.multiply(other)
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        // The product's coefficients depend on many coefficients of `self`.
        let lhs = self.clone();
        self.set_product(&lhs, rhs);
    }
}

impl Mul<f64> for Polynomial {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self {
        self.scalar_mul_mut(scalar);
        self
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, scalar: f64) -> Polynomial {
        self.scalar_mul(scalar)
    }
}

impl Mul<Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, polynomial: Polynomial) -> Polynomial {
        polynomial * self
    }
}

impl MulAssign<f64> for Polynomial {
    fn mul_assign(&mut self, scalar: f64) {
        self.scalar_mul_mut(scalar);
    }
}

impl Div<f64> for Polynomial {
    type Output = Self;

    fn div(mut self, scalar: f64) -> Self {
        self /= scalar;
        self
    }
}

impl Div<f64> for &Polynomial {
    type Output = Polynomial;

    fn div(self, scalar: f64) -> Polynomial {
        let mut quotient = Polynomial::with_capacity(self.degree + 1);
        quotient.set_scalar_quotient(self, scalar);
        quotient
    }
}

impl DivAssign<f64> for Polynomial {
    fn div_assign(&mut self, scalar: f64) {
        self.map_assign(|c| c / scalar);
    }
}

impl Div for Polynomial {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let (quotient, _) = self.divide(&other);
        quotient
    }
}

impl Rem for Polynomial {
    type Output = Self;

    fn rem(self, other: Self) -> Self {
        let (_, remainder) = self.divide(&other);
        remainder
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.map_assign(|c| -c);
        self
    }
}
