use std::f64::consts::PI;
use std::ops::Add;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Sub;

/// A complex number with `f64` real and imaginary parts.
///
/// Only the operations needed by the [FFT](fft) are provided.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `e^(iθ)`
    pub fn cis(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// ## Perform an FFT on a slice of complex numbers
///
/// The Fast Fourier Transform evaluates the polynomial whose coefficients are
/// `x` in the `n`-th roots of unity `e^(-2πik/n)`, where `n` is the length of
/// `x`. Polynomial multiplication over `f64` uses it to turn the convolution of
/// coefficient vectors into a point-wise product.
///
/// The implementation is the iterative radix-2 Cooley-Tukey scheme: a
/// bit-reversal permutation followed by `log₂(n)` rounds of butterflies.
///
/// The transform is performed in-place.
/// If called on an empty slice, does nothing.
///
/// For the inverse, see [iFFT][self::ifft].
///
/// # Panics
///
/// Panics if the length of the input slice is
/// - not a power of two
/// - larger than [`u32::MAX`]
pub fn fft(x: &mut [Complex]) {
    let log2_slice_len = checked_log2_len(x);
    fft_unchecked(x, -1.0, log2_slice_len);
}

/// ## Perform an inverse FFT on a slice of complex numbers
///
/// iFFT is the inverse [FFT][self::fft], so abstractly,
/// *ifft(values) = fft_conjugate(values) / n*.
///
/// This transform is performed in-place.
///
/// # Example
///
/// ```
/// # use polynom::math::fft::*;
/// let original_values = [1.0, 2.0, 3.0, 4.0].map(Complex::from);
/// let mut transformed_values = original_values;
/// fft(&mut transformed_values);
/// ifft(&mut transformed_values);
/// for (original, round_tripped) in original_values.iter().zip(&transformed_values) {
///     assert!((original.re - round_tripped.re).abs() < 1e-12);
///     assert!(round_tripped.im.abs() < 1e-12);
/// }
/// ```
///
/// # Panics
///
/// Panics if the length of the input slice is
/// - not a power of two
/// - larger than [`u32::MAX`]
pub fn ifft(x: &mut [Complex]) {
    let log2_slice_len = checked_log2_len(x);
    fft_unchecked(x, 1.0, log2_slice_len);

    if x.is_empty() {
        return;
    }
    let n_inv = 1.0 / x.len() as f64;
    for elem in x.iter_mut() {
        *elem = *elem * n_inv;
    }
}

fn checked_log2_len(x: &[Complex]) -> u32 {
    let slice_len = u32::try_from(x.len()).expect("slice should be no longer than u32::MAX");
    assert!(slice_len == 0 || slice_len.is_power_of_two());

    slice_len.checked_ilog2().unwrap_or(0)
}

/// Does _not_ check whether the passed-in log₂ of the slice length matches.
///
/// `direction` is the sign of the exponent of the roots of unity: `-1.0` for
/// the forward transform, `1.0` for the (unscaled) inverse.
#[expect(clippy::many_single_char_names)]
#[inline]
fn fft_unchecked(x: &mut [Complex], direction: f64, log2_slice_len: u32) {
    let slice_len = x.len() as u32;

    for k in 0..slice_len {
        let rk = bitreverse(k, log2_slice_len);
        if k < rk {
            x.swap(rk as usize, k as usize);
        }
    }

    let mut m = 1;
    for _ in 0..log2_slice_len {
        // w^j = e^(±iπj/m), each evaluated directly
        let angle = direction * PI / f64::from(m);
        let w_powers = (0..m)
            .map(|j| Complex::cis(angle * f64::from(j)))
            .collect::<Vec<_>>();

        let mut k = 0;
        while k < slice_len {
            for j in 0..m {
                let idx1 = (k + j) as usize;
                let idx2 = (k + j + m) as usize;
                let u = x[idx1];
                let mut v = x[idx2];
                v *= w_powers[j as usize];
                x[idx1] = u + v;
                x[idx2] = u - v;
            }

            k += 2 * m;
        }

        m *= 2;
    }
}

#[inline(always)]
fn bitreverse(mut k: u32, log2_n: u32) -> u32 {
    k = ((k & 0x55555555) << 1) | ((k & 0xaaaaaaaa) >> 1);
    k = ((k & 0x33333333) << 2) | ((k & 0xcccccccc) >> 2);
    k = ((k & 0x0f0f0f0f) << 4) | ((k & 0xf0f0f0f0) >> 4);
    k = ((k & 0x00ff00ff) << 8) | ((k & 0xff00ff00) >> 8);
    k = k.rotate_right(16);
    k >> ((32 - log2_n) & 0x1f)
}
