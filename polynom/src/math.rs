pub mod fft;
pub mod other;
pub mod polynomial;
