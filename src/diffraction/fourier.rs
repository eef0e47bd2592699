//! Two-dimensional discrete Fourier transforms.
//!
//! Both transforms run a 1-D FFT over every row and then over every column.
//! The inverse carries the `1 / (rows * cols)` factor so that
//! `ifft2(fft2(x)) == x`.

use ndarray::Array2;
use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

fn transform(data: &mut Array2<Complex<f64>>, direction: FftDirection) {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return;
    }
    let mut planner = FftPlanner::<f64>::new();

    let row_fft = planner.plan_fft(cols, direction);
    let mut buffer = vec![Complex::new(0.0, 0.0); cols];
    for mut row in data.rows_mut() {
        for (b, v) in buffer.iter_mut().zip(row.iter()) {
            *b = *v;
        }
        row_fft.process(&mut buffer);
        for (v, b) in row.iter_mut().zip(buffer.iter()) {
            *v = *b;
        }
    }

    let col_fft = planner.plan_fft(rows, direction);
    let mut buffer = vec![Complex::new(0.0, 0.0); rows];
    for mut column in data.columns_mut() {
        for (b, v) in buffer.iter_mut().zip(column.iter()) {
            *b = *v;
        }
        col_fft.process(&mut buffer);
        for (v, b) in column.iter_mut().zip(buffer.iter()) {
            *v = *b;
        }
    }
}

/// Forward transform of a real image.
pub fn fft2(data: &Array2<f64>) -> Array2<Complex<f64>> {
    let mut spectrum = data.mapv(|v| Complex::new(v, 0.0));
    transform(&mut spectrum, FftDirection::Forward);
    spectrum
}

/// Normalized inverse transform.
pub fn ifft2(spectrum: &Array2<Complex<f64>>) -> Array2<Complex<f64>> {
    let mut data = spectrum.clone();
    transform(&mut data, FftDirection::Inverse);
    let scale = 1.0 / data.len().max(1) as f64;
    data.mapv_inplace(|c| c * scale);
    data
}

/// Diffracted intensity `|F|^2`.
pub fn intensity(spectrum: &Array2<Complex<f64>>) -> Array2<f64> {
    spectrum.mapv(|c| c.norm_sqr())
}

/// Pair distribution function: the magnitude of the inverse transform of
/// the intensity.
pub fn pair_distribution(intensity: &Array2<f64>) -> Array2<f64> {
    let spectrum = intensity.mapv(|v| Complex::new(v, 0.0));
    ifft2(&spectrum).mapv(|c| c.norm())
}
