use ndarray::{Array1, Array2, ArrayView2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::activation::Activation;

/// A single fully connected layer: `activation(input . w + b)`.
///
/// Both parameters are public and updated in place by the training step.
pub struct NaiveDense {
    pub w: Array2<f64>,
    pub b: Array1<f64>,
    pub activation: Activation,
}

impl NaiveDense {
    /// Weights start uniform in [0, 0.1), bias starts at zero.
    /// The same seed always produces the same initial weights.
    pub fn new(input_size: usize, output_size: usize, activation: Activation, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let w = Array2::random_using((input_size, output_size), Uniform::new(0.0, 1e-1), &mut rng);
        let b = Array1::zeros(output_size);
        Self { w, b, activation }
    }

    /// Forward pass over a batch of shape (m, input_size).
    ///
    /// Shape mismatches panic inside ndarray's own checks.
    pub fn forward(&self, input: ArrayView2<f64>) -> Array2<f64> {
        let z = input.dot(&self.w) + &self.b;
        self.activation.activate(&z)
    }

    pub fn input_size(&self) -> usize {
        self.w.nrows()
    }

    pub fn output_size(&self) -> usize {
        self.w.ncols()
    }
}
