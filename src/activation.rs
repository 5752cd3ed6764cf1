use ndarray::{Array2, Axis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relu,
    Sigmoid,
    Softmax,
}

impl Activation {
    pub fn activate(&self, input: &Array2<f64>) -> Array2<f64> {
        match self {
            Activation::Relu => input.mapv(|x| if x > 0.0 { x } else { 0.0 }),
            Activation::Sigmoid => input.mapv(|x| 1.0 / (1.0 + (-x).exp())),
            Activation::Softmax => {
                let mut out = input.clone();
                for mut row in out.axis_iter_mut(Axis(0)) {
                    let max = row.fold(f64::NEG_INFINITY, |m, &x| m.max(x));
                    row.mapv_inplace(|x| (x - max).exp());
                    let sum = row.sum();
                    row.mapv_inplace(|x| x / sum);
                }
                out
            }
        }
    }

    /// Elementwise derivative with respect to the pre-activation input.
    ///
    /// Not defined for softmax, whose gradient is handled jointly with the
    /// cross-entropy loss in the training step.
    pub fn derivative(&self, input: &Array2<f64>) -> Array2<f64> {
        match self {
            Activation::Relu => input.mapv(|x| if x > 0.0 { 1.0 } else { 0.0 }),
            Activation::Sigmoid => input.mapv(|x| {
                let s = 1.0 / (1.0 + (-x).exp());
                s * (1.0 - s)
            }),
            Activation::Softmax => {
                panic!("softmax derivative is folded into the cross entropy gradient")
            }
        }
    }
}
