use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::activation::Activation;
use crate::batch::BatchGenerator;
use crate::layer::NaiveDense;

pub const LEARNING_RATE: f64 = 1e-3;

// Keeps ln() away from zero when a prediction collapses to exactly 0.
const EPSILON: f64 = 1e-15;

/// One forward/backward/update step over a batch.
///
/// Computes the mean sparse categorical cross entropy, its gradient with
/// respect to `w` and `b`, applies `param -= LEARNING_RATE * grad` in place
/// and returns the scalar loss.
pub fn one_training_step(
    model: &mut NaiveDense,
    images_batch: ArrayView2<f64>,
    labels_batch: ArrayView1<u8>,
) -> f64 {
    let m = images_batch.nrows() as f64;

    let z = images_batch.dot(&model.w) + &model.b;
    let predictions = model.activation.activate(&z);

    let mut total_loss = 0.0;
    for (i, &label) in labels_batch.iter().enumerate() {
        let p = predictions[[i, label as usize]].max(EPSILON);
        total_loss -= p.ln();
    }
    let average_loss = total_loss / m;

    // dL/dz. For softmax the cross entropy gradient collapses to
    // (predictions - onehot) / m; otherwise chain dL/dpred through the
    // elementwise activation derivative.
    let dz = match model.activation {
        Activation::Softmax => {
            let mut dz = predictions;
            for (i, &label) in labels_batch.iter().enumerate() {
                dz[[i, label as usize]] -= 1.0;
            }
            dz / m
        }
        _ => {
            let mut dpred = Array2::zeros(predictions.raw_dim());
            for (i, &label) in labels_batch.iter().enumerate() {
                let p = predictions[[i, label as usize]].max(EPSILON);
                dpred[[i, label as usize]] = -1.0 / (p * m);
            }
            dpred * model.activation.derivative(&z)
        }
    };

    let grad_w = images_batch.t().dot(&dz);
    let grad_b: Array1<f64> = dz.sum_axis(Axis(0));

    model.w.scaled_add(-LEARNING_RATE, &grad_w);
    model.b.scaled_add(-LEARNING_RATE, &grad_b);

    average_loss
}

/// Runs `epochs` full passes over the dataset, printing the epoch index and
/// the loss every 100 batches. No early stopping, no checkpointing.
pub fn fit(
    model: &mut NaiveDense,
    images: &Array2<f64>,
    labels: &Array1<u8>,
    epochs: usize,
    batch_size: usize,
) {
    for epoch_counter in 0..epochs {
        println!("Epoch {}", epoch_counter);
        let batch_generator = BatchGenerator::new(images, labels, batch_size);

        for (batch_counter, (images_batch, labels_batch)) in batch_generator.enumerate() {
            let loss = one_training_step(model, images_batch, labels_batch);

            if batch_counter % 100 == 0 {
                println!("loss at batch {}: {:.2}", batch_counter, loss);
            }
        }
    }
}
