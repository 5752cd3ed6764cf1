use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::layer::NaiveDense;

pub fn argmax(row: ArrayView1<f64>) -> usize {
    let mut best = 0;
    for (i, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = i;
        }
    }
    best
}

/// Fraction of samples whose predicted class matches the label.
pub fn evaluate_model(model: &NaiveDense, images: &Array2<f64>, labels: &Array1<u8>) -> f64 {
    assert_eq!(images.nrows(), labels.len(), "images and labels length mismatch");

    let predictions = model.forward(images.view());
    let mut correct = 0;
    for (row, &label) in predictions.axis_iter(Axis(0)).zip(labels.iter()) {
        if argmax(row) == label as usize {
            correct += 1;
        }
    }
    correct as f64 / images.nrows() as f64
}

/// Shuffles the dataset with a fixed seed and splits it into train and test
/// partitions. Returns (train_images, train_labels, test_images, test_labels).
pub fn split_dataset(
    images: &Array2<f64>,
    labels: &Array1<u8>,
    train_ratio: f64,
) -> (Array2<f64>, Array1<u8>, Array2<f64>, Array1<u8>) {
    assert_eq!(images.nrows(), labels.len(), "images and labels length mismatch");

    let mut indices: Vec<usize> = (0..images.nrows()).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    indices.shuffle(&mut rng);

    let train_size = (train_ratio * images.nrows() as f64).round() as usize;
    let (train_idx, test_idx) = indices.split_at(train_size);

    (
        images.select(Axis(0), train_idx),
        labels.select(Axis(0), train_idx),
        images.select(Axis(0), test_idx),
        labels.select(Axis(0), test_idx),
    )
}
