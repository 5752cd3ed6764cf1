use naive_dense::helpers::evaluate_model;
use naive_dense::train::{fit, one_training_step};
use naive_dense::{Activation, NaiveDense};
use ndarray::{array, Array1, Array2};

// Two well separated classes on two features.
fn toy_dataset() -> (Array2<f64>, Array1<u8>) {
    let images = array![
        [1.0, 0.0],
        [0.9, 0.1],
        [0.8, 0.0],
        [0.0, 1.0],
        [0.1, 0.9],
        [0.0, 0.8],
    ];
    let labels = array![0u8, 0, 0, 1, 1, 1];
    (images, labels)
}

#[test]
fn test_step_returns_nonnegative_loss() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 42);

    let loss = one_training_step(&mut model, images.view(), labels.view());
    assert!(loss >= 0.0, "cross entropy loss was {}", loss);
    assert!(loss.is_finite());
}

#[test]
fn test_step_preserves_parameter_shapes() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 42);

    let w_shape = model.w.raw_dim();
    let b_shape = model.b.raw_dim();
    one_training_step(&mut model, images.view(), labels.view());

    assert_eq!(model.w.raw_dim(), w_shape);
    assert_eq!(model.b.raw_dim(), b_shape);
}

#[test]
fn test_step_updates_parameters() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 42);

    let w_before = model.w.clone();
    one_training_step(&mut model, images.view(), labels.view());
    assert_ne!(model.w, w_before);
}

#[test]
fn test_repeated_steps_reduce_loss() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 42);

    let first = one_training_step(&mut model, images.view(), labels.view());
    let mut last = first;
    for _ in 0..500 {
        last = one_training_step(&mut model, images.view(), labels.view());
    }
    assert!(
        last < first,
        "loss did not decrease: first {} last {}",
        first,
        last
    );
}

#[test]
fn test_fit_zero_epochs_is_a_no_op() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 42);

    let w_before = model.w.clone();
    let b_before = model.b.clone();
    fit(&mut model, &images, &labels, 0, 2);

    assert_eq!(model.w, w_before);
    assert_eq!(model.b, b_before);
}

#[test]
fn test_fit_runs_all_batches() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 42);

    let w_before = model.w.clone();
    fit(&mut model, &images, &labels, 3, 4);
    assert_ne!(model.w, w_before);
}

#[test]
fn test_evaluate_model_on_known_weights() {
    let mut model = NaiveDense::new(2, 2, Activation::Softmax, 0);
    // Identity-ish weights make the prediction follow the larger feature.
    model.w = array![[5.0, 0.0], [0.0, 5.0]];
    model.b = Array1::zeros(2);

    let (images, labels) = toy_dataset();
    let accuracy = evaluate_model(&model, &images, &labels);
    assert_eq!(accuracy, 1.0);
}

#[test]
fn test_relu_step_is_finite() {
    let (images, labels) = toy_dataset();
    let mut model = NaiveDense::new(2, 2, Activation::Relu, 42);

    let loss = one_training_step(&mut model, images.view(), labels.view());
    assert!(loss.is_finite());
    assert!(loss >= 0.0);
    assert!(model.w.iter().all(|v| v.is_finite()));
}
