use naive_dense::helpers::{evaluate_model, split_dataset};
use naive_dense::mnist::MnistData;
use naive_dense::train::fit;
use naive_dense::{Activation, NaiveDense};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = MnistData::load_from_files(
        "./mnist/train-images-idx3-ubyte.gz",
        "./mnist/train-labels-idx1-ubyte.gz",
    )?;

    let (train_images, train_labels, test_images, test_labels) =
        split_dataset(&data.images, &data.labels, 0.8);

    let mut model = NaiveDense::new(28 * 28, 10, Activation::Softmax, 42);

    fit(&mut model, &train_images, &train_labels, 10, 128);

    let accuracy = evaluate_model(&model, &test_images, &test_labels);
    println!("Accuracy is: {}", accuracy);

    Ok(())
}
