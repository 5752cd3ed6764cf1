pub mod activation;
pub mod batch;
pub mod helpers;
pub mod layer;
pub mod mnist;
pub mod train;

pub use activation::Activation;
pub use batch::BatchGenerator;
pub use layer::NaiveDense;
