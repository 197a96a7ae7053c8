pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{sigmoid, sigmoid_derivative};
pub use layers::dense::Layer;
pub use network::network::{Activations, Network};
pub use network::backprop::Deltas;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::loop_fn::{train, TrainOutcome, TrainStatus};
pub use train::sink::{JsonSink, NoopSink, ProgressSink, TracingSink};
pub use train::train_config::{ErrorMetric, TrainConfig};
pub use train::training_set::TrainingSet;
pub use error::{Error, Result};
