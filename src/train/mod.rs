pub mod epoch_report;
pub mod loop_fn;
pub mod sink;
pub mod train_config;
pub mod trainer;
pub mod training_set;

pub use epoch_report::EpochReport;
pub use loop_fn::{train, TrainOutcome, TrainStatus};
pub use sink::{JsonSink, NoopSink, ProgressSink, TracingSink};
pub use train_config::{ErrorMetric, TrainConfig};
pub use trainer::train_step;
pub use training_set::TrainingSet;
