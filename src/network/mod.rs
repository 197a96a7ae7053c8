pub mod backprop;
pub mod network;

pub use backprop::Deltas;
pub use network::{Activations, Network};
