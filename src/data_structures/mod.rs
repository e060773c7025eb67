pub mod distance;
pub mod matrix;
pub mod priority_queue;

pub use distance::Distance;
pub use matrix::DistanceMatrix;
pub use priority_queue::Frontier;
