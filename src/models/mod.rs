// Plan data models and validation

pub mod distance;
pub mod goal_time;
pub mod pace;
pub mod plan;
pub mod validation;

pub use distance::*;
pub use goal_time::*;
pub use pace::*;
pub use plan::*;
pub use validation::*;
