pub mod momentum;
pub mod trend;
pub mod volume;

pub use momentum::*;
pub use trend::*;
pub use volume::*;
