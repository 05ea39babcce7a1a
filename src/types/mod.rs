pub mod events;
pub mod params;
pub mod window;

pub use events::{SearchStats, WorkerReport};
pub use params::{RecoveredParameters, SearchOutcome};
pub use window::SampleWindow;
