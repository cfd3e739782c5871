pub mod engine;
pub mod report;

pub use engine::aggregate;
pub use report::{MonthCount, WorkerReport};
