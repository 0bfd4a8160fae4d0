// Services consumed by the presentation layer.
pub mod dashboard;
pub mod report;

pub use dashboard::Dashboard;
