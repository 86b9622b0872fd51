//! Core models, chart and pagination logic, and logging setup.

pub mod chart;
pub mod logging;
pub mod models;
pub mod pagination;

pub use chart::generate_y_axis;
pub use models::{PaginationToken, RevenueSample, RobotOutput, YAxis};
pub use pagination::{PaginationRequest, generate_pagination};
