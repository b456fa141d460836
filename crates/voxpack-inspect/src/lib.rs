pub mod report;

pub use report::{inspect, InspectError, InspectReport};
