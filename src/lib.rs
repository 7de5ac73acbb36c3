/* Modules */
pub mod config;
pub mod coordinator;
pub mod elevator;
pub mod error;
pub mod report;
pub mod shared;

pub use coordinator::Dispatcher;
pub use elevator::Car;
pub use error::DispatchError;
pub use shared::{CarStatus, CarTrace, Direction, RiderState, TraceEntry, Trip};
