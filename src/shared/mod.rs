pub mod macros;
pub mod structs;

pub use structs::CarStatus;
pub use structs::CarTrace;
pub use structs::Direction;
pub use structs::RiderState;
pub use structs::TraceEntry;
pub use structs::Trip;
pub use structs::TripSummary;
