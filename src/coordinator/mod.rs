pub mod dispatcher;

pub use dispatcher::Dispatcher;
pub use dispatcher::Selection;
pub use dispatcher::LOAD_AFFINITY_THRESHOLD;
