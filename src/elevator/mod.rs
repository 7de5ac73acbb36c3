pub mod car;
pub mod car_tests;

pub use car::Car;
pub use car::DEFAULT_STEP_LIMIT_FACTOR;
