/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("floor {floor} is outside the building (0..={top_floor})")]
    InvalidFloor { floor: u8, top_floor: u8 },

    #[error("no car with id {0}")]
    InvalidCarId(usize),

    #[error("car {car_id} still had trips after {steps} steps")]
    SimulationDidNotConverge { car_id: usize, steps: usize },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
