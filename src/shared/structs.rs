/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction a rider travels from `origin` to `destination`. Equal floors count as Down.
    pub fn of_trip(origin: u8, destination: u8) -> Direction {
        if destination > origin {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiderState {
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "boarding")]
    Aboard,
    #[serde(rename = "disembarking")]
    Disembarked,
}

impl RiderState {
    pub fn action(&self) -> &'static str {
        match *self {
            RiderState::Waiting => "waiting",
            RiderState::Aboard => "boarding",
            RiderState::Disembarked => "disembarking",
        }
    }
}

/**
 * One rider's journey from `origin` to `destination`.
 *
 * A trip is created by the dispatcher and moved into exactly one car, which drops it
 * once the rider has disembarked. The rider state only moves forward:
 * `Waiting -> Aboard -> Disembarked`.
 *
 * # Fields
 * - `rider_id`:    Opaque rider identifier, used for tracing only.
 * - `origin`:      Floor where the pick-up button was pressed.
 * - `destination`: Floor the rider wants to reach.
 * - `direction`:   Requested direction, fixed at creation.
 * - `state`:       Where the rider currently is in the journey.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    rider_id: String,
    origin: u8,
    destination: u8,
    direction: Direction,
    state: RiderState,
}

impl Trip {
    pub fn new(rider_id: impl Into<String>, origin: u8, destination: u8) -> Trip {
        Trip {
            rider_id: rider_id.into(),
            origin,
            destination,
            direction: Direction::of_trip(origin, destination),
            state: RiderState::Waiting,
        }
    }

    pub fn rider_id(&self) -> &str {
        &self.rider_id
    }

    pub fn origin(&self) -> u8 {
        self.origin
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> RiderState {
        self.state
    }

    // Returns true if the rider got on, false if it was not waiting
    pub fn board(&mut self) -> bool {
        if self.state != RiderState::Waiting {
            return false;
        }
        self.state = RiderState::Aboard;
        true
    }

    // Returns true if the rider got off, false if it was not aboard
    pub fn disembark(&mut self) -> bool {
        if self.state != RiderState::Aboard {
            return false;
        }
        self.state = RiderState::Disembarked;
        true
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary {
            rider_id: self.rider_id.clone(),
            origin: self.origin,
            destination: self.destination,
            state: self.state,
        }
    }
}

/**
 * Immutable record of something a car did with a rider.
 *
 * Two entries are the same step when rider, action, origin and destination match;
 * the floor and direction only describe where the car was when it happened.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub floor: u8,
    pub direction: Direction,
    pub rider_id: String,
    pub action: RiderState,
    pub origin: u8,
    pub destination: u8,
}

impl TraceEntry {
    pub fn record(trip: &Trip, floor: u8, direction: Direction) -> TraceEntry {
        TraceEntry {
            floor,
            direction,
            rider_id: trip.rider_id.clone(),
            action: trip.state,
            origin: trip.origin,
            destination: trip.destination,
        }
    }

    pub fn same_step(&self, other: &TraceEntry) -> bool {
        self.rider_id == other.rider_id
            && self.action == other.action
            && self.origin == other.origin
            && self.destination == other.destination
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TripSummary {
    pub rider_id: String,
    pub origin: u8,
    pub destination: u8,
    pub state: RiderState,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarStatus {
    pub id: usize,
    pub floor: u8,
    pub direction: Direction,
    pub trips: Vec<TripSummary>,
}

impl CarStatus {
    pub fn is_idle(&self) -> bool {
        self.trips.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarTrace {
    pub car_id: usize,
    pub entries: Vec<TraceEntry>,
}
