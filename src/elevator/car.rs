/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, trace, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::{DispatchError, DispatchResult};
use crate::shared::{CarStatus, Direction, RiderState, TraceEntry, Trip};

/// Steps allowed per floor per trip before a car is declared stuck.
pub const DEFAULT_STEP_LIMIT_FACTOR: usize = 4;

/**
 * One elevator car and its movement state machine.
 *
 * The car owns the trips the dispatcher has handed to it and moves floor by floor,
 * boarding and dropping off riders, until none are left. Every action it performs is
 * appended to its trace, at most once per rider and action.
 *
 * # Fields
 * - `id`:                  Stable index of the car in the fleet.
 * - `floor`:               Current floor, always within `0..=top_floor`.
 * - `top_floor`:           Highest floor of the building.
 * - `direction`:           Current heading. A car is never stopped, it is heading up or down.
 * - `active_trips`:        Trips assigned and not yet disembarked, in assignment order.
 * - `trace`:               Deduplicated record of what the car has done.
 * - `step_limit_factor`:   Scales the step budget of `run_to_quiescence`.
 */
#[derive(Debug, Clone)]
pub struct Car {
    id: usize,
    floor: u8,
    top_floor: u8,
    direction: Direction,
    active_trips: Vec<Trip>,
    trace: Vec<TraceEntry>,
    step_limit_factor: usize,
}

impl Car {
    pub fn new(id: usize, top_floor: u8, step_limit_factor: usize) -> Car {
        Car {
            id,
            floor: 0,
            top_floor,
            direction: Direction::Up,
            active_trips: Vec::new(),
            trace: Vec::new(),
            step_limit_factor: step_limit_factor.max(1),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> u8 {
        self.floor
    }

    pub fn heading(&self) -> Direction {
        self.direction
    }

    pub fn top_floor(&self) -> u8 {
        self.top_floor
    }

    pub fn active_trips(&self) -> &[Trip] {
        &self.active_trips
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn is_idle(&self) -> bool {
        self.active_trips.is_empty()
    }

    pub fn status(&self) -> CarStatus {
        CarStatus {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
            trips: self.active_trips.iter().map(Trip::summary).collect(),
        }
    }

    /// Moves the car without going through trip logic, like a technician with a master key.
    pub fn force_reposition(&mut self, floor: u8, direction: Direction) -> DispatchResult<()> {
        if floor > self.top_floor {
            return Err(DispatchError::InvalidFloor {
                floor,
                top_floor: self.top_floor,
            });
        }
        info!(
            "Car {} repositioned from floor {} ({}) to floor {} ({})",
            self.id, self.floor, self.direction, floor, direction
        );
        self.floor = floor;
        self.direction = direction;
        Ok(())
    }

    pub fn assign(&mut self, trip: Trip) {
        debug!(
            "Car {} assigned {} ({} -> {})",
            self.id,
            trip.rider_id(),
            trip.origin(),
            trip.destination()
        );
        self.active_trips.push(trip);
    }

    /// Drives the car until every assigned rider has been dropped off.
    pub fn run_to_quiescence(&mut self) -> DispatchResult<()> {
        let step_limit = self.step_limit_factor
            * (self.top_floor as usize + 1)
            * (self.active_trips.len() + 1);
        let mut steps = 0;

        while !self.active_trips.is_empty() {
            if steps >= step_limit {
                warn!(
                    "Car {} gave up at floor {} with {} trips left",
                    self.id,
                    self.floor,
                    self.active_trips.len()
                );
                return Err(DispatchError::SimulationDidNotConverge {
                    car_id: self.id,
                    steps,
                });
            }
            self.step();
            steps += 1;
        }

        info!(
            "Car {} finished after {} steps at floor {} going {}",
            self.id, steps, self.floor, self.direction
        );
        Ok(())
    }

    /// One cycle: serve the riders at this floor, then move unless someone still has to get off here.
    pub fn step(&mut self) {
        self.serve_current_floor();
        if !self.has_riders_leaving_here() {
            self.advance();
        }
    }

    pub fn serve_current_floor(&mut self) {
        let floor = self.floor;
        let direction = self.direction;
        let car_id = self.id;
        let trace = &mut self.trace;

        for trip in self.active_trips.iter_mut() {
            if trip.origin() == floor && trip.board() {
                trace!("Car {}: {} boards at floor {}", car_id, trip.rider_id(), floor);
            }
            record_step(trace, TraceEntry::record(trip, floor, direction));

            if trip.destination() == floor && trip.disembark() {
                trace!("Car {}: {} gets off at floor {}", car_id, trip.rider_id(), floor);
                record_step(trace, TraceEntry::record(trip, floor, direction));
            }
        }

        // Removed after the pass so no trip is skipped
        self.active_trips
            .retain(|trip| trip.state() != RiderState::Disembarked);
    }

    pub fn advance(&mut self) {
        let from = self.floor;
        match self.direction {
            Direction::Up if self.floor >= self.top_floor => {
                self.direction = Direction::Down;
                self.floor = self.floor.saturating_sub(1);
            }
            Direction::Down if self.floor == 0 => {
                self.direction = Direction::Up;
                self.floor = self.floor.saturating_add(1).min(self.top_floor);
            }
            _ => self.floor = self.next_stop(),
        }
        trace!(
            "Car {} moved {} -> {} heading {}",
            self.id,
            from,
            self.floor,
            self.direction
        );
    }

    /**
     * Picks the next floor to visit.
     *
     * By default the car moves one floor in its heading. If a rider is waiting above the car,
     * it jumps to the nearest such floor, unless a rider on board wants to get off on the way.
     * With nobody waiting above, the nearest drop-off above the car is used instead.
     */
    pub fn next_stop(&self) -> u8 {
        let default = match self.direction {
            Direction::Up => self.floor.saturating_add(1),
            Direction::Down => self.floor.saturating_sub(1),
        };

        let pickup = self
            .active_trips
            .iter()
            .filter(|trip| trip.state() == RiderState::Waiting && trip.origin() > self.floor)
            .map(Trip::origin)
            .min();

        let drop_off = self
            .active_trips
            .iter()
            .filter(|trip| trip.state() == RiderState::Aboard && trip.destination() > self.floor)
            .map(Trip::destination)
            .filter(|&floor| pickup.map_or(true, |pickup| floor < pickup))
            .min();

        drop_off.or(pickup).unwrap_or(default).min(self.top_floor)
    }

    fn has_riders_leaving_here(&self) -> bool {
        self.active_trips.iter().any(|trip| {
            trip.destination() == self.floor && trip.state() == RiderState::Aboard
        })
    }
}

fn record_step(trace: &mut Vec<TraceEntry>, entry: TraceEntry) {
    if !trace.iter().any(|recorded| recorded.same_step(&entry)) {
        trace.push(entry);
    }
}
