/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{BuildingConfig, SimulationConfig};
use crate::elevator::{Car, DEFAULT_STEP_LIMIT_FACTOR};
use crate::error::{DispatchError, DispatchResult};
use crate::shared::{CarStatus, CarTrace, Direction, Trip};

/// A car already carrying more riders than this to the requested floor takes the new rider too.
pub const LOAD_AFFINITY_THRESHOLD: usize = 7;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    // Nearest car heading the requested direction
    Nearest(usize),
    // Car already taking many riders to the same floor
    Consolidated(usize),
    // No car heads the requested direction, nearest car overall
    Fallback(usize),
}

impl Selection {
    pub fn car_id(&self) -> usize {
        match *self {
            Selection::Nearest(id) | Selection::Consolidated(id) | Selection::Fallback(id) => id,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the fleet and decides which car serves each pick-up request.
 *
 * Cars are driven one after the other, each until it has no trips left. Cars never
 * interact, so the order only affects the order of the combined trace.
 *
 * # Fields
 * - `cars`:        The fleet, indexed by car id.
 * - `top_floor`:   Highest floor of the building.
 */
#[derive(Debug, Clone)]
pub struct Dispatcher {
    cars: Vec<Car>,
    top_floor: u8,
}

impl Dispatcher {
    pub fn new(n_cars: usize, top_floor: u8) -> DispatchResult<Dispatcher> {
        Dispatcher::with_step_limit(n_cars, top_floor, DEFAULT_STEP_LIMIT_FACTOR)
    }

    pub fn with_step_limit(
        n_cars: usize,
        top_floor: u8,
        step_limit_factor: usize,
    ) -> DispatchResult<Dispatcher> {
        if n_cars == 0 {
            return Err(DispatchError::InvalidConfiguration(
                "a building needs at least one car".to_string(),
            ));
        }
        if step_limit_factor == 0 {
            return Err(DispatchError::InvalidConfiguration(
                "step limit factor must be positive".to_string(),
            ));
        }

        let cars = (0..n_cars)
            .map(|id| Car::new(id, top_floor, step_limit_factor))
            .collect::<Vec<Car>>();

        info!(
            "Dispatcher managing {} cars over floors 0..={}",
            n_cars, top_floor
        );
        Ok(Dispatcher { cars, top_floor })
    }

    pub fn from_config(
        building: &BuildingConfig,
        simulation: &SimulationConfig,
    ) -> DispatchResult<Dispatcher> {
        Dispatcher::with_step_limit(
            building.n_cars,
            building.top_floor,
            simulation.step_limit_factor,
        )
    }

    pub fn n_cars(&self) -> usize {
        self.cars.len()
    }

    pub fn top_floor(&self) -> u8 {
        self.top_floor
    }

    pub fn car(&self, car_id: usize) -> DispatchResult<&Car> {
        self.cars
            .get(car_id)
            .ok_or(DispatchError::InvalidCarId(car_id))
    }

    /// Someone pressed the pick-up button on `origin` and wants to go to `destination`.
    /// Returns the id of the car that will serve them.
    pub fn request_pickup(
        &mut self,
        rider_id: &str,
        origin: u8,
        destination: u8,
    ) -> DispatchResult<usize> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;

        let selection = self.select_car(origin, destination);
        let car_id = selection.car_id();
        debug!(
            "{} ({} -> {}) goes to car {} ({:?})",
            rider_id, origin, destination, car_id, selection
        );

        self.cars[car_id].assign(Trip::new(rider_id, origin, destination));
        Ok(car_id)
    }

    /// Maintenance override of a car's floor and heading.
    pub fn update(&mut self, car_id: usize, floor: u8, direction: Direction) -> DispatchResult<()> {
        let car = self
            .cars
            .get_mut(car_id)
            .ok_or(DispatchError::InvalidCarId(car_id))?;
        car.force_reposition(floor, direction)
    }

    /**
     * Chooses the car for a request.
     *
     * Among the cars heading the way the rider wants to go, the nearest one wins. If one of
     * those cars already takes more than `LOAD_AFFINITY_THRESHOLD` riders to the same
     * destination, it wins instead. When no car heads that way, the nearest car overall is used.
     * Ties go to the lowest car id.
     */
    pub fn select_car(&self, origin: u8, destination: u8) -> Selection {
        let direction = Direction::of_trip(origin, destination);

        let nearest = self
            .cars_heading(direction)
            .min_by_key(|car| (car.position().abs_diff(origin), car.id()))
            .map(Car::id);

        let nearest = match nearest {
            Some(car_id) => car_id,
            None => {
                let car_id = self
                    .cars
                    .iter()
                    .min_by_key(|car| (car.position().abs_diff(origin), car.id()))
                    .map(Car::id)
                    .unwrap_or(0);
                warn!(
                    "No car heading {}, falling back to nearest car {}",
                    direction, car_id
                );
                return Selection::Fallback(car_id);
            }
        };

        let mut busiest = None;
        let mut max_load = 0;
        for car in self.cars_heading(direction) {
            let load = car
                .active_trips()
                .iter()
                .filter(|trip| trip.destination() == destination)
                .count();
            if load > max_load {
                busiest = Some(car.id());
                max_load = load;
            }
        }

        match busiest {
            Some(car_id) if max_load > LOAD_AFFINITY_THRESHOLD => {
                Selection::Consolidated(car_id)
            }
            _ => Selection::Nearest(nearest),
        }
    }

    /// Runs every car until it has no trips left and returns what they did.
    pub fn run_all_to_quiescence(&mut self) -> DispatchResult<Vec<CarTrace>> {
        for car in self.cars.iter_mut() {
            car.run_to_quiescence()?;
        }
        info!("All {} cars are idle", self.cars.len());
        Ok(self.trace())
    }

    pub fn status(&self) -> Vec<CarStatus> {
        self.cars.iter().map(Car::status).collect()
    }

    pub fn trace(&self) -> Vec<CarTrace> {
        self.cars
            .iter()
            .map(|car| CarTrace {
                car_id: car.id(),
                entries: car.trace().to_vec(),
            })
            .collect()
    }

    fn cars_heading(&self, direction: Direction) -> impl Iterator<Item = &Car> + '_ {
        self.cars
            .iter()
            .filter(move |car| car.heading() == direction)
    }

    fn check_floor(&self, floor: u8) -> DispatchResult<()> {
        if floor > self.top_floor {
            return Err(DispatchError::InvalidFloor {
                floor,
                top_floor: self.top_floor,
            });
        }
        Ok(())
    }
}
