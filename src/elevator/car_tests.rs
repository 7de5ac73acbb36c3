/*
 * Unit tests for the car module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_car_init
 * - test_car_force_reposition
 * - test_car_force_reposition_out_of_building
 * - test_trip_state_only_moves_forward
 * - test_car_single_rider_trace
 * - test_car_bounces_only_at_top_floor
 * - test_car_bounces_at_ground_floor
 * - test_car_same_floor_trip
 * - test_car_single_floor_building
 * - test_next_stop_drop_off_before_pickup
 * - test_next_stop_default_when_nothing_above
 * - test_car_floor_stays_in_building
 * - test_car_trace_has_no_duplicates
 * - test_car_rider_states_in_order
 * - test_car_gives_up_on_unreachable_trip
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use crate::elevator::{Car, DEFAULT_STEP_LIMIT_FACTOR};
    use crate::error::DispatchError;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::RiderState::{Aboard, Disembarked, Waiting};
    use crate::shared::{Direction, RiderState, TraceEntry, Trip};

    fn setup_car(top_floor: u8) -> Car {
        Car::new(0, top_floor, DEFAULT_STEP_LIMIT_FACTOR)
    }

    fn entry(
        floor: u8,
        direction: Direction,
        rider: &str,
        action: RiderState,
        origin: u8,
        destination: u8,
    ) -> TraceEntry {
        TraceEntry {
            floor,
            direction,
            rider_id: rider.to_string(),
            action,
            origin,
            destination,
        }
    }

    #[test]
    fn test_car_init() {
        // Purpose: Verify that a new car waits on the ground floor heading up with nothing to do

        // Arrange
        let car = setup_car(5);

        // Assert
        assert_eq!(car.id(), 0);
        assert_eq!(car.position(), 0);
        assert_eq!(car.heading(), Up);
        assert_eq!(car.top_floor(), 5);
        assert!(car.is_idle());
        assert!(car.trace().is_empty());
    }

    #[test]
    fn test_car_force_reposition() {
        // Purpose: Verify that the maintenance override moves the car without touching its trips

        // Arrange
        let mut car = setup_car(5);
        car.assign(Trip::new("A", 1, 2));

        // Act
        let result = car.force_reposition(4, Down);

        // Assert
        assert_eq!(result, Ok(()));
        assert_eq!(car.position(), 4);
        assert_eq!(car.heading(), Down);
        assert_eq!(car.active_trips().len(), 1);
        assert_eq!(car.active_trips()[0].state(), Waiting);
    }

    #[test]
    fn test_car_force_reposition_out_of_building() {
        // Purpose: Verify that the override refuses floors above the top floor

        // Arrange
        let mut car = setup_car(5);

        // Act
        let result = car.force_reposition(6, Down);

        // Assert
        assert_eq!(
            result,
            Err(DispatchError::InvalidFloor {
                floor: 6,
                top_floor: 5
            })
        );
        assert_eq!(car.position(), 0);
        assert_eq!(car.heading(), Up);
    }

    #[test]
    fn test_trip_state_only_moves_forward() {
        // Purpose: Verify that a rider can't get off before boarding, nor board twice

        // Arrange
        let mut trip = Trip::new("A", 2, 4);

        // Act + Assert
        assert_eq!(trip.direction(), Up);
        assert!(!trip.disembark());
        assert_eq!(trip.state(), Waiting);
        assert!(trip.board());
        assert!(!trip.board());
        assert_eq!(trip.state(), Aboard);
        assert!(trip.disembark());
        assert!(!trip.board());
        assert!(!trip.disembark());
        assert_eq!(trip.state(), Disembarked);
    }

    #[test]
    fn test_car_single_rider_trace() {
        // Purpose: Verify the step list of one rider going from floor 2 to floor 4

        // Arrange
        let mut car = setup_car(5);
        car.assign(Trip::new("A", 2, 4));

        // Act
        let result = car.run_to_quiescence();

        // Assert
        assert_eq!(result, Ok(()));
        assert!(car.is_idle());
        assert_eq!(
            car.trace(),
            &[
                entry(0, Up, "A", Waiting, 2, 4),
                entry(2, Up, "A", Aboard, 2, 4),
                entry(4, Up, "A", Disembarked, 2, 4),
            ]
        );
        // The cycle that drops the rider off still moves the car one floor on
        assert_eq!(car.position(), 5);
        assert_eq!(car.heading(), Up);
    }

    #[test]
    fn test_car_bounces_only_at_top_floor() {
        // Purpose: Verify that an idle car keeps heading up until it stands on the top floor

        // Arrange
        let mut car = setup_car(3);

        // Act + Assert
        car.advance();
        assert_eq!((car.position(), car.heading()), (1, Up));
        car.advance();
        assert_eq!((car.position(), car.heading()), (2, Up));
        car.advance();
        assert_eq!((car.position(), car.heading()), (3, Up));
        car.advance();
        assert_eq!((car.position(), car.heading()), (2, Down));
        car.advance();
        assert_eq!((car.position(), car.heading()), (1, Down));
    }

    #[test]
    fn test_car_bounces_at_ground_floor() {
        // Purpose: Verify that a car heading down turns around on floor 0

        // Arrange
        let mut car = setup_car(3);
        car.force_reposition(1, Down).unwrap();

        // Act + Assert
        car.advance();
        assert_eq!((car.position(), car.heading()), (0, Down));
        car.advance();
        assert_eq!((car.position(), car.heading()), (1, Up));
    }

    #[test]
    fn test_car_same_floor_trip() {
        // Purpose: Verify that a rider whose destination is the origin gets on and off at once

        // Arrange
        let mut car = setup_car(5);
        let trip = Trip::new("S", 3, 3);
        assert_eq!(trip.direction(), Down);
        car.assign(trip);

        // Act
        let result = car.run_to_quiescence();

        // Assert
        assert_eq!(result, Ok(()));
        assert!(car.is_idle());
        assert_eq!(
            car.trace(),
            &[
                entry(0, Up, "S", Waiting, 3, 3),
                entry(3, Up, "S", Aboard, 3, 3),
                entry(3, Up, "S", Disembarked, 3, 3),
            ]
        );
    }

    #[test]
    fn test_car_single_floor_building() {
        // Purpose: Verify that a car in a one-floor building never leaves floor 0

        // Arrange
        let mut car = setup_car(0);
        car.assign(Trip::new("Z", 0, 0));

        // Act
        let result = car.run_to_quiescence();
        car.advance();
        car.advance();

        // Assert
        assert_eq!(result, Ok(()));
        assert_eq!(car.position(), 0);
        assert_eq!(car.trace().len(), 2);
        assert_eq!(car.trace()[1].action, Disembarked);
    }

    #[test]
    fn test_next_stop_drop_off_before_pickup() {
        // Purpose: Verify that the car stops for a rider getting off before fetching the next one

        // Arrange
        let mut car = setup_car(10);
        car.assign(Trip::new("A", 0, 3));
        car.assign(Trip::new("B", 5, 8));

        // Act
        car.serve_current_floor();
        let with_drop_off = car.next_stop();
        car.force_reposition(3, Up).unwrap();
        car.serve_current_floor();
        let without_drop_off = car.next_stop();

        // Assert
        assert_eq!(with_drop_off, 3);
        assert_eq!(without_drop_off, 5);
        assert_eq!(car.active_trips().len(), 1);
        assert_eq!(car.active_trips()[0].rider_id(), "B");
    }

    #[test]
    fn test_next_stop_default_when_nothing_above() {
        // Purpose: Verify that the car moves one floor at a time when nobody is waiting above it

        // Arrange
        let mut car = setup_car(10);
        car.force_reposition(5, Up).unwrap();
        car.assign(Trip::new("A", 2, 1));

        // Act
        let going_up = car.next_stop();
        car.force_reposition(5, Down).unwrap();
        let going_down = car.next_stop();

        // Assert
        assert_eq!(going_up, 6);
        assert_eq!(going_down, 4);
    }

    #[test]
    fn test_car_floor_stays_in_building() {
        // Purpose: Verify that the floor never leaves 0..=top_floor while the car works

        // Arrange
        let mut car = setup_car(6);
        car.force_reposition(4, Down).unwrap();
        for (rider, origin, destination) in [("A", 6, 0), ("B", 0, 6), ("C", 3, 5), ("D", 5, 1), ("E", 2, 2)] {
            car.assign(Trip::new(rider, origin, destination));
        }

        // Act + Assert
        let mut steps = 0;
        while !car.is_idle() {
            car.step();
            steps += 1;
            assert!(car.position() <= car.top_floor());
            assert!(steps < 1000, "car never finished");
        }
    }

    #[test]
    fn test_car_trace_has_no_duplicates() {
        // Purpose: Verify that each rider action is recorded at most once

        // Arrange
        let mut car = setup_car(8);
        for (rider, origin, destination) in [("A", 1, 7), ("B", 7, 1), ("C", 4, 4), ("D", 8, 0), ("E", 0, 8)] {
            car.assign(Trip::new(rider, origin, destination));
        }

        // Act
        car.run_to_quiescence().unwrap();

        // Assert
        let trace = car.trace();
        for (i, a) in trace.iter().enumerate() {
            for b in trace.iter().skip(i + 1) {
                assert!(!a.same_step(b), "duplicate trace entry {:?}", a);
            }
        }
        assert_eq!(trace.iter().filter(|e| e.action == Disembarked).count(), 5);
    }

    #[test]
    fn test_car_rider_states_in_order() {
        // Purpose: Verify that every rider boards before getting off, and gets off at the destination

        // Arrange
        let mut car = setup_car(9);
        let trips = [("A", 0, 9), ("B", 9, 0), ("C", 3, 6), ("D", 6, 3), ("E", 5, 5)];
        for (rider, origin, destination) in trips {
            car.assign(Trip::new(rider, origin, destination));
        }

        // Act
        car.run_to_quiescence().unwrap();

        // Assert
        for (rider, origin, destination) in trips {
            let actions = car
                .trace()
                .iter()
                .filter(|e| e.rider_id == rider)
                .collect::<Vec<&TraceEntry>>();

            assert!(actions.windows(2).all(|w| w[0].action < w[1].action));
            let boarded = actions.iter().find(|e| e.action == Aboard).unwrap();
            let left = actions.iter().find(|e| e.action == Disembarked).unwrap();
            assert_eq!(boarded.floor, origin);
            assert_eq!(left.floor, destination);
        }
    }

    #[test]
    fn test_car_gives_up_on_unreachable_trip() {
        // Purpose: Verify that a trip the car can never reach ends the run with an error instead of looping

        // Arrange
        let mut car = setup_car(3);
        car.assign(Trip::new("X", 7, 1));

        // Act
        let result = car.run_to_quiescence();

        // Assert
        assert_eq!(
            result,
            Err(DispatchError::SimulationDidNotConverge { car_id: 0, steps: 32 })
        );
        assert!(car.position() <= 3);
        assert_eq!(car.active_trips().len(), 1);
    }
}
