use std::fmt::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{CarStatus, CarTrace, RiderState};

/***************************************/
/*             Public API              */
/***************************************/

// Human readable fleet status, one paragraph per car
pub fn render_status(top_floor: u8, status: &[CarStatus]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "STATUS OF {} CARS SERVING FLOORS 0..={}",
        status.len(),
        top_floor
    );
    let _ = writeln!(out, "{}", "=".repeat(50));

    for car in status.iter() {
        if car.is_idle() {
            let _ = writeln!(out, "* Car {} is on floor {}, stopped.", car.id, car.floor);
            continue;
        }
        let _ = writeln!(
            out,
            "* Car {} is on floor {}, going {}, with {} trips:",
            car.id,
            car.floor,
            car.direction,
            car.trips.len()
        );
        for trip in car.trips.iter() {
            let _ = writeln!(
                out,
                "  - {} is {} on floor {} and wants to go to floor {}.",
                trip.rider_id,
                trip.state.action(),
                trip.origin,
                trip.destination
            );
        }
    }
    out
}

// Step list of every car, in the order the steps were performed
pub fn render_trace(trace: &[CarTrace]) -> String {
    let mut out = String::new();
    for car in trace.iter() {
        let _ = writeln!(out, "Car {} step list", car.car_id);
        let _ = writeln!(out, "{}", "-".repeat(30));
        for entry in car.entries.iter() {
            let _ = match entry.action {
                RiderState::Waiting => writeln!(
                    out,
                    "Floor {}, going {}. {} is waiting on floor {} to go to floor {}.",
                    entry.floor, entry.direction, entry.rider_id, entry.origin, entry.destination
                ),
                RiderState::Aboard => writeln!(
                    out,
                    "Floor {}, going {}. {} is boarding.",
                    entry.floor, entry.direction, entry.rider_id
                ),
                RiderState::Disembarked => writeln!(
                    out,
                    "Floor {}, going {}. {} is disembarking on floor {}.",
                    entry.floor, entry.direction, entry.rider_id, entry.floor
                ),
            };
        }
    }
    out
}

/***************************************/
/*             Unit tests              */
/***************************************/
