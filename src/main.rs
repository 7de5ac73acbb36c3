/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;

/* Custom libraries */
use dispatch_sim::config;
use dispatch_sim::report;
use dispatch_sim::unwrap_or_exit;
use dispatch_sim::Dispatcher;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("dispatch-sim")
        .about("Simulates a fleet of elevator cars serving pick-up requests")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status and trace as JSON instead of text"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));
    let as_json = matches.is_present("json");

    // Create the fleet and hand out the pick-ups
    let mut dispatcher = unwrap_or_exit!(Dispatcher::from_config(
        &config.building,
        &config.simulation
    ));
    for pickup in config.pickup.iter() {
        unwrap_or_exit!(dispatcher.request_pickup(
            &pickup.rider,
            pickup.origin,
            pickup.destination
        ));
    }
    info!("Submitted {} pick-up requests", config.pickup.len());

    let status = dispatcher.status();
    if as_json {
        println!("{}", unwrap_or_exit!(serde_json::to_string_pretty(&status)));
    } else {
        println!("{}", report::render_status(dispatcher.top_floor(), &status));
    }

    // Drive every car until all riders are dropped off
    let trace = unwrap_or_exit!(dispatcher.run_all_to_quiescence());
    if as_json {
        println!("{}", unwrap_or_exit!(serde_json::to_string_pretty(&trace)));
    } else {
        println!("{}", report::render_trace(&trace));
    }
}
