mod actions;
mod config;
mod logger;
mod reducer;
mod scenario;

use anyhow::Result;
use config::CounterConfig;

fn main() -> Result<()> {
    logger::init();

    log::info!("Starting redux-counter");

    let config = CounterConfig::load();

    let actions = scenario::decode_actions(&config.actions)?;
    let subscriber_actions = scenario::decode_actions(&config.subscriber_actions)?;

    log::info!("Store with initial state {}", config.initial_state);
    let states = scenario::run_with_initial_state(config.initial_state, &actions);
    log::debug!("Recorded states: {:?}", states);

    log::info!("Store with default state and a subscriber");
    let observed = scenario::run_with_subscriber(&subscriber_actions);
    log::debug!("Observed states: {:?}", observed);

    log::info!("Exiting redux-counter");
    Ok(())
}
