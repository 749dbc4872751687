//! Mark IV Brew Cycle
//!
//! Runs the controller against simulated hardware through a full brew,
//! then through a pot removed mid-brew.
//!
//! Key concepts:
//! - Two parallel regions reacting to one event stream
//! - A nested region that pauses and resumes brewing
//! - Observing the hardware through its bit encoding
//!
//! Run with: cargo run --example brew_cycle
//! More detail: RUST_LOG=mark4_controller=trace cargo run --example brew_cycle

use mark4_controller::mark4::{HwValue, Mark4Control, Mark4Error, Observation};

fn show(step: &str, control: &Mark4Control) -> Result<(), Mark4Error> {
    println!("{step:<28} {}", control.configuration()?);
    println!("{:<28} {}\n", "", control.observation());
    Ok(())
}

fn main() -> Result<(), Mark4Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Mark IV Brew Cycle ===\n");

    let mut control = Mark4Control::assemble(Observation::from_values([HwValue::PotEmpty]))?;
    show("Powered up", &control)?;

    control.load_reservoir();
    show("Reservoir loaded", &control)?;

    control.click_brew()?;
    show("Brew clicked", &control)?;

    control.pot_partial()?;
    show("Coffee reaches the pot", &control)?;

    control.empty_reservoir()?;
    show("Reservoir runs dry", &control)?;

    control.remove_pot()?;
    show("Pot taken for serving", &control)?;

    println!("=== Pot removed mid-brew ===\n");

    control.empty_pot()?;
    control.load_reservoir();
    control.click_brew()?;
    control.pot_partial()?;
    show("Brewing", &control)?;

    control.remove_pot()?;
    show("Pot lifted, brew paused", &control)?;

    control.pot_partial()?;
    show("Pot back, brew resumes", &control)?;

    Ok(())
}
