//! Approximate Rankine cycle study.
//!
//! Evaluates the plant at boiler pressures of 3, 4 and 5 MPa, prints a
//! report for each, and plots efficiency and net power against boiler
//! pressure.
//!
//! # Usage
//!
//! ```text
//! cargo run --example rankine_cycle
//! ```

use std::error::Error;

use twine_cycles::{
    models::cycles::rankine::RankineCycle,
    support::sweep::{self, Action, Event},
};
use twine_observers::{PlotObserver, ShowConfig};
use uom::si::{
    f64::Pressure,
    power::megawatt,
    pressure::{kilopascal, megapascal},
    ratio::percent,
};

fn main() -> Result<(), Box<dyn Error>> {
    let plant = RankineCycle::default();
    let boiler_pressures = [3000.0, 4000.0, 5000.0].map(Pressure::new::<kilopascal>);

    let mut efficiency = PlotObserver::<1>::new(["Thermal efficiency (%)"]);
    let mut power = PlotObserver::<1>::new(["Net power output (MW)"]);

    sweep::run(
        &plant,
        boiler_pressures,
        |event: &Event<'_, RankineCycle>| -> Option<Action> {
            if let Event::Evaluated { input, output, .. } = event {
                println!("\n{output}");

                let p = input.get::<megapascal>();
                efficiency.record(p, [Some(output.efficiency.get::<percent>())]);
                power.record(p, [Some(output.net_power.get::<megawatt>())]);
            }
            None
        },
    )?;

    efficiency.show(
        ShowConfig::new()
            .title("Rankine cycle efficiency vs boiler pressure (MPa)")
            .legend(),
    )?;
    power.show(
        ShowConfig::new()
            .title("Net power output vs boiler pressure (MPa)")
            .legend(),
    )?;

    Ok(())
}
