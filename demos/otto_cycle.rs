//! Air-standard Otto cycle study.
//!
//! Prints the cycle report for a compression ratio of 6, then opens three
//! plot windows in turn:
//!
//! - temperature at each state point for r = 6, 8 and 10
//! - pressure at each state point for the same ratios
//! - efficiency and mean effective pressure over r ∈ [3, 12]
//!
//! # Usage
//!
//! ```text
//! cargo run --example otto_cycle
//! ```

use std::error::Error;

use twine_cycles::{
    models::cycles::otto::{OttoCycle, OttoInput},
    support::sweep::{self, Action, Event},
};
use twine_observers::{PlotObserver, ShowConfig};
use uom::si::{pressure::bar, ratio::percent, thermodynamic_temperature::kelvin};

fn main() -> Result<(), Box<dyn Error>> {
    let engine = OttoCycle::air();

    let results = engine.evaluate(&OttoInput::default())?;
    println!("\n=== IDEAL OTTO CYCLE RESULTS ===");
    println!("{results}");

    state_profiles(&engine)?;
    compression_sweep(&engine)?;

    Ok(())
}

/// Plots T and P around the closed cycle, 1 → 2 → 3 → 4 → 1.
fn state_profiles(engine: &OttoCycle) -> Result<(), Box<dyn Error>> {
    let ratios = [6.0, 8.0, 10.0];
    let mut temperatures = PlotObserver::<3>::new(["r=6", "r=8", "r=10"]);
    let mut pressures = PlotObserver::<3>::new(["r=6", "r=8", "r=10"]);

    for (trace, r) in ratios.into_iter().enumerate() {
        let results = engine.evaluate(&OttoInput::default().with_compression_ratio(r))?;
        let [first, ..] = results.points();
        let closed_loop = results.points().into_iter().chain([first]);

        for (n, state) in (1_u32..).zip(closed_loop) {
            let mut t = [None; 3];
            let mut p = [None; 3];
            t[trace] = Some(state.temperature.get::<kelvin>());
            p[trace] = Some(state.pressure.get::<bar>());
            temperatures.record(f64::from(n), t);
            pressures.record(f64::from(n), p);
        }
    }

    temperatures.show(
        ShowConfig::new()
            .title("Temperature (K) at each state point")
            .legend(),
    )?;
    pressures.show(
        ShowConfig::new()
            .title("Pressure (bar) at each state point")
            .legend(),
    )?;

    Ok(())
}

/// Sweeps the compression ratio and plots efficiency and MEP.
fn compression_sweep(engine: &OttoCycle) -> Result<(), Box<dyn Error>> {
    let mut performance = PlotObserver::<2>::new(["Thermal efficiency (%)", "MEP (bar)"]);

    let inputs =
        sweep::linspace(3.0, 12.0, 100).map(|r| OttoInput::default().with_compression_ratio(r));

    let study = sweep::run(
        engine,
        inputs,
        |event: &Event<'_, OttoCycle>| -> Option<Action> {
            if let Event::Evaluated { input, output, .. } = event {
                performance.record(
                    input.compression_ratio,
                    [
                        Some(output.eta.get::<percent>()),
                        Some(output.mep.get::<bar>()),
                    ],
                );
            }
            None
        },
    )?;

    let best = study
        .outputs()
        .max_by(|a, b| a.mep.get::<bar>().total_cmp(&b.mep.get::<bar>()))
        .map(|results| (results.compression_ratio, results.mep.get::<bar>()));
    if let Some((r, mep)) = best {
        println!("\nPeak MEP over the sweep: {mep:.3} bar at r = {r:.2}");
    }

    performance.show(
        ShowConfig::new()
            .title("Efficiency and MEP vs compression ratio")
            .legend(),
    )?;

    Ok(())
}
