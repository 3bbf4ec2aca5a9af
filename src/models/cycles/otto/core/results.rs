use std::fmt;

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, Ratio, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature},
    pressure::bar,
    ratio::percent,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::SpecificEnergy;

/// Thermodynamic state of the working gas at one corner of the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OttoState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub specific_volume: SpecificVolume,
}

/// Results of evaluating an ideal Otto cycle.
///
/// States are numbered in process order:
///
/// 1. `intake`: start of compression (bottom dead center)
/// 2. `compressed`: end of isentropic compression
/// 3. `heat_added`: end of constant-volume heat addition
/// 4. `expanded`: end of isentropic expansion
///
/// Heat and work terms are per unit mass of working gas and are all positive
/// for a well-posed cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OttoResults {
    pub intake: OttoState,
    pub compressed: OttoState,
    pub heat_added: OttoState,

    /// End of expansion.
    ///
    /// Its pressure is `P3·(T4/T3)`, which keeps `P/T` from state 3 and so
    /// leaves the gas at the compressed volume `v2` rather than `v1`. The
    /// reported specific volume is the one consistent with `(T4, P4)`.
    pub expanded: OttoState,

    /// Heat added during combustion, `cv·(T3 − T2)`.
    pub q_in: SpecificEnergy,

    /// Heat rejected to the exhaust, `cv·(T4 − T1)`.
    pub q_out: SpecificEnergy,

    /// Net work, `q_in − q_out`.
    pub w_net: SpecificEnergy,

    /// Thermal efficiency from the energy balance.
    pub eta: Ratio,

    /// Closed-form efficiency `1 − r^(1−γ)`.
    ///
    /// Agrees with `eta` to rounding for every valid input.
    pub eta_theory: Ratio,

    /// Mean effective pressure, `w_net / (v1 − v2)`.
    pub mep: Pressure,

    pub cv: SpecificHeatCapacity,
    pub cp: SpecificHeatCapacity,
    pub compression_ratio: f64,
    pub gamma: f64,
}

impl OttoResults {
    /// Returns the four state points in process order.
    ///
    /// Append the first element again to close the loop on a plot.
    #[must_use]
    pub fn points(&self) -> [OttoState; 4] {
        [self.intake, self.compressed, self.heat_added, self.expanded]
    }
}

impl fmt::Display for OttoResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compression ratio (r): {}", self.compression_ratio)?;
        for (n, state) in self.points().iter().enumerate() {
            writeln!(
                f,
                "T{} = {:.2} K,  P{} = {:.3} bar",
                n + 1,
                state.temperature.get::<kelvin>(),
                n + 1,
                state.pressure.get::<bar>(),
            )?;
        }
        writeln!(
            f,
            "Heat added (q_in): {:.1} J/kg",
            self.q_in.get::<joule_per_kilogram>()
        )?;
        writeln!(
            f,
            "Heat rejected (q_out): {:.1} J/kg",
            self.q_out.get::<joule_per_kilogram>()
        )?;
        writeln!(
            f,
            "Net work (w_net): {:.1} J/kg",
            self.w_net.get::<joule_per_kilogram>()
        )?;
        writeln!(
            f,
            "Thermal efficiency (energy): {:.2} %",
            self.eta.get::<percent>()
        )?;
        writeln!(
            f,
            "Theoretical efficiency: {:.2} %",
            self.eta_theory.get::<percent>()
        )?;
        write!(
            f,
            "Mean effective pressure (MEP): {:.3} bar",
            self.mep.get::<bar>()
        )
    }
}
