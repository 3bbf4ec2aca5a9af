use std::fmt;

use uom::si::{
    f64::{Power, Pressure, Ratio},
    power::megawatt,
    pressure::megapascal,
    ratio::percent,
};

use crate::support::units::{SpecificEnergy, SpecificEnthalpy};

/// Results of evaluating the approximate Rankine cycle at one boiler pressure.
///
/// Enthalpies are numbered around the loop: pump inlet (1), pump outlet (2),
/// turbine inlet (3) and turbine outlet (4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankineResults {
    pub boiler_pressure: Pressure,

    pub h1: SpecificEnthalpy,
    pub h2: SpecificEnthalpy,
    pub h3: SpecificEnthalpy,
    pub h4: SpecificEnthalpy,

    pub turbine_work: SpecificEnergy,
    pub pump_work: SpecificEnergy,
    pub net_work: SpecificEnergy,
    pub heat_added: SpecificEnergy,

    /// `net_work / heat_added`.
    pub efficiency: Ratio,

    /// `net_work` times the mass flow rate.
    pub net_power: Power,

    /// Approximate vapor fraction at the turbine outlet, `(h4 − h1) / h_fg`.
    ///
    /// Can exceed one, meaning the exhaust is still superheated.
    pub exhaust_quality: Ratio,
}

impl RankineResults {
    /// Returns the four enthalpies in process order.
    #[must_use]
    pub fn enthalpies(&self) -> [SpecificEnthalpy; 4] {
        [self.h1, self.h2, self.h3, self.h4]
    }
}

impl fmt::Display for RankineResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "For Boiler Pressure = {:.1} MPa:",
            self.boiler_pressure.get::<megapascal>()
        )?;
        writeln!(
            f,
            "  Thermal Efficiency = {:.2}%",
            self.efficiency.get::<percent>()
        )?;
        write!(
            f,
            "  Net Power Output = {:.2} MW",
            self.net_power.get::<megawatt>()
        )
    }
}
