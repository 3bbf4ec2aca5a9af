//! Air-standard Otto cycle calculation.
//!
//! The cycle is four processes on a calorically perfect gas:
//!
//! - 1→2: isentropic compression through the compression ratio `r`
//! - 2→3: constant-volume heat addition up to the peak temperature
//! - 3→4: isentropic expansion back to the intake volume
//! - 4→1: constant-volume heat rejection
//!
//! Heat capacities follow from the gas constant and `γ`:
//! `cv = R/(γ−1)`, `cp = γ·cv`.

mod error;
mod input;
mod results;

pub use error::OttoError;
pub use input::OttoInput;
pub use results::{OttoResults, OttoState};

use uom::{
    ConstZero,
    si::{
        available_energy::joule_per_kilogram,
        f64::{Ratio, SpecificVolume},
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{Constraint, GreaterThanOne, StrictlyPositive},
    thermo::{ideal_gas_eos, isentropic},
    units::{SpecificEnergy, SpecificGasConstant, TemperatureDifference},
};

/// Evaluates the cycle for a gas with the given specific gas constant.
///
/// # Errors
///
/// Returns [`OttoError`] if an input violates its physical bound or if the
/// heat input or displacement volume is not a positive finite quantity.
pub(super) fn evaluate(
    gas_constant: SpecificGasConstant,
    input: &OttoInput,
) -> Result<OttoResults, OttoError> {
    let t1 = input.intake_temperature;
    StrictlyPositive::check(&t1.get::<kelvin>())
        .map_err(|source| OttoError::IntakeTemperature { t1, source })?;

    let p1 = input.intake_pressure;
    StrictlyPositive::check(&p1.get::<pascal>())
        .map_err(|source| OttoError::IntakePressure { p1, source })?;

    let r = GreaterThanOne::new(input.compression_ratio)
        .map_err(|source| OttoError::CompressionRatio {
            r: input.compression_ratio,
            source,
        })?
        .into_inner();

    let gamma = GreaterThanOne::new(input.gamma)
        .map_err(|source| OttoError::HeatCapacityRatio {
            gamma: input.gamma,
            source,
        })?
        .into_inner();

    let cv = gas_constant / (gamma - 1.0);
    let cp = cv * gamma;

    // 1→2
    let t2 = isentropic::temperature(t1, r, gamma);
    let p2 = isentropic::pressure(p1, r, gamma);

    // 2→3
    let t3 = input.peak_temperature;
    if !(t3 > t2) {
        return Err(OttoError::PeakTemperature { t2, t3 });
    }
    let p3 = p2 * (t3.get::<kelvin>() / t2.get::<kelvin>());

    // 3→4
    let t4 = isentropic::temperature(t3, r.recip(), gamma);
    let p4 = p3 * (t4.get::<kelvin>() / t3.get::<kelvin>());

    let q_in: SpecificEnergy = cv * t3.minus(t2);
    let q_out: SpecificEnergy = cv * t4.minus(t1);
    let w_net = q_in - q_out;

    if !(q_in > SpecificEnergy::ZERO) || !q_in.is_finite() {
        return Err(OttoError::NotComputable {
            context: format!("heat input must be positive and finite, got {q_in:?}"),
        });
    }

    let v1 = ideal_gas_eos::specific_volume(t1, p1, gas_constant);
    let v2 = v1 / r;
    // P4 scales with T4 at fixed P/T, which holds the volume at v2.
    let v4 = ideal_gas_eos::specific_volume(t4, p4, gas_constant);
    let displacement = v1 - v2;

    if !(displacement > SpecificVolume::ZERO) || !displacement.is_finite() {
        return Err(OttoError::NotComputable {
            context: format!("displacement volume must be positive and finite, got {displacement:?}"),
        });
    }

    let eta = 1.0 - q_out.get::<joule_per_kilogram>() / q_in.get::<joule_per_kilogram>();

    Ok(OttoResults {
        intake: OttoState {
            temperature: t1,
            pressure: p1,
            specific_volume: v1,
        },
        compressed: OttoState {
            temperature: t2,
            pressure: p2,
            specific_volume: v2,
        },
        heat_added: OttoState {
            temperature: t3,
            pressure: p3,
            specific_volume: v2,
        },
        expanded: OttoState {
            temperature: t4,
            pressure: p4,
            specific_volume: v4,
        },
        q_in,
        q_out,
        w_net,
        eta: Ratio::new::<ratio>(eta),
        eta_theory: ideal_efficiency(r, gamma),
        mep: w_net / displacement,
        cv,
        cp,
        compression_ratio: r,
        gamma,
    })
}

/// Closed-form ideal Otto efficiency, `1 − r^(1−γ)`.
///
/// No validation is done, so `r = 1` gives zero and `r < 1` gives a
/// negative value.
///
/// # Example
///
/// ```
/// use twine_cycles::models::cycles::otto::ideal_efficiency;
/// use uom::si::ratio::ratio;
///
/// assert_eq!(ideal_efficiency(1.0, 1.4).get::<ratio>(), 0.0);
/// assert!((ideal_efficiency(8.0, 1.4).get::<ratio>() - 0.5647).abs() < 1e-4);
/// ```
#[must_use]
pub fn ideal_efficiency(compression_ratio: f64, gamma: f64) -> Ratio {
    Ratio::new::<ratio>(1.0 - compression_ratio.powf(1.0 - gamma))
}
