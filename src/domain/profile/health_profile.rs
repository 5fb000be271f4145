//! Snapshot of the persisted user profile fields the engine reads.

use crate::domain::foundation::InputError;

use super::{Bmi, ProfileGoal};

/// Profile fields supplied by the surrounding application.
///
/// Stored values are trusted as persisted; a zero or otherwise unusable
/// stored BMI simply means "unknown".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthProfile {
    pub goal: Option<ProfileGoal>,
    pub bmi: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl HealthProfile {
    /// Returns the stored BMI when it is usable.
    pub fn stored_bmi(&self) -> Option<Bmi> {
        self.bmi.and_then(|value| Bmi::new(value).ok())
    }

    /// Computes a BMI from the stored height and weight, if both exist.
    pub fn measured_bmi(&self) -> Result<Option<Bmi>, InputError> {
        Bmi::from_optional_measurements(self.height_cm, self.weight_kg)
    }
}

/// Picks the BMI for a request.
///
/// Order: measurements supplied with the request, the stored BMI, then the
/// stored measurements. Returns `None` when nothing usable is available.
pub fn resolve_bmi(
    profile: Option<&HealthProfile>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
) -> Result<Option<Bmi>, InputError> {
    if let Some(bmi) = Bmi::from_optional_measurements(height_cm, weight_kg)? {
        return Ok(Some(bmi));
    }

    match profile {
        Some(profile) => match profile.stored_bmi() {
            Some(bmi) => Ok(Some(bmi)),
            None => profile.measured_bmi(),
        },
        None => Ok(None),
    }
}
