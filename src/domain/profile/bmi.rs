//! Body-mass index value object and classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::InputError;

/// A body-mass index, always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bmi(f64);

impl Bmi {
    /// Creates a Bmi, returning error unless the value is finite and positive.
    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(InputError::invalid_measurement("bmi", value));
        }
        Ok(Self(value))
    }

    /// Computes weight / height² from centimetres and kilograms,
    /// rounded to two decimals.
    pub fn from_measurements(height_cm: f64, weight_kg: f64) -> Result<Self, InputError> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(InputError::invalid_measurement("height_cm", height_cm));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(InputError::invalid_measurement("weight_kg", weight_kg));
        }

        let height_m = height_cm / 100.0;
        let raw = weight_kg / (height_m * height_m);
        Self::new((raw * 100.0).round() / 100.0)
    }

    /// Computes a Bmi only when both measurements were supplied.
    pub fn from_optional_measurements(
        height_cm: Option<f64>,
        weight_kg: Option<f64>,
    ) -> Result<Option<Self>, InputError> {
        match (height_cm, weight_kg) {
            (Some(height), Some(weight)) => Self::from_measurements(height, weight).map(Some),
            _ => Ok(None),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the category this value falls into.
    pub fn category(&self) -> BmiCategory {
        BmiCategory::from_bmi(*self)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Standard BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

/// Coarse grouping of categories used by the diet safety gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBucket {
    Underweight,
    Healthy,
    Overweight,
}

impl BmiCategory {
    /// Classifies a BMI value.
    ///
    /// Band upper bounds are exclusive: 16, 18.5, 25, 30, 35, 40.
    pub fn from_bmi(bmi: Bmi) -> Self {
        let value = bmi.value();
        if value < 16.0 {
            BmiCategory::SeverelyUnderweight
        } else if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 25.0 {
            BmiCategory::Normal
        } else if value < 30.0 {
            BmiCategory::Overweight
        } else if value < 35.0 {
            BmiCategory::ObesityI
        } else if value < 40.0 {
            BmiCategory::ObesityII
        } else {
            BmiCategory::ObesityIII
        }
    }

    /// Returns the coarse bucket for this category.
    pub fn bucket(&self) -> BmiBucket {
        match self {
            BmiCategory::SeverelyUnderweight | BmiCategory::Underweight => BmiBucket::Underweight,
            BmiCategory::Normal => BmiBucket::Healthy,
            BmiCategory::Overweight
            | BmiCategory::ObesityI
            | BmiCategory::ObesityII
            | BmiCategory::ObesityIII => BmiBucket::Overweight,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityI => "Obesity Class I",
            BmiCategory::ObesityII => "Obesity Class II",
            BmiCategory::ObesityIII => "Obesity Class III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
