//! Eating preferences and the preference → diet affinity table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The eight eating-style preferences a user can tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Vegetarian,
    Meat,
    Sweet,
    Hearty,
    Light,
    Routine,
    Variety,
    Fuel,
}

impl Preference {
    /// Returns all preferences in form order.
    pub fn all() -> &'static [Preference] {
        &[
            Preference::Vegetarian,
            Preference::Meat,
            Preference::Sweet,
            Preference::Hearty,
            Preference::Light,
            Preference::Routine,
            Preference::Variety,
            Preference::Fuel,
        ]
    }
}

/// Independent preference flags. Any subset may be set; absent flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSet {
    pub vegetarian: bool,
    pub meat: bool,
    pub sweet: bool,
    pub hearty: bool,
    pub light: bool,
    pub routine: bool,
    pub variety: bool,
    pub fuel: bool,
}

impl PreferenceSet {
    /// Returns a copy with the preference switched on.
    pub fn with(mut self, preference: Preference) -> Self {
        *self.flag_mut(preference) = true;
        self
    }

    /// Returns true if the preference is set.
    pub fn contains(&self, preference: Preference) -> bool {
        match preference {
            Preference::Vegetarian => self.vegetarian,
            Preference::Meat => self.meat,
            Preference::Sweet => self.sweet,
            Preference::Hearty => self.hearty,
            Preference::Light => self.light,
            Preference::Routine => self.routine,
            Preference::Variety => self.variety,
            Preference::Fuel => self.fuel,
        }
    }

    /// Iterates over the preferences that are set.
    pub fn active(&self) -> impl Iterator<Item = Preference> + '_ {
        Preference::all()
            .iter()
            .copied()
            .filter(move |preference| self.contains(*preference))
    }

    fn flag_mut(&mut self, preference: Preference) -> &mut bool {
        match preference {
            Preference::Vegetarian => &mut self.vegetarian,
            Preference::Meat => &mut self.meat,
            Preference::Sweet => &mut self.sweet,
            Preference::Hearty => &mut self.hearty,
            Preference::Light => &mut self.light,
            Preference::Routine => &mut self.routine,
            Preference::Variety => &mut self.variety,
            Preference::Fuel => &mut self.fuel,
        }
    }
}

impl FromIterator<Preference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = Preference>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PreferenceSet::default(), |set, preference| set.with(preference))
    }
}

/// Score deltas per (preference, diet key). Pairs not listed contribute 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffinityTable {
    deltas: HashMap<(Preference, String), i32>,
}

impl AffinityTable {
    /// Builds a table from `(preference, diet key, delta)` rows.
    /// Later rows for the same pair replace earlier ones.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (Preference, &'a str, i32)>) -> Self {
        let deltas = rows
            .into_iter()
            .map(|(preference, key, delta)| ((preference, key.to_string()), delta))
            .collect();
        Self { deltas }
    }

    /// Returns the fixed table used for every recommendation.
    pub fn standard() -> &'static AffinityTable {
        &STANDARD_TABLE
    }

    /// Delta one preference contributes to one diet.
    pub fn delta(&self, preference: Preference, diet_key: &str) -> i32 {
        self.deltas
            .get(&(preference, diet_key.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of deltas over every preference that is set.
    pub fn adjustment(&self, preferences: &PreferenceSet, diet_key: &str) -> i32 {
        preferences
            .active()
            .map(|preference| self.delta(preference, diet_key))
            .sum()
    }
}

const STANDARD_AFFINITIES: &[(Preference, &[(&str, i32)])] = &[
    (
        Preference::Vegetarian,
        &[("mediterranean", 2), ("plant_based", 2), ("dash", 2)],
    ),
    (
        Preference::Meat,
        &[("high_protein", 2), ("paleo", 2), ("clean_eating", 2), ("bulking", 2)],
    ),
    (
        Preference::Sweet,
        &[("mediterranean", 1), ("zone", 1), ("ketogenic", -1)],
    ),
    (
        Preference::Hearty,
        &[("high_protein", 2), ("bulking", 2), ("mass_gainer", 2), ("paleo", 2)],
    ),
    (
        Preference::Light,
        &[
            ("mediterranean", 2),
            ("plant_based", 2),
            ("dash", 2),
            ("intermittent_fasting", 2),
        ],
    ),
    (
        Preference::Routine,
        &[("ketogenic", 1), ("clean_eating", 1), ("zone", 1), ("high_protein", 1)],
    ),
    (
        Preference::Variety,
        &[
            ("mediterranean", 1),
            ("dash", 1),
            ("plant_based", 1),
            ("ketogenic", -1),
            ("clean_eating", -1),
        ],
    ),
    (
        Preference::Fuel,
        &[("high_protein", 1), ("clean_eating", 1), ("zone", 1), ("cutting", 1)],
    ),
];

static STANDARD_TABLE: Lazy<AffinityTable> = Lazy::new(|| {
    AffinityTable::from_rows(STANDARD_AFFINITIES.iter().flat_map(|(preference, row)| {
        row.iter().map(move |(key, delta)| (*preference, *key, *delta))
    }))
});
