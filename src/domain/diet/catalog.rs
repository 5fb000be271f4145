//! Diet Catalog - the static reference table of dietary approaches.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::profile::Goal;

/// One dietary approach the explorer can suggest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietEntry {
    pub key: String,
    pub name: String,
    pub goals: Vec<Goal>,
    pub description: String,
    pub link: String,
}

impl DietEntry {
    /// Creates a new catalog entry.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        goals: Vec<Goal>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            goals,
            description: description.into(),
            link: link.into(),
        }
    }

    /// Returns true if this approach is applicable to the goal.
    pub fn supports(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }
}

/// Errors found while loading or validating a catalog.
///
/// These are configuration faults: the process must not start with them.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Diet catalog has no entries")]
    Empty,

    #[error("Diet entry #{index} has an empty '{field}'")]
    EmptyField { index: usize, field: &'static str },

    #[error("Diet entry '{key}' has no goals")]
    NoGoals { key: String },

    #[error("Diet key '{key}' is declared more than once")]
    DuplicateKey { key: String },

    #[error("Diet entry '{key}' has an invalid link: {link}")]
    InvalidLink { key: String, link: String },

    #[error("Failed to read diet catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse diet catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Ordered, read-only collection of diet entries.
///
/// Declaration order is significant: it breaks score ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DietCatalog {
    entries: Vec<DietEntry>,
}

impl DietCatalog {
    /// Creates a catalog from entries, without validation.
    pub fn new(entries: Vec<DietEntry>) -> Self {
        Self { entries }
    }

    /// Returns the built-in catalog shared by the whole process.
    pub fn builtin() -> &'static DietCatalog {
        &BUILTIN_CATALOG
    }

    /// Parses and validates a YAML list of entries.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let entries: Vec<DietEntry> = serde_yaml::from_str(yaml)?;
        Self::new(entries).validated()
    }

    /// Reads, parses and validates a YAML catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Returns the catalog once it has passed `validate`.
    pub fn validated(self) -> Result<Self, CatalogError> {
        self.validate()?;
        Ok(self)
    }

    /// Checks every entry for required fields, unique keys and usable links.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let required = [
                ("key", &entry.key),
                ("name", &entry.name),
                ("description", &entry.description),
                ("link", &entry.link),
            ];
            if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(CatalogError::EmptyField {
                    index,
                    field: *field,
                });
            }

            if entry.goals.is_empty() {
                return Err(CatalogError::NoGoals {
                    key: entry.key.clone(),
                });
            }

            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }

            if !(entry.link.starts_with("https://") || entry.link.starts_with("http://")) {
                return Err(CatalogError::InvalidLink {
                    key: entry.key.clone(),
                    link: entry.link.clone(),
                });
            }
        }

        Ok(())
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[DietEntry] {
        &self.entries
    }

    /// Entries applicable to a goal, in declaration order.
    pub fn for_goal(&self, goal: Goal) -> impl Iterator<Item = &DietEntry> {
        self.entries.iter().filter(move |entry| entry.supports(goal))
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&DietEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct BuiltinEntry {
    key: &'static str,
    name: &'static str,
    goals: &'static [Goal],
    description: &'static str,
    link: &'static str,
}

const BUILTIN_ENTRIES: &[BuiltinEntry] = &[
    BuiltinEntry {
        key: "mediterranean",
        name: "Mediterranean Diet",
        goals: &[Goal::ImproveHealth, Goal::WeightLoss],
        description: "A balanced, heart-focused way of eating inspired by traditional Mediterranean countries. It emphasises whole foods, healthy fats, and long-term sustainability rather than restriction.",
        link: "https://my.clevelandclinic.org/health/articles/16037-mediterranean-diet",
    },
    BuiltinEntry {
        key: "high_protein",
        name: "High-Protein Diet",
        goals: &[Goal::WeightLoss, Goal::BetterPhysique],
        description: "A diet that prioritises protein intake to support muscle maintenance, satiety, and metabolic health. Often used for body recomposition and fat loss.",
        link: "https://www.webmd.com/diet/ss/slideshow-high-protein-diet",
    },
    BuiltinEntry {
        key: "ketogenic",
        name: "Ketogenic Diet",
        goals: &[Goal::WeightLoss],
        description: "A very low-carbohydrate, high-fat diet designed to shift the body into ketosis, where fat is used as the primary fuel source.",
        link: "https://www.healthline.com/nutrition/ketogenic-diet-101",
    },
    BuiltinEntry {
        key: "paleo",
        name: "Paleo Diet",
        goals: &[Goal::ImproveHealth, Goal::BetterPhysique],
        description: "A diet based on foods thought to be eaten by early humans, focusing on minimally processed whole foods while avoiding modern refined products.",
        link: "https://thepaleodiet.com/",
    },
    BuiltinEntry {
        key: "cutting",
        name: "Calorie Deficit (Cutting) Diet",
        goals: &[Goal::WeightLoss],
        description: "A structured eating approach designed to reduce body fat while preserving muscle by maintaining a controlled calorie deficit.",
        link: "https://www.healthline.com/nutrition/cutting-diet",
    },
    BuiltinEntry {
        key: "intermittent_fasting",
        name: "Intermittent Fasting",
        goals: &[Goal::WeightLoss, Goal::ImproveHealth],
        description: "An eating pattern that cycles between periods of eating and fasting, focusing more on timing than specific foods.",
        link: "https://www.healthline.com/nutrition/16-8-intermittent-fasting",
    },
    BuiltinEntry {
        key: "plant_based",
        name: "Plant-Based / Vegan Diet",
        goals: &[Goal::ImproveHealth, Goal::WeightLoss],
        description: "A diet centred around plant foods, minimising or excluding animal products, often chosen for health, ethical, or environmental reasons.",
        link: "https://www.everydayhealth.com/diet-nutrition/plant-based-diet-food-list-sample-menu/",
    },
    BuiltinEntry {
        key: "low_carb",
        name: "Low-Carb Diet",
        goals: &[Goal::WeightLoss],
        description: "A dietary approach that reduces carbohydrate intake to help stabilise blood sugar levels and encourage fat utilisation.",
        link: "https://www.healthline.com/nutrition/low-carb-diet-meal-plan-and-menu",
    },
    BuiltinEntry {
        key: "dash",
        name: "DASH Diet",
        goals: &[Goal::ImproveHealth],
        description: "A diet originally developed to support heart health and blood pressure management through balanced, nutrient-dense eating.",
        link: "https://www.42kingsway.nhs.uk/services/hypertension-diet-dash/",
    },
    BuiltinEntry {
        key: "zone",
        name: "Zone Diet",
        goals: &[Goal::ImproveHealth, Goal::WeightLoss],
        description: "A structured diet that balances macronutrients in specific ratios to support metabolic stability and reduce inflammation.",
        link: "https://www.healthline.com/nutrition/zone-diet",
    },
    BuiltinEntry {
        key: "clean_eating",
        name: "Bodybuilder / Clean Eating Diet",
        goals: &[Goal::BetterPhysique],
        description: "A disciplined eating style focused on whole, minimally processed foods to support muscle growth, recovery, and performance.",
        link: "https://www.muscleandstrength.com/diet-plans/clean-eating-diet",
    },
    BuiltinEntry {
        key: "bulking",
        name: "Calorie Surplus (Bulking) Diet",
        goals: &[Goal::WeightGain, Goal::BetterPhysique],
        description: "A structured calorie-surplus approach designed to promote muscle gain alongside controlled weight increase.",
        link: "https://bonytobeastly.com/bulking-diet-guide/",
    },
    BuiltinEntry {
        key: "mass_gainer",
        name: "Mass Gainer Diet",
        goals: &[Goal::WeightGain],
        description: "A high-calorie eating strategy aimed at individuals who struggle to gain weight, prioritising energy-dense intake.",
        link: "https://www.australianeggs.org.au/nutrition/meal-plans/weight-gain-meal-plan",
    },
    BuiltinEntry {
        key: "high_carb",
        name: "High-Carb Performance Diet",
        goals: &[Goal::WeightGain],
        description: "A carbohydrate-focused diet designed to support training performance, recovery, and energy demands.",
        link: "https://www.healthline.com/nutrition/12-healthy-high-carb-foods",
    },
];

static BUILTIN_CATALOG: Lazy<DietCatalog> = Lazy::new(|| {
    DietCatalog::new(
        BUILTIN_ENTRIES
            .iter()
            .map(|e| DietEntry::new(e.key, e.name, e.goals.to_vec(), e.description, e.link))
            .collect(),
    )
});
