//! Questionnaire domains, their answer slots, and the answer scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::InputError;

/// Number of questions in every questionnaire.
pub const SLOTS_PER_DOMAIN: usize = 5;

/// Highest value on the answer scale (lowest is 0).
pub const MAX_ANSWER: u8 = 3;

/// Selector value meaning "every questionnaire".
pub const ALL_DOMAINS_SELECTOR: &str = "all";

/// The ten independent wellness questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireDomain {
    Iron,
    #[serde(rename = "vitd")]
    VitaminD,
    B12,
    Dehydration,
    Sleep,
    Stress,
    Magnesium,
    Thyroid,
    Sugar,
    Immune,
}

impl QuestionnaireDomain {
    /// Returns all domains in form order.
    pub fn all() -> &'static [QuestionnaireDomain] {
        &[
            QuestionnaireDomain::Iron,
            QuestionnaireDomain::VitaminD,
            QuestionnaireDomain::B12,
            QuestionnaireDomain::Dehydration,
            QuestionnaireDomain::Sleep,
            QuestionnaireDomain::Stress,
            QuestionnaireDomain::Magnesium,
            QuestionnaireDomain::Thyroid,
            QuestionnaireDomain::Sugar,
            QuestionnaireDomain::Immune,
        ]
    }

    /// Returns the selector key used by the form.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionnaireDomain::Iron => "iron",
            QuestionnaireDomain::VitaminD => "vitd",
            QuestionnaireDomain::B12 => "b12",
            QuestionnaireDomain::Dehydration => "dehydration",
            QuestionnaireDomain::Sleep => "sleep",
            QuestionnaireDomain::Stress => "stress",
            QuestionnaireDomain::Magnesium => "magnesium",
            QuestionnaireDomain::Thyroid => "thyroid",
            QuestionnaireDomain::Sugar => "sugar",
            QuestionnaireDomain::Immune => "immune",
        }
    }

    /// Returns the display name.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionnaireDomain::Iron => "Iron",
            QuestionnaireDomain::VitaminD => "Vitamin D",
            QuestionnaireDomain::B12 => "Vitamin B12",
            QuestionnaireDomain::Dehydration => "Dehydration",
            QuestionnaireDomain::Sleep => "Sleep",
            QuestionnaireDomain::Stress => "Stress",
            QuestionnaireDomain::Magnesium => "Magnesium",
            QuestionnaireDomain::Thyroid => "Thyroid",
            QuestionnaireDomain::Sugar => "Blood Sugar",
            QuestionnaireDomain::Immune => "Immune",
        }
    }

    /// Returns the form field names of this domain's questions.
    pub fn slots(&self) -> &'static [&'static str; SLOTS_PER_DOMAIN] {
        match self {
            QuestionnaireDomain::Iron => &["iron1", "iron2", "iron3", "iron4", "iron5"],
            QuestionnaireDomain::VitaminD => &["vitd1", "vitd2", "vitd3", "vitd4", "vitd5"],
            QuestionnaireDomain::B12 => &["b121", "b122", "b123", "b124", "b125"],
            QuestionnaireDomain::Dehydration => &["dehy1", "dehy2", "dehy3", "dehy4", "dehy5"],
            QuestionnaireDomain::Sleep => &["sleep1", "sleep2", "sleep3", "sleep4", "sleep5"],
            QuestionnaireDomain::Stress => {
                &["stress1", "stress2", "stress3", "stress4", "stress5"]
            }
            QuestionnaireDomain::Magnesium => &["mag1", "mag2", "mag3", "mag4", "mag5"],
            QuestionnaireDomain::Thyroid => &["thy1", "thy2", "thy3", "thy4", "thy5"],
            QuestionnaireDomain::Sugar => &["sugar1", "sugar2", "sugar3", "sugar4", "sugar5"],
            QuestionnaireDomain::Immune => &["imm1", "imm2", "imm3", "imm4", "imm5"],
        }
    }

    /// Returns the domain owning a form field name, if it is a slot at all.
    pub fn for_slot(slot: &str) -> Option<QuestionnaireDomain> {
        QuestionnaireDomain::all()
            .iter()
            .find(|domain| domain.slots().contains(&slot))
            .copied()
    }
}

impl fmt::Display for QuestionnaireDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for QuestionnaireDomain {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionnaireDomain::all()
            .iter()
            .find(|domain| domain.key() == s)
            .copied()
            .ok_or_else(|| InputError::UnknownDomain(s.to_string()))
    }
}

/// Which questionnaire the user submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSelector {
    All,
    Single(QuestionnaireDomain),
}

impl DomainSelector {
    /// Parses the form's selector. Missing, blank or "all" selects every domain.
    pub fn parse(raw: Option<&str>) -> Result<Self, InputError> {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL_DOMAINS_SELECTOR) => Ok(DomainSelector::All),
            Some(key) => key.parse().map(DomainSelector::Single),
        }
    }

    /// Returns the single domain, if one was selected.
    pub fn single(&self) -> Option<QuestionnaireDomain> {
        match self {
            DomainSelector::All => None,
            DomainSelector::Single(domain) => Some(*domain),
        }
    }
}

/// One answer on the 0..=3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikertAnswer(u8);

impl LikertAnswer {
    /// Creates an answer, returning error if above the scale.
    pub fn try_new(slot: &str, value: u8) -> Result<Self, InputError> {
        if value > MAX_ANSWER {
            return Err(InputError::answer_out_of_range(
                slot,
                0,
                MAX_ANSWER,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Parses raw form content for a slot.
    ///
    /// Blank content means unanswered and yields `Ok(None)`; "0" is an answer.
    /// Fractional values such as "1.5" are malformed, not rounded.
    ///
    /// # Errors
    /// - `MalformedAnswer` when the content is not a whole number
    /// - `AnswerOutOfRange` when the number is outside 0..=3
    pub fn parse(slot: &str, raw: &str) -> Result<Option<Self>, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| InputError::malformed_answer(slot, raw))?;

        if !(0..=i64::from(MAX_ANSWER)).contains(&value) {
            return Err(InputError::answer_out_of_range(slot, 0, MAX_ANSWER, value));
        }

        Self::try_new(slot, value as u8).map(Some)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}
