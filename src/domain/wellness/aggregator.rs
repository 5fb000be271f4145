//! Wellness Aggregator - turns questionnaire answers into likelihood percentages.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{InputError, Percentage};

use super::{DomainSelector, LikertAnswer, QuestionnaireDomain, MAX_ANSWER, SLOTS_PER_DOMAIN};

/// Completion state and likelihood for one questionnaire.
///
/// `percent` is present exactly when `complete` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    domain: QuestionnaireDomain,
    complete: bool,
    percent: Option<Percentage>,
}

impl DomainResult {
    /// A fully answered questionnaire.
    pub fn completed(domain: QuestionnaireDomain, percent: Percentage) -> Self {
        Self {
            domain,
            complete: true,
            percent: Some(percent),
        }
    }

    /// A questionnaire with at least one unanswered question.
    pub fn incomplete(domain: QuestionnaireDomain) -> Self {
        Self {
            domain,
            complete: false,
            percent: None,
        }
    }

    pub fn domain(&self) -> QuestionnaireDomain {
        self.domain
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn percent(&self) -> Option<Percentage> {
        self.percent
    }
}

/// Results for all ten questionnaires plus the optionally selected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessReport {
    results: BTreeMap<QuestionnaireDomain, DomainResult>,
    overall_complete: bool,
    single_result: Option<DomainResult>,
}

impl WellnessReport {
    /// Result for one domain.
    pub fn result(&self, domain: QuestionnaireDomain) -> Option<&DomainResult> {
        self.results.get(&domain)
    }

    /// All results in form order.
    pub fn results(&self) -> impl Iterator<Item = &DomainResult> {
        self.results.values()
    }

    /// True when every questionnaire is complete.
    pub fn overall_complete(&self) -> bool {
        self.overall_complete
    }

    /// Result of the questionnaire the user submitted on its own, if any.
    pub fn single_result(&self) -> Option<&DomainResult> {
        self.single_result.as_ref()
    }

    /// Number of complete questionnaires.
    pub fn completed_count(&self) -> usize {
        self.results.values().filter(|r| r.is_complete()).count()
    }
}

/// Likelihood scoring over the ten questionnaires.
pub struct WellnessAggregator;

impl WellnessAggregator {
    /// Scores every questionnaire and reports the selected one separately.
    ///
    /// `answers` is the flat form submission (slot name → raw value); keys that
    /// are not slot names are ignored. `requested` is the form's selector.
    ///
    /// # Errors
    /// - `UnknownDomain` for an unrecognised selector
    /// - `MalformedAnswer` / `AnswerOutOfRange` for unusable slot content in any domain
    pub fn aggregate(
        answers: &HashMap<String, String>,
        requested: Option<&str>,
    ) -> Result<WellnessReport, InputError> {
        let selector = DomainSelector::parse(requested)?;

        let mut results = BTreeMap::new();
        for domain in QuestionnaireDomain::all() {
            results.insert(*domain, Self::assess_domain(answers, *domain)?);
        }

        let overall_complete = results.values().all(DomainResult::is_complete);
        let single_result = selector
            .single()
            .and_then(|domain| results.get(&domain).copied());

        Ok(WellnessReport {
            results,
            overall_complete,
            single_result,
        })
    }

    /// Scores one questionnaire, ignoring every other domain's slots.
    ///
    /// # Algorithm
    /// percent = round(Σ answers / (5 × 3) × 100), only when all 5 are answered
    ///
    /// # Edge Cases
    /// - Any blank or missing slot: incomplete, no percent
    /// - All zeros: complete at 0%
    pub fn assess_domain(
        answers: &HashMap<String, String>,
        domain: QuestionnaireDomain,
    ) -> Result<DomainResult, InputError> {
        let mut total: u32 = 0;
        let mut answered = 0;

        for slot in domain.slots() {
            let parsed = match answers.get(*slot) {
                Some(raw) => LikertAnswer::parse(slot, raw)?,
                None => None,
            };
            if let Some(answer) = parsed {
                total += u32::from(answer.value());
                answered += 1;
            }
        }

        if answered < SLOTS_PER_DOMAIN {
            return Ok(DomainResult::incomplete(domain));
        }

        let max_total = (SLOTS_PER_DOMAIN as u32) * u32::from(MAX_ANSWER);
        Ok(DomainResult::completed(
            domain,
            Percentage::from_ratio(total, max_total),
        ))
    }
}
