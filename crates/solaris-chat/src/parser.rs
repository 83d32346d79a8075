//! Keyword intent matcher.
//!
//! Classifies a message against the fixed vocabulary and the session's
//! current mode. Classification is an ordered rule list: the first rule that
//! fires wins, so subject selection always beats the "unrecognized" fallback
//! and attribute aliases are only consulted in the matching mode.

use solaris_core::types::{
    PlanetAttribute, SmallBodyAttribute, SunAttribute, PLANET_NAMES, SMALL_BODY_DESIGNATIONS,
};

use crate::types::{AttributeRequest, DialogueState, Intent, Subject};

// =============================================================================
// Vocabulary
// =============================================================================

const SUN_KEYWORD: &str = "солнце";
const LIST_PLANETS_KEYWORD: &str = "планеты";
const LIST_SMALL_BODIES_KEYWORDS: &[&str] = &["астероид", "комета", "кометы", "малые тела"];

static SUN_ALIASES: &[(SunAttribute, &[&str])] = &[
    (
        SunAttribute::SurfaceArea,
        &["площадь поверхности", "поверхность"],
    ),
    (SunAttribute::Volume, &["объем", "объём"]),
    (SunAttribute::CoreTemperature, &["температура", "ядро"]),
    (SunAttribute::Mass, &["масса"]),
    (SunAttribute::Diameter, &["диаметр"]),
];

static PLANET_ALIASES: &[(PlanetAttribute, &[&str])] = &[
    (PlanetAttribute::OrbitalVelocity, &["орбитальная скорость"]),
    (PlanetAttribute::RotationPeriod, &["период вращения"]),
    (PlanetAttribute::MoonCount, &["число спутников"]),
    (PlanetAttribute::Type, &["тип"]),
    (PlanetAttribute::Mass, &["масса"]),
];

static SMALL_BODY_ALIASES: &[(SmallBodyAttribute, &[&str])] = &[
    (SmallBodyAttribute::OrbitalPeriod, &["орбитальный период"]),
    (
        SmallBodyAttribute::ObservationArc,
        &["длительность наблюдений"],
    ),
];

// =============================================================================
// Rules
// =============================================================================

/// One classification rule. Receives lowercased, trimmed text.
type RuleFn = fn(&str, &DialogueState) -> Option<Intent>;

struct Rule {
    name: &'static str,
    apply: RuleFn,
}

static RULES: [Rule; 9] = [
    Rule {
        name: "sun_selection",
        apply: |text, _| (text == SUN_KEYWORD).then_some(Intent::SelectSubject(Subject::Sun)),
    },
    Rule {
        name: "sun_attribute",
        apply: |text, state| match state {
            DialogueState::Sun => first_alias(text, SUN_ALIASES)
                .map(|attr| Intent::Attribute(AttributeRequest::Sun(attr))),
            _ => None,
        },
    },
    Rule {
        name: "planet_selection",
        apply: |text, _| {
            PLANET_NAMES
                .iter()
                .find(|name| text.contains(name.to_lowercase().as_str()))
                .map(|name| Intent::SelectSubject(Subject::Planet(*name)))
        },
    },
    Rule {
        name: "planet_attribute",
        apply: |text, state| match state {
            DialogueState::Planet(_) => first_alias(text, PLANET_ALIASES)
                .map(|attr| Intent::Attribute(AttributeRequest::Planet(attr))),
            _ => None,
        },
    },
    Rule {
        name: "small_body_selection",
        apply: |text, _| {
            SMALL_BODY_DESIGNATIONS
                .iter()
                .find(|designation| text.contains(designation.to_lowercase().as_str()))
                .map(|designation| Intent::SelectSubject(Subject::SmallBody(*designation)))
        },
    },
    Rule {
        name: "small_body_attribute",
        apply: |text, state| match state {
            DialogueState::SmallBody(_) => first_alias(text, SMALL_BODY_ALIASES)
                .map(|attr| Intent::Attribute(AttributeRequest::SmallBody(attr))),
            _ => None,
        },
    },
    Rule {
        name: "list_planets",
        apply: |text, _| text.contains(LIST_PLANETS_KEYWORD).then_some(Intent::ListPlanets),
    },
    Rule {
        name: "list_small_bodies",
        apply: |text, _| {
            LIST_SMALL_BODIES_KEYWORDS
                .iter()
                .any(|kw| text.contains(kw))
                .then_some(Intent::ListSmallBodies)
        },
    },
    Rule {
        name: "fallback",
        apply: |_, _| Some(Intent::Unrecognized),
    },
];

fn first_alias<A: Copy>(text: &str, table: &[(A, &[&str])]) -> Option<A> {
    table
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| text.contains(alias)))
        .map(|(attr, _)| *attr)
}

// =============================================================================
// IntentMatcher
// =============================================================================

/// Classifies free text into an [`Intent`].
///
/// Stateless; the dialogue mode is passed in per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentMatcher;

impl IntentMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message. Case and surrounding whitespace are ignored.
    pub fn classify(&self, text: &str, state: &DialogueState) -> Intent {
        let text = text.trim().to_lowercase();
        self.classify_normalized(&text, state)
    }

    /// Classify already lowercased, trimmed text.
    pub fn classify_normalized(&self, text: &str, state: &DialogueState) -> Intent {
        RULES
            .iter()
            .find_map(|rule| {
                (rule.apply)(text, state).inspect(|_| {
                    tracing::trace!(rule = rule.name, "Intent rule matched");
                })
            })
            .unwrap_or(Intent::Unrecognized)
    }
}
