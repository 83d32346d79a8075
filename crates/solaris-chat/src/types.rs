use serde::{Deserialize, Serialize};

use solaris_core::types::{PlanetAttribute, SmallBodyAttribute, SunAttribute};

// =============================================================================
// Dialogue state
// =============================================================================

/// Per-user conversational context: which subject, if any, is active.
///
/// A subject string is only ever stored after the catalog confirmed it exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "subject", rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    Idle,
    Sun,
    Planet(String),
    SmallBody(String),
}

impl DialogueState {
    /// Mode label: "idle", "sun", "planet" or "small_body".
    pub fn mode(&self) -> &'static str {
        match self {
            DialogueState::Idle => "idle",
            DialogueState::Sun => "sun",
            DialogueState::Planet(_) => "planet",
            DialogueState::SmallBody(_) => "small_body",
        }
    }

    /// Canonical key of the active planet or small body.
    pub fn subject(&self) -> Option<&str> {
        match self {
            DialogueState::Planet(name) | DialogueState::SmallBody(name) => Some(name),
            DialogueState::Idle | DialogueState::Sun => None,
        }
    }
}

// =============================================================================
// Intents
// =============================================================================

/// A subject named by the user, keyed by its canonical identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    Sun,
    Planet(&'static str),
    SmallBody(&'static str),
}

/// Attribute of the active subject requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeRequest {
    Sun(SunAttribute),
    Planet(PlanetAttribute),
    SmallBody(SmallBodyAttribute),
}

/// Classification of one inbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SelectSubject(Subject),
    Attribute(AttributeRequest),
    ListPlanets,
    ListSmallBodies,
    Unrecognized,
}

impl Intent {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::SelectSubject(_) => "select_subject",
            Intent::Attribute(_) => "attribute",
            Intent::ListPlanets => "list_planets",
            Intent::ListSmallBodies => "list_small_bodies",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

// =============================================================================
// Replies
// =============================================================================

/// What a turn produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    Greeting,
    /// Subject selected; the attribute menu was sent.
    Menu,
    Answer,
    Listing,
    NotFound,
    UnrecognizedIntent,
    LostContext,
    /// The catalog failed; the user got the generic apology.
    Failure,
}

/// Reply to one inbound message, with the session state after the turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub outcome: TurnOutcome,
    pub state: DialogueState,
}
