//! Chat orchestrator: central coordinator of a dialogue turn.
//!
//! Validates the message, classifies it against the user's session, resolves
//! the intent through the catalog and writes the new state back, all under the
//! user's session lock.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use solaris_core::catalog::CatalogGateway;
use solaris_core::config::ChatConfig;
use solaris_core::error::SolarisError;
use solaris_core::types::SubjectKind;

use crate::context::SessionStore;
use crate::error::ChatError;
use crate::parser::IntentMatcher;
use crate::response;
use crate::types::{AttributeRequest, ChatReply, DialogueState, Intent, Subject, TurnOutcome};

/// Command that greets the user and resets the session.
pub const START_COMMAND: &str = "/start";

/// Why a turn produced no answer. Never changes the session state.
#[derive(Debug)]
enum ResolutionError {
    NotFound,
    Unrecognized,
    LostContext(SubjectKind),
    Gateway(SolarisError),
}

impl ResolutionError {
    fn into_reply(self, state: &DialogueState) -> (String, TurnOutcome) {
        match self {
            ResolutionError::NotFound => (response::NOT_FOUND.to_string(), TurnOutcome::NotFound),
            ResolutionError::Unrecognized if *state == DialogueState::Idle => (
                response::FALLBACK.to_string(),
                TurnOutcome::UnrecognizedIntent,
            ),
            ResolutionError::Unrecognized => {
                (response::RETRY.to_string(), TurnOutcome::UnrecognizedIntent)
            }
            ResolutionError::LostContext(kind) => (
                response::lost_context(kind).to_string(),
                TurnOutcome::LostContext,
            ),
            ResolutionError::Gateway(_) => (response::FAILURE.to_string(), TurnOutcome::Failure),
        }
    }
}

impl From<SolarisError> for ResolutionError {
    fn from(err: SolarisError) -> Self {
        ResolutionError::Gateway(err)
    }
}

/// Successful resolution of an intent.
struct Resolution {
    text: String,
    outcome: TurnOutcome,
    /// New session state; `None` keeps the current one.
    next_state: Option<DialogueState>,
}

impl Resolution {
    fn reply(text: impl Into<String>, outcome: TurnOutcome) -> Self {
        Self {
            text: text.into(),
            outcome,
            next_state: None,
        }
    }

    fn menu(text: impl Into<String>, next_state: DialogueState) -> Self {
        Self {
            text: text.into(),
            outcome: TurnOutcome::Menu,
            next_state: Some(next_state),
        }
    }
}

/// Central chat orchestrator that coordinates matching, sessions and catalog
/// lookups.
pub struct ChatOrchestrator {
    gateway: Arc<dyn CatalogGateway>,
    matcher: IntentMatcher,
    sessions: SessionStore,
    config: ChatConfig,
}

impl ChatOrchestrator {
    /// Create a new orchestrator over the given catalog.
    pub fn new(gateway: Arc<dyn CatalogGateway>, config: ChatConfig) -> Self {
        info!(
            enabled = config.enabled,
            max_message_length = config.max_message_length,
            session_timeout_minutes = config.session_timeout_minutes,
            "Chat orchestrator initialized"
        );
        Self {
            gateway,
            matcher: IntentMatcher::new(),
            sessions: SessionStore::with_timeout(config.session_timeout_minutes),
            config,
        }
    }

    /// Handle one inbound message from `user_id`.
    ///
    /// Rejections (disabled, empty, too long, missing user) are errors;
    /// everything else, including catalog failures, is answered in-dialogue.
    pub fn handle_message(&self, user_id: &str, text: &str) -> Result<ChatReply, ChatError> {
        self.validate_user(user_id)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if text.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        if is_start_command(text) {
            return Ok(self.greet(user_id));
        }

        let lowered = text.to_lowercase();
        debug!(user_id, text = %lowered, "Inbound message");

        let reply = self.sessions.with_session(user_id, |state| {
            let intent = self.matcher.classify_normalized(&lowered, state);
            debug!(
                user_id,
                mode = state.mode(),
                intent = intent.label(),
                "Turn classified"
            );

            let (text, outcome) = match self.resolve(&intent, state) {
                Ok(resolution) => {
                    if let Some(next) = resolution.next_state {
                        *state = next;
                    }
                    (resolution.text, resolution.outcome)
                }
                Err(err) => {
                    match &err {
                        ResolutionError::Gateway(e) => {
                            error!(user_id, error = %e, "Catalog lookup failed")
                        }
                        ResolutionError::LostContext(kind) => {
                            warn!(user_id, ?kind, "Active subject missing from catalog")
                        }
                        ResolutionError::NotFound | ResolutionError::Unrecognized => {}
                    }
                    err.into_reply(state)
                }
            };

            ChatReply {
                text,
                outcome,
                state: state.clone(),
            }
        });

        Ok(reply)
    }

    /// Handle the start command: greet and reset the session to Idle.
    pub fn start(&self, user_id: &str) -> Result<ChatReply, ChatError> {
        self.validate_user(user_id)?;
        Ok(self.greet(user_id))
    }

    /// Current dialogue state of a user.
    pub fn session_state(&self, user_id: &str) -> DialogueState {
        self.sessions.get(user_id)
    }

    /// Number of tracked sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn validate_user(&self, user_id: &str) -> Result<(), ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }
        if user_id.trim().is_empty() {
            return Err(ChatError::InvalidUser);
        }
        Ok(())
    }

    fn greet(&self, user_id: &str) -> ChatReply {
        self.sessions
            .with_session(user_id, |state| *state = DialogueState::Idle);
        debug!(user_id, "Session reset by start command");
        ChatReply {
            text: response::GREETING.to_string(),
            outcome: TurnOutcome::Greeting,
            state: DialogueState::Idle,
        }
    }

    fn resolve(
        &self,
        intent: &Intent,
        state: &DialogueState,
    ) -> Result<Resolution, ResolutionError> {
        match intent {
            Intent::SelectSubject(subject) => self.select(subject),
            Intent::Attribute(request) => self.answer(*request, state),
            Intent::ListPlanets => Ok(Resolution::reply(
                response::planet_list(),
                TurnOutcome::Listing,
            )),
            Intent::ListSmallBodies => Ok(Resolution::reply(
                response::SMALL_BODY_LIST,
                TurnOutcome::Listing,
            )),
            Intent::Unrecognized => Err(ResolutionError::Unrecognized),
        }
    }

    fn select(&self, subject: &Subject) -> Result<Resolution, ResolutionError> {
        match subject {
            Subject::Sun => {
                self.gateway
                    .fetch_sun()?
                    .ok_or(ResolutionError::NotFound)?;
                Ok(Resolution::menu(response::SUN_MENU, DialogueState::Sun))
            }
            Subject::Planet(name) => {
                let planet = self
                    .gateway
                    .fetch_planet(name)?
                    .ok_or(ResolutionError::NotFound)?;
                Ok(Resolution::menu(
                    response::planet_menu(&planet.name),
                    DialogueState::Planet(planet.name),
                ))
            }
            Subject::SmallBody(designation) => {
                let body = self
                    .gateway
                    .fetch_small_body(designation)?
                    .ok_or(ResolutionError::NotFound)?;
                Ok(Resolution::menu(
                    response::small_body_menu(&body.designation),
                    DialogueState::SmallBody(body.designation),
                ))
            }
        }
    }

    fn answer(
        &self,
        request: AttributeRequest,
        state: &DialogueState,
    ) -> Result<Resolution, ResolutionError> {
        let text = match (request, state) {
            (AttributeRequest::Sun(attr), DialogueState::Sun) => {
                let sun = self
                    .gateway
                    .fetch_sun()?
                    .ok_or(ResolutionError::LostContext(SubjectKind::Sun))?;
                response::sun_answer(attr, sun.value(attr))
            }
            (AttributeRequest::Planet(attr), DialogueState::Planet(name)) => {
                let planet = self
                    .gateway
                    .fetch_planet(name)?
                    .ok_or(ResolutionError::LostContext(SubjectKind::Planet))?;
                response::planet_answer(name, attr, planet.value(attr))
            }
            (AttributeRequest::SmallBody(attr), DialogueState::SmallBody(designation)) => {
                let body = self
                    .gateway
                    .fetch_small_body(designation)?
                    .ok_or(ResolutionError::LostContext(SubjectKind::SmallBody))?;
                response::small_body_answer(designation, attr, body.value(attr))
            }
            // The matcher only yields attribute requests for the active mode.
            _ => return Err(ResolutionError::Unrecognized),
        };
        Ok(Resolution::reply(text, TurnOutcome::Answer))
    }
}

/// True when the first word is `/start` (optionally addressed, `/start@bot`).
fn is_start_command(text: &str) -> bool {
    text.split_whitespace().next().is_some_and(|word| {
        word == START_COMMAND
            || word
                .strip_prefix(START_COMMAND)
                .is_some_and(|rest| rest.starts_with('@'))
    })
}
