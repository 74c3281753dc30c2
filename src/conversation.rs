//! Conversation state for the chat panel.
//!
//! A [`Conversation`] is an append-only list of [`ChatTurn`]s plus a [`Phase`].
//! Submitting is split in two so the UI can release its borrow across the
//! model call:
//!
//! 1. [`Conversation::begin_submit`] validates the input, records the user turn,
//!    enters [`Phase::AwaitingResponse`] and hands back a [`PendingRequest`].
//! 2. Once the model resolves, [`Conversation::finish`] records the assistant
//!    turn and returns to [`Phase::Idle`].
//!
//! [`request_reply`] is the await point between the two.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use dioxus::logger::tracing::{error, info};

use crate::error::Result;
use crate::llm::ModelClient;
use crate::time_utils::{TimeOfDay, format_date, format_time};

pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

const CONTEXT_INSTRUCTION: &str =
    "Please provide a response that's contextually aware of the current time and date when relevant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// A submission that has been accepted and is waiting on the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
    phase: Phase,
}

pub fn greeting(time_of_day: TimeOfDay) -> String {
    format!("Good {time_of_day}! I'm MAX (Modular AI eXpert). How can I assist you today?")
}

/// Wraps the user's text with the local time context sent to the model.
pub fn compose_prompt<Tz: TimeZone>(now: &DateTime<Tz>, text: &str) -> String
where
    Tz::Offset: Display,
{
    format!(
        "Current time: {}\nCurrent date: {}\nTime of day: {}\nUser message: {}\n\n{}",
        format_time(now),
        format_date(now),
        TimeOfDay::at(now),
        text,
        CONTEXT_INSTRUCTION,
    )
}

impl Conversation {
    /// A fresh conversation holding only the greeting.
    pub fn new(time_of_day: TimeOfDay) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(greeting(time_of_day))],
            phase: Phase::Idle,
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    /// Records the user turn and enters the awaiting phase.
    ///
    /// Returns `None`, leaving the conversation untouched, when the text is
    /// blank or a request is already in flight.
    pub fn begin_submit<Tz: TimeZone>(
        &mut self,
        text: &str,
        now: &DateTime<Tz>,
    ) -> Option<PendingRequest>
    where
        Tz::Offset: Display,
    {
        if text.trim().is_empty() || self.is_awaiting() {
            return None;
        }
        self.turns.push(ChatTurn::user(text));
        self.phase = Phase::AwaitingResponse;
        Some(PendingRequest {
            prompt: compose_prompt(now, text),
        })
    }

    /// Records the model's outcome and returns to idle. Failures become the
    /// fixed apology; the detail only goes to the log.
    pub fn finish(&mut self, outcome: Result<String>) {
        let turn = match outcome {
            Ok(text) => ChatTurn::assistant(text),
            Err(e) => {
                error!("model request failed: {e}");
                ChatTurn::assistant(ERROR_REPLY)
            }
        };
        self.turns.push(turn);
        self.phase = Phase::Idle;
    }
}

/// Sends an accepted submission to the model. The result goes to
/// [`Conversation::finish`].
pub async fn request_reply<M>(model: &M, pending: &PendingRequest) -> Result<String>
where
    M: ModelClient + ?Sized,
{
    info!("sending prompt ({} chars)", pending.prompt.len());
    model.generate(&pending.prompt).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::error::LlmError;

    struct FakeModel {
        reply: Option<String>,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeModel {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: RefCell::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                prompts: RefCell::new(vec![]),
            }
        }
    }

    #[async_trait(?Send)]
    impl ModelClient for FakeModel {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone().ok_or(LlmError::EmptyResponse)
        }
    }

    /// Drives one submission the way the chat screen does.
    async fn exchange(c: &mut Conversation, model: &FakeModel, text: &str) -> bool {
        let Some(pending) = c.begin_submit(text, &morning()) else {
            return false;
        };
        let outcome = request_reply(model, &pending).await;
        c.finish(outcome);
        true
    }

    fn morning() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 19, 9, 7, 0)
            .unwrap()
    }

    #[test]
    fn starts_with_single_greeting() {
        let c = Conversation::new(TimeOfDay::Evening);
        assert_eq!(c.turns().len(), 1);
        assert_eq!(c.turns()[0].role, Role::Assistant);
        assert!(c.turns()[0].content.contains("Good evening!"));
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn begin_submit_appends_user_turn_before_reply() {
        let mut c = Conversation::new(TimeOfDay::Morning);
        let pending = c.begin_submit("  hi there ", &morning());
        assert!(pending.is_some());
        assert_eq!(c.turns().len(), 2);
        assert_eq!(c.turns()[1], ChatTurn::user("  hi there "));
        assert!(c.is_awaiting());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut c = Conversation::new(TimeOfDay::Morning);
        for text in ["", "   ", "\n\t"] {
            assert!(c.begin_submit(text, &morning()).is_none());
        }
        assert_eq!(c.turns().len(), 1);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn second_submit_while_awaiting_is_ignored() {
        let mut c = Conversation::new(TimeOfDay::Morning);
        c.begin_submit("first", &morning()).unwrap();
        assert!(c.begin_submit("second", &morning()).is_none());
        assert_eq!(c.turns().len(), 2);
        assert!(c.is_awaiting());
    }

    #[test]
    fn prompt_has_labeled_lines_in_order() {
        let text = "Current time: fake\nwhat time is it?";
        let prompt = compose_prompt(&morning(), text);
        assert_eq!(
            prompt,
            format!(
                "Current time: 09:07\n\
                 Current date: Monday, October 19, 2026\n\
                 Time of day: morning\n\
                 User message: {text}\n\
                 \n\
                 {CONTEXT_INSTRUCTION}"
            )
        );
        let lines: Vec<&str> = prompt.lines().collect();
        assert!(lines[0].starts_with("Current time: "));
        assert!(lines[1].starts_with("Current date: "));
        assert!(lines[2].starts_with("Time of day: "));
        assert!(lines[3].starts_with("User message: "));
        assert_eq!(lines.last(), Some(&CONTEXT_INSTRUCTION));
    }

    #[tokio::test]
    async fn success_appends_reply_verbatim() {
        let model = FakeModel::ok("## Good morning\n\n*It is 09:07.*");
        let mut c = Conversation::new(TimeOfDay::Morning);
        assert!(exchange(&mut c, &model, "hello").await);
        assert_eq!(c.turns().len(), 3);
        assert_eq!(
            c.turns()[2],
            ChatTurn::assistant("## Good morning\n\n*It is 09:07.*")
        );
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(model.prompts.borrow().len(), 1);
        assert!(model.prompts.borrow()[0].contains("User message: hello"));
    }

    #[tokio::test]
    async fn failure_appends_apology() {
        let model = FakeModel::failing();
        let mut c = Conversation::new(TimeOfDay::Morning);
        assert!(exchange(&mut c, &model, "hello").await);
        assert_eq!(c.turns().len(), 3);
        assert_eq!(c.turns()[2], ChatTurn::assistant(ERROR_REPLY));
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn rejected_submit_never_calls_model() {
        let model = FakeModel::ok("unused");
        let mut c = Conversation::new(TimeOfDay::Morning);
        assert!(!exchange(&mut c, &model, "   ").await);
        assert!(model.prompts.borrow().is_empty());
        assert_eq!(c.turns().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_messages_are_kept() {
        let model = FakeModel::ok("same");
        let mut c = Conversation::new(TimeOfDay::Morning);
        exchange(&mut c, &model, "same").await;
        exchange(&mut c, &model, "same").await;
        let contents: Vec<&str> = c.turns()[1..].iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, ["same", "same", "same", "same"]);
    }
}
