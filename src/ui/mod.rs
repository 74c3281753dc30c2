//! User interface components.
//!
//! Two screens, the chat and the settings page, plus the pieces the chat is
//! built from.

mod chat_input;    // Prompt input box
pub mod chatbot;   // Conversation screen (public for routing)
mod message;       // Chat turn bubbles
pub mod settings;  // Preferences screen (public for routing)
