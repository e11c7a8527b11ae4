//! quizrun-respondents — Respondent implementations.
//!
//! Implements the `Respondent` trait for the interactive console and for
//! scripted answer lists, letting the caller pick how a session is answered.

pub mod console;
pub mod scripted;

pub use console::ConsoleRespondent;
pub use scripted::ScriptedRespondent;
