//! Action token validation and classification.
//!
//! The first raw token names the action; everything after it is handed to
//! the action as positional parameters.

use crate::error::{BlogError, Result};
use std::fmt;

/// The recognized actions, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Start,
    Post,
    Page,
}

impl ActionType {
    /// All actions in declaration order.
    pub const ALL: [ActionType; 3] = [ActionType::Start, ActionType::Post, ActionType::Page];

    /// The token that selects this action.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Start => "start",
            ActionType::Post => "post",
            ActionType::Page => "page",
        }
    }

    /// Parse an action token.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == s)
    }

    /// Names of the positional parameters the action expects.
    ///
    /// Descriptive only: validation checks the action token, not the arity.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ActionType::Start => &[],
            ActionType::Post | ActionType::Page => &["title"],
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating the raw action tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub messages: Vec<String>,
}

/// Validate raw action tokens (everything after the program name and flags).
pub fn validate(args: &[String]) -> ValidationResult {
    let mut messages = Vec::new();

    let recognized = args
        .first()
        .and_then(|token| ActionType::from_str(token))
        .is_some();

    if !recognized {
        let names: Vec<&str> = ActionType::ALL.iter().map(|a| a.as_str()).collect();
        messages.push(format!(
            "Invalid action! Valid actions include ({})",
            names.join(",")
        ));
    }

    ValidationResult {
        is_valid: messages.is_empty(),
        messages,
    }
}

/// A validated request: which action to run and with what parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action_type: ActionType,
    pub params: Vec<String>,
}

impl ActionRequest {
    /// Validate `args` and split them into action type and parameters.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let validation = validate(args);
        if !validation.is_valid {
            return Err(BlogError::Validation(validation.messages));
        }

        let (first, rest) = args
            .split_first()
            .ok_or_else(|| BlogError::Validation(validation.messages.clone()))?;
        let action_type = ActionType::from_str(first)
            .ok_or_else(|| BlogError::Validation(validation.messages.clone()))?;

        Ok(Self {
            action_type,
            params: rest.to_vec(),
        })
    }
}
