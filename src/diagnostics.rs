//! Error context for the recovery prompt
//!
//! Captured context carries the error chain and a summary of the display
//! settings. Form data is never included.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::state::AppState;

/// Display settings at the time of the failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub style: String,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    pub message: String,
    /// Sources of `message`, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    /// Seconds since the unix epoch
    pub timestamp: u64,
    pub version: String,
    pub app_state: StateSummary,
}

impl ErrorContext {
    pub fn capture(error: &dyn Error, state: &AppState) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);

        Self {
            message: error.to_string(),
            causes,
            timestamp,
            version: env!("CARGO_PKG_VERSION").to_string(),
            app_state: StateSummary {
                style: state.signature_style.name().to_string(),
                dark_mode: state.dark_mode,
            },
        }
    }

    /// Pretty JSON for pasting into a bug report
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.message.clone())
    }
}

/// What the user can do after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    Reload,
    ClearAndRestart,
    CopyDiagnostics,
    Dismiss,
}

impl RecoveryAction {
    pub fn label(self) -> &'static str {
        match self {
            RecoveryAction::Reload => "Reload Page",
            RecoveryAction::ClearAndRestart => "Clear Data & Restart",
            RecoveryAction::CopyDiagnostics => "Copy Error Details",
            RecoveryAction::Dismiss => "Dismiss",
        }
    }
}

/// Offered actions; only non-critical failures may be dismissed
pub fn recovery_actions(dismissible: bool) -> Vec<RecoveryAction> {
    let mut actions = vec![
        RecoveryAction::Reload,
        RecoveryAction::ClearAndRestart,
        RecoveryAction::CopyDiagnostics,
    ];
    if dismissible {
        actions.push(RecoveryAction::Dismiss);
    }
    actions
}
