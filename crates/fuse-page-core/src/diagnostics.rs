use std::collections::VecDeque;

use serde::Serialize;

pub const RECENT_DIAGNOSTICS_LIMIT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    Boot,
    MenuToggle,
    NotificationDismiss,
    FileName,
    FormSubmit,
    ModeSelect,
}

impl HandlerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::MenuToggle => "menu_toggle",
            Self::NotificationDismiss => "notification_dismiss",
            Self::FileName => "file_name",
            Self::FormSubmit => "form_submit",
            Self::ModeSelect => "mode_select",
        }
    }
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub handler: HandlerKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(handler: HandlerKind, message: impl Into<String>) -> Self {
        Self {
            handler,
            message: message.into(),
        }
    }
}

/// Receives handler diagnostics. Nothing here ever reaches the user.
pub trait DiagnosticSink {
    fn record(&self, diagnostic: Diagnostic);
}

/// Logs `message` at warn level and hands it to `sink`.
pub fn report<S: DiagnosticSink + ?Sized>(
    sink: &S,
    handler: HandlerKind,
    message: impl Into<String>,
) {
    let message = message.into();
    tracing::warn!(handler = handler.as_str(), "{message}");
    sink.record(Diagnostic::new(handler, message));
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PageDiagnostics {
    pub installed: Vec<HandlerKind>,
    pub dispatched_requests: u64,
    pub failed_requests: u64,
    pub recent: VecDeque<Diagnostic>,
}

impl PageDiagnostics {
    pub fn mark_installed(&mut self, handler: HandlerKind) {
        if !self.installed.contains(&handler) {
            self.installed.push(handler);
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.recent.len() == RECENT_DIAGNOSTICS_LIMIT {
            self.recent.pop_front();
        }
        self.recent.push_back(diagnostic);
    }

    pub fn count_dispatch(&mut self, succeeded: bool) {
        self.dispatched_requests += 1;
        if !succeeded {
            self.failed_requests += 1;
        }
    }

    pub fn for_handler(&self, handler: HandlerKind) -> impl Iterator<Item = &Diagnostic> {
        self.recent
            .iter()
            .filter(move |diagnostic| diagnostic.handler == handler)
    }
}
