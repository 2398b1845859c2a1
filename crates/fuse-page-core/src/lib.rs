#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod bindings;
pub mod config;
pub mod cookie;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod file_label;
pub mod form;
pub mod menu;
pub mod mode;
pub mod notifications;

pub use bindings::PageBindings;
pub use config::{ConfigError, PageConfig};
pub use cookie::{CookieSource, read_cookie};
pub use diagnostics::{Diagnostic, DiagnosticSink, HandlerKind, PageDiagnostics, report};
pub use environment::{
    FileEntry, FormValue, HttpMethod, Navigator, OutboundRequest, PageDocument, RequestBody,
    RequestDispatcher, TransportError,
};
pub use error::BindingError;
pub use file_label::{FileNameDisplay, label_text};
pub use form::{
    FormEncoding, FormSnapshot, FormSubmitError, plan_form_submission, resolve_action,
    submit_form,
};
pub use menu::MenuToggle;
pub use mode::{ModeSelector, ModeUpdateOutcome, build_mode_update_request, update_mode};
pub use notifications::{DismissControl, bind_dismiss_controls};
