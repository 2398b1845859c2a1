use crate::config::PageConfig;
use crate::diagnostics::{DiagnosticSink, HandlerKind, report};
use crate::environment::PageDocument;
use crate::error::BindingError;
use crate::file_label::FileNameDisplay;
use crate::menu::MenuToggle;
use crate::mode::ModeSelector;
use crate::notifications::{DismissControl, bind_dismiss_controls};

/// Every element the page handlers attach to, resolved once at document-ready.
///
/// Each binding is independent: a missing menu never keeps the mode selector
/// from being wired.
#[derive(Debug, Clone)]
pub struct PageBindings<N> {
    pub menu: Option<MenuToggle<N>>,
    pub dismissals: Vec<DismissControl<N>>,
    pub file_name: Option<FileNameDisplay<N>>,
    pub mode_select: Option<ModeSelector<N>>,
    pub forms: Vec<N>,
}

impl<N: Clone> PageBindings<N> {
    pub fn resolve<D>(document: &D, config: &PageConfig, sink: &dyn DiagnosticSink) -> Self
    where
        D: PageDocument<Node = N>,
    {
        let bindings = Self {
            menu: optional(MenuToggle::bind(document, config), sink),
            dismissals: bind_dismiss_controls(document, config, sink),
            file_name: optional(FileNameDisplay::bind(document, config), sink),
            mode_select: optional(ModeSelector::bind(document, config), sink),
            forms: document.query_selector_all(&config.async_form_selector),
        };
        tracing::debug!(
            menu = bindings.menu.is_some(),
            dismissals = bindings.dismissals.len(),
            file_name = bindings.file_name.is_some(),
            mode_select = bindings.mode_select.is_some(),
            forms = bindings.forms.len(),
            "page bindings resolved"
        );
        bindings
    }

    /// Handlers that have something to attach to.
    pub fn active_handlers(&self) -> Vec<HandlerKind> {
        let mut handlers = Vec::new();
        if self.menu.is_some() {
            handlers.push(HandlerKind::MenuToggle);
        }
        if !self.dismissals.is_empty() {
            handlers.push(HandlerKind::NotificationDismiss);
        }
        if self.file_name.is_some() {
            handlers.push(HandlerKind::FileName);
        }
        if !self.forms.is_empty() {
            handlers.push(HandlerKind::FormSubmit);
        }
        if self.mode_select.is_some() {
            handlers.push(HandlerKind::ModeSelect);
        }
        handlers
    }
}

fn optional<T>(result: Result<T, BindingError>, sink: &dyn DiagnosticSink) -> Option<T> {
    match result {
        Ok(binding) => Some(binding),
        Err(error) => {
            report(sink, error.handler(), error.to_string());
            None
        }
    }
}
