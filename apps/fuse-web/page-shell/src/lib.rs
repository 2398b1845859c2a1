#[cfg(any(target_arch = "wasm32", test))]
mod console_log;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use fuse_page_core::{
        Diagnostic, DiagnosticSink, DismissControl, FileNameDisplay, HandlerKind, MenuToggle,
        ModeSelector, PageBindings, PageConfig, PageDiagnostics, report, submit_form,
        update_mode,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::Element;

    use crate::console_log::{ConsoleMethod, console_line, max_level};
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod logging;
    mod network;

    use dom::BrowserPage;
    use lifecycle::*;
    use logging::init_console_tracing;

    thread_local! {
        static PAGE_CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::default());
        static DIAGNOSTICS: RefCell<PageDiagnostics> = RefCell::new(PageDiagnostics::default());
        static DOM_READY_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static MENU_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static DISMISS_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(Vec::new()) };
        static FILE_CHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static FORM_SUBMIT_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(Vec::new()) };
        static MODE_CHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(error) = boot() {
            record_boot_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn page_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow())
                .unwrap_or_else(|_| "{\"recent\":[],\"installed\":[]}".to_string())
        })
    }

    #[wasm_bindgen]
    pub fn page_config_json() -> String {
        PAGE_CONFIG.with(|config| {
            serde_json::to_string(&*config.borrow()).unwrap_or_else(|_| "{}".to_string())
        })
    }

    /// Diagnostic sink backed by the page-wide diagnostics record.
    pub(super) struct PageDiagnosticsSink;

    impl DiagnosticSink for PageDiagnosticsSink {
        fn record(&self, diagnostic: Diagnostic) {
            DIAGNOSTICS.with(|state| state.borrow_mut().push(diagnostic));
        }
    }

    pub(super) fn record_boot_error(message: &str) {
        report(&PageDiagnosticsSink, HandlerKind::Boot, message);
    }

    pub(super) fn mark_installed(handler: HandlerKind) {
        DIAGNOSTICS.with(|state| state.borrow_mut().mark_installed(handler));
    }

    pub(super) fn current_config() -> PageConfig {
        PAGE_CONFIG.with(|config| config.borrow().clone())
    }
}
