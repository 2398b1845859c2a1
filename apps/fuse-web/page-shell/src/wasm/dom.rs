use super::*;

use fuse_page_core::{CookieSource, FileEntry, FormSnapshot, FormValue, Navigator, PageDocument};
use web_sys::{HtmlDocument, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

/// The live browser page, as the handlers see it.
#[derive(Clone)]
pub(super) struct BrowserPage {
    pub(super) window: web_sys::Window,
    pub(super) document: web_sys::Document,
}

impl BrowserPage {
    pub(super) fn current() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        Ok(Self { window, document })
    }
}

impl PageDocument for BrowserPage {
    type Node = Element;
    type File = web_sys::File;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn detach(&self, node: &Element) -> bool {
        if node.parent_node().is_none() {
            return false;
        }
        node.remove();
        true
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> Option<String> {
        if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        node.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }

    fn selected_file_names(&self, node: &Element) -> Option<Vec<String>> {
        let input = node.dyn_ref::<HtmlInputElement>()?;
        if !input.type_().eq_ignore_ascii_case("file") {
            return None;
        }
        let Some(files) = input.files() else {
            return Some(Vec::new());
        };
        Some(
            (0..files.length())
                .filter_map(|index| files.get(index))
                .map(|file| file.name())
                .collect(),
        )
    }

    fn form_snapshot(&self, node: &Element) -> Option<FormSnapshot<web_sys::File>> {
        let form = node.dyn_ref::<HtmlFormElement>()?;
        let form_data = web_sys::FormData::new_with_form(form).ok()?;
        let entries = js_sys::try_iter(&form_data).ok().flatten()?;

        let mut fields = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let pair = js_sys::Array::from(&entry);
            let Some(name) = pair.get(0).as_string() else {
                continue;
            };
            let value = pair.get(1);
            if let Some(text) = value.as_string() {
                fields.push((name, FormValue::Text(text)));
            } else if let Ok(file) = value.dyn_into::<web_sys::File>() {
                let content_type = file.type_();
                fields.push((
                    name,
                    FormValue::File(FileEntry {
                        name: file.name(),
                        content_type: (!content_type.is_empty()).then_some(content_type),
                        payload: file,
                    }),
                ));
            }
        }

        Some(FormSnapshot {
            action: form.action(),
            method: form.method(),
            enctype: form.enctype(),
            fields,
        })
    }
}

impl CookieSource for BrowserPage {
    fn cookie_string(&self) -> String {
        self.document
            .dyn_ref::<HtmlDocument>()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }
}

impl Navigator for BrowserPage {
    fn current_url(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn reload(&self) {
        if self.window.location().reload().is_err() {
            record_boot_error("page reload was refused");
        }
    }
}

impl DiagnosticSink for BrowserPage {
    fn record(&self, diagnostic: Diagnostic) {
        PageDiagnosticsSink.record(diagnostic);
    }
}
