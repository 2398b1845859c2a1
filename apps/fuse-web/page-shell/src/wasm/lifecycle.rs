use super::*;

/// Loads config, starts console logging and installs the handlers once the
/// document is ready.
pub(super) fn boot() -> Result<(), String> {
    let page = BrowserPage::current()?;
    let (config, config_error) = read_page_config(&page.window);
    init_console_tracing(config.verbose_logging);
    if let Some(error) = config_error {
        report(&page, HandlerKind::Boot, error);
    }
    PAGE_CONFIG.with(|slot| *slot.borrow_mut() = config);

    if page.document.ready_state() != "loading" {
        install_page_handlers(&page);
        return Ok(());
    }

    DOM_READY_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let ready_page = page.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            install_page_handlers(&ready_page);
        }));
        let _ = page
            .document
            .add_event_listener_with_callback(DOM_READY_EVENT, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
    Ok(())
}

/// Reads `window.__FUSE_PAGE_CONFIG__`. A missing object means defaults; a
/// malformed one means defaults plus the returned error message.
pub(super) fn read_page_config(window: &web_sys::Window) -> (PageConfig, Option<String>) {
    let Ok(value) = js_sys::Reflect::get(window, &JsValue::from_str(PAGE_CONFIG_GLOBAL)) else {
        return (PageConfig::default(), None);
    };
    if value.is_undefined() || value.is_null() {
        return (PageConfig::default(), None);
    }
    let raw = match js_sys::JSON::stringify(&value) {
        Ok(raw) => String::from(raw),
        Err(_) => {
            return (
                PageConfig::default(),
                Some(format!("{PAGE_CONFIG_GLOBAL} could not be serialized")),
            );
        }
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(error) => (
            PageConfig::default(),
            Some(format!("{PAGE_CONFIG_GLOBAL} ignored: {error}")),
        ),
    }
}

pub(super) fn install_page_handlers(page: &BrowserPage) {
    let config = current_config();
    let bindings = PageBindings::resolve(page, &config, page);

    if let Some(menu) = bindings.menu {
        install_menu_toggle(page, menu);
    }
    install_dismiss_controls(page, bindings.dismissals);
    if let Some(display) = bindings.file_name {
        install_file_name_display(page, display);
    }
    install_form_interceptors(page, bindings.forms);
    if let Some(selector) = bindings.mode_select {
        install_mode_selector(page, selector, config);
    }
    tracing::debug!("page handlers installed");
}

fn install_menu_toggle(page: &BrowserPage, menu: MenuToggle<Element>) {
    MENU_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let button = menu.button().clone();
        let handler_page = page.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            menu.toggle(&handler_page);
        }));
        let _ = button.add_event_listener_with_callback(CLICK_EVENT, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
        mark_installed(HandlerKind::MenuToggle);
    });
}

fn install_dismiss_controls(page: &BrowserPage, controls: Vec<DismissControl<Element>>) {
    DISMISS_CLICK_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() || controls.is_empty() {
            return;
        }
        for control in controls {
            let element = control.control().clone();
            let handler_page = page.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                control.dismiss(&handler_page);
            }));
            let _ = element
                .add_event_listener_with_callback(CLICK_EVENT, callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
        mark_installed(HandlerKind::NotificationDismiss);
    });
}

fn install_file_name_display(page: &BrowserPage, display: FileNameDisplay<Element>) {
    FILE_CHANGE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let input = display.input().clone();
        let handler_page = page.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Err(error) = display.reflect(&handler_page) {
                report(&handler_page, error.handler(), error.to_string());
            }
        }));
        let _ = input.add_event_listener_with_callback(CHANGE_EVENT, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
        mark_installed(HandlerKind::FileName);
    });
}

fn install_form_interceptors(page: &BrowserPage, forms: Vec<Element>) {
    FORM_SUBMIT_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() || forms.is_empty() {
            return;
        }
        for form in forms {
            let handler_page = page.clone();
            let submitted_form = form.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    event.prevent_default();
                    let page = handler_page.clone();
                    let form = submitted_form.clone();
                    spawn_local(async move {
                        let _ = submit_form(&page, &form).await;
                    });
                },
            ));
            let _ =
                form.add_event_listener_with_callback(SUBMIT_EVENT, callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
        mark_installed(HandlerKind::FormSubmit);
    });
}

fn install_mode_selector(page: &BrowserPage, selector: ModeSelector<Element>, config: PageConfig) {
    MODE_CHANGE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let select = selector.select().clone();
        let handler_page = page.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            let mode = match selector.selected_mode(&handler_page) {
                Ok(mode) => mode,
                Err(error) => {
                    report(&handler_page, error.handler(), error.to_string());
                    return;
                }
            };
            let page = handler_page.clone();
            let config = config.clone();
            spawn_local(async move {
                update_mode(&page, &mode, &config).await;
            });
        }));
        let _ = select.add_event_listener_with_callback(CHANGE_EVENT, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
        mark_installed(HandlerKind::ModeSelect);
    });
}
