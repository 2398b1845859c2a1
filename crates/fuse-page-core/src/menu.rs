use crate::config::PageConfig;
use crate::diagnostics::HandlerKind;
use crate::environment::PageDocument;
use crate::error::BindingError;

/// The burger button and the navigation panel whose class it flips.
#[derive(Debug, Clone)]
pub struct MenuToggle<N> {
    button: N,
    panel: N,
    active_class: String,
}

impl<N: Clone> MenuToggle<N> {
    pub fn bind<D>(document: &D, config: &PageConfig) -> Result<Self, BindingError>
    where
        D: PageDocument<Node = N>,
    {
        let button = document
            .element_by_id(&config.menu_toggle_id)
            .ok_or_else(|| BindingError::missing(HandlerKind::MenuToggle, &config.menu_toggle_id))?;
        let panel = document
            .element_by_id(&config.menu_panel_id)
            .ok_or_else(|| BindingError::missing(HandlerKind::MenuToggle, &config.menu_panel_id))?;
        Ok(Self {
            button,
            panel,
            active_class: config.menu_active_class.clone(),
        })
    }

    /// The element the click listener goes on.
    pub fn button(&self) -> &N {
        &self.button
    }

    /// Returns whether the panel is active after the flip.
    pub fn toggle<D>(&self, document: &D) -> bool
    where
        D: PageDocument<Node = N>,
    {
        let active = document.toggle_class(&self.panel, &self.active_class);
        tracing::debug!(active, "navigation menu toggled");
        active
    }
}
