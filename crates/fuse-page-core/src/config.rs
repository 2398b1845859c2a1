use serde::{Deserialize, Serialize};

pub const DEFAULT_MENU_TOGGLE_ID: &str = "burger";
pub const DEFAULT_MENU_PANEL_ID: &str = "nav-links";
pub const DEFAULT_MENU_ACTIVE_CLASS: &str = "is-active";
pub const DEFAULT_DISMISS_SELECTOR: &str = ".notification .delete";
pub const DEFAULT_FILE_INPUT_ID: &str = "fuse_file";
pub const DEFAULT_FILE_LABEL_ID: &str = "file_name_display";
pub const DEFAULT_FILE_PLACEHOLDER: &str = "No file uploaded";
pub const DEFAULT_ASYNC_FORM_SELECTOR: &str = "form[data-async]";
pub const DEFAULT_MODE_SELECT_ID: &str = "mode-select";
pub const DEFAULT_MODE_ENDPOINT: &str = "/update-mode";
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrf_token";
pub const DEFAULT_CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Element ids, selectors and endpoint names the handlers bind to.
///
/// Every field is optional when deserializing, so a page can override just
/// the ids it renders differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub menu_toggle_id: String,
    pub menu_panel_id: String,
    pub menu_active_class: String,
    pub dismiss_selector: String,
    pub file_input_id: String,
    pub file_label_id: String,
    pub file_placeholder: String,
    pub async_form_selector: String,
    pub mode_select_id: String,
    pub mode_endpoint: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    /// Emit debug-level handler logs to the console.
    pub verbose_logging: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            menu_toggle_id: DEFAULT_MENU_TOGGLE_ID.to_string(),
            menu_panel_id: DEFAULT_MENU_PANEL_ID.to_string(),
            menu_active_class: DEFAULT_MENU_ACTIVE_CLASS.to_string(),
            dismiss_selector: DEFAULT_DISMISS_SELECTOR.to_string(),
            file_input_id: DEFAULT_FILE_INPUT_ID.to_string(),
            file_label_id: DEFAULT_FILE_LABEL_ID.to_string(),
            file_placeholder: DEFAULT_FILE_PLACEHOLDER.to_string(),
            async_form_selector: DEFAULT_ASYNC_FORM_SELECTOR.to_string(),
            mode_select_id: DEFAULT_MODE_SELECT_ID.to_string(),
            mode_endpoint: DEFAULT_MODE_ENDPOINT.to_string(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
            csrf_header_name: DEFAULT_CSRF_HEADER_NAME.to_string(),
            verbose_logging: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("page config override is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("page config field `{field}` must not be empty")]
    EmptyField { field: &'static str },
}

impl PageConfig {
    /// Parses a JSON override object, filling unspecified fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("menu_toggle_id", &self.menu_toggle_id),
            ("menu_panel_id", &self.menu_panel_id),
            ("menu_active_class", &self.menu_active_class),
            ("dismiss_selector", &self.dismiss_selector),
            ("file_input_id", &self.file_input_id),
            ("file_label_id", &self.file_label_id),
            ("async_form_selector", &self.async_form_selector),
            ("mode_select_id", &self.mode_select_id),
            ("mode_endpoint", &self.mode_endpoint),
            ("csrf_cookie_name", &self.csrf_cookie_name),
            ("csrf_header_name", &self.csrf_header_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }
}
