use crate::config::PageConfig;
use crate::diagnostics::HandlerKind;
use crate::environment::PageDocument;
use crate::error::BindingError;

/// Text for the label given the picked file names.
pub fn label_text<'a>(file_names: &'a [String], placeholder: &'a str) -> &'a str {
    file_names.first().map_or(placeholder, String::as_str)
}

/// The upload input whose selection is mirrored into the file-name label.
///
/// The label is looked up on every change rather than held, so a label
/// rendered late is still found.
#[derive(Debug, Clone)]
pub struct FileNameDisplay<N> {
    input: N,
    input_id: String,
    label_id: String,
    placeholder: String,
}

impl<N: Clone> FileNameDisplay<N> {
    pub fn bind<D>(document: &D, config: &PageConfig) -> Result<Self, BindingError>
    where
        D: PageDocument<Node = N>,
    {
        let input = document
            .element_by_id(&config.file_input_id)
            .ok_or_else(|| BindingError::missing(HandlerKind::FileName, &config.file_input_id))?;
        Ok(Self {
            input,
            input_id: config.file_input_id.clone(),
            label_id: config.file_label_id.clone(),
            placeholder: config.file_placeholder.clone(),
        })
    }

    pub fn input(&self) -> &N {
        &self.input
    }

    /// Writes the current selection into the label and returns the text written.
    pub fn reflect<D>(&self, document: &D) -> Result<String, BindingError>
    where
        D: PageDocument<Node = N>,
    {
        let label = document
            .element_by_id(&self.label_id)
            .ok_or_else(|| BindingError::missing(HandlerKind::FileName, &self.label_id))?;
        let file_names = document.selected_file_names(&self.input).ok_or_else(|| {
            BindingError::WrongElement {
                handler: HandlerKind::FileName,
                id: self.input_id.clone(),
                expected: "file input",
            }
        })?;
        let text = label_text(&file_names, &self.placeholder).to_string();
        document.set_text(&label, &text);
        tracing::debug!(label = %text, "file name label updated");
        Ok(text)
    }
}
