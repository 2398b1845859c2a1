use crate::diagnostics::HandlerKind;

/// A handler could not find (or could not use) the element it binds to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("{handler}: element #{id} is missing")]
    MissingElement { handler: HandlerKind, id: String },
    #[error("{handler}: element #{id} is not a {expected}")]
    WrongElement {
        handler: HandlerKind,
        id: String,
        expected: &'static str,
    },
    #[error("{handler}: {selector} matched an element without a parent")]
    Detached {
        handler: HandlerKind,
        selector: String,
    },
}

impl BindingError {
    pub fn missing(handler: HandlerKind, id: &str) -> Self {
        Self::MissingElement {
            handler,
            id: id.to_string(),
        }
    }

    pub fn handler(&self) -> HandlerKind {
        match self {
            Self::MissingElement { handler, .. }
            | Self::WrongElement { handler, .. }
            | Self::Detached { handler, .. } => *handler,
        }
    }
}
