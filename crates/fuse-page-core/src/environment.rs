use async_trait::async_trait;

use crate::form::FormSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Maps a form's `method` attribute. Only `post` (any case) selects a
    /// request body; everything else, including an empty attribute, is `GET`.
    pub fn from_form_attribute(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("post") {
            Self::Post
        } else {
            Self::Get
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A field value captured from a form. `F` is the platform's file handle.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue<F> {
    Text(String),
    File(FileEntry<F>),
}

impl<F> FormValue<F> {
    /// The string a `URLSearchParams` conversion would produce for this value.
    pub fn as_search_value(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::File(file) => &file.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry<F> {
    pub name: String,
    pub content_type: Option<String>,
    pub payload: F,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    UrlEncoded(String),
    Multipart(Vec<(String, FormValue<F>)>),
    Json(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest<F> {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody<F>>,
}

impl<F> OutboundRequest<F> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Read and mutate the live document. Handles are non-owning and may be
/// re-queried at any time.
pub trait PageDocument {
    type Node: Clone;
    type File;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Removes `node` from its parent. Returns `false` if it was already detached.
    fn detach(&self, node: &Self::Node) -> bool;
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_text(&self, node: &Self::Node, text: &str);
    /// Current `value` of an input or select; `None` for other elements.
    fn value(&self, node: &Self::Node) -> Option<String>;
    /// Names of the files picked in a file input; `None` if `node` is not one.
    fn selected_file_names(&self, node: &Self::Node) -> Option<Vec<String>>;
    /// Captures a form's attributes and fields; `None` if `node` is not a form.
    fn form_snapshot(&self, node: &Self::Node) -> Option<FormSnapshot<Self::File>>;
}

#[async_trait(?Send)]
pub trait RequestDispatcher<F> {
    /// Sends the request and resolves with the response status code.
    async fn dispatch(&self, request: OutboundRequest<F>) -> Result<u16, TransportError>;
}

pub trait Navigator {
    fn current_url(&self) -> String;
    fn reload(&self);
}
