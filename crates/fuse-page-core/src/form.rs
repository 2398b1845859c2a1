//! Asynchronous form submission.
//!
//! A submit is captured as a [`FormSnapshot`], planned into an
//! [`OutboundRequest`] that mirrors what the browser would have sent, and
//! dispatched without waiting on the outcome beyond logging it. The caller is
//! responsible for suppressing the browser's own navigation.

use url::Url;
use url::form_urlencoded;

use crate::diagnostics::{DiagnosticSink, HandlerKind, report};
use crate::environment::{
    FormValue, HttpMethod, Navigator, OutboundRequest, PageDocument, RequestBody,
    RequestDispatcher, TransportError,
};

pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const URL_ENCODED_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEncoding {
    UrlEncoded,
    Multipart,
}

impl FormEncoding {
    pub fn from_enctype(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(MULTIPART_FORM_DATA) {
            Self::Multipart
        } else {
            Self::UrlEncoded
        }
    }
}

/// Attributes and fields of a form at the moment it was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot<F> {
    pub action: String,
    pub method: String,
    pub enctype: String,
    pub fields: Vec<(String, FormValue<F>)>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormSubmitError {
    #[error("submitted element is not a form")]
    NotAForm,
    #[error("form action `{action}` does not resolve to an address: {reason}")]
    InvalidAction { action: String, reason: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Resolves `action` against the page address. An empty action targets the
/// page itself.
pub fn resolve_action(action: &str, page_url: &str) -> Result<Url, FormSubmitError> {
    let invalid = |reason: url::ParseError| FormSubmitError::InvalidAction {
        action: action.to_string(),
        reason: reason.to_string(),
    };
    let base = Url::parse(page_url).map_err(invalid)?;
    let action = action.trim();
    if action.is_empty() {
        return Ok(base);
    }
    base.join(action).map_err(invalid)
}

fn search_pairs<F>(fields: &[(String, FormValue<F>)]) -> impl Iterator<Item = (&str, &str)> {
    fields
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_search_value()))
}

pub fn url_encode_fields<F>(fields: &[(String, FormValue<F>)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(search_pairs(fields))
        .finish()
}

/// Builds the request the form describes.
///
/// `POST` forms carry their fields as the body, multipart when the form
/// declares `multipart/form-data` and url-encoded otherwise. Every other
/// method moves the fields into the query string, replacing any existing one.
pub fn plan_form_submission<F>(
    snapshot: FormSnapshot<F>,
    page_url: &str,
) -> Result<OutboundRequest<F>, FormSubmitError> {
    let mut url = resolve_action(&snapshot.action, page_url)?;
    let method = HttpMethod::from_form_attribute(&snapshot.method);

    if method == HttpMethod::Post {
        let (headers, body) = match FormEncoding::from_enctype(&snapshot.enctype) {
            FormEncoding::Multipart => (Vec::new(), RequestBody::Multipart(snapshot.fields)),
            FormEncoding::UrlEncoded => (
                vec![(
                    "Content-Type".to_string(),
                    URL_ENCODED_CONTENT_TYPE.to_string(),
                )],
                RequestBody::UrlEncoded(url_encode_fields(&snapshot.fields)),
            ),
        };
        return Ok(OutboundRequest {
            method,
            url: url.into(),
            headers,
            body: Some(body),
        });
    }

    if snapshot.fields.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(search_pairs(&snapshot.fields));
    }
    Ok(OutboundRequest {
        method,
        url: url.into(),
        headers: Vec::new(),
        body: None,
    })
}

/// Snapshots `form`, plans the request and sends it.
///
/// Failures are reported to the environment's diagnostic sink and returned,
/// but nothing is retried and nothing is surfaced to the user.
pub async fn submit_form<E>(env: &E, form: &E::Node) -> Result<u16, FormSubmitError>
where
    E: PageDocument + Navigator + DiagnosticSink + RequestDispatcher<<E as PageDocument>::File>,
{
    let result = async {
        let snapshot = env.form_snapshot(form).ok_or(FormSubmitError::NotAForm)?;
        let request = plan_form_submission(snapshot, &env.current_url())?;
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "dispatching form submission"
        );
        Ok::<u16, FormSubmitError>(env.dispatch(request).await?)
    }
    .await;

    match &result {
        Ok(status) => tracing::debug!(status, "form submission answered"),
        Err(error) => report(env, HandlerKind::FormSubmit, error.to_string()),
    }
    result
}
