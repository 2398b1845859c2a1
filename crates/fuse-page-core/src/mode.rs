use crate::config::PageConfig;
use crate::cookie::CookieSource;
use crate::diagnostics::{DiagnosticSink, HandlerKind, report};
use crate::environment::{
    HttpMethod, Navigator, OutboundRequest, PageDocument, RequestBody, RequestDispatcher,
};
use crate::error::BindingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeUpdateOutcome {
    /// 2xx: the page was reloaded.
    Reloaded { status: u16 },
    /// Non-2xx: nothing visible happens.
    Rejected { status: u16 },
    TransportFailed { message: String },
}

/// Builds `POST <endpoint>` with the JSON mode body and the anti-forgery
/// header. A missing token still produces a request, with an empty header.
pub fn build_mode_update_request<F>(
    mode: &str,
    csrf_token: Option<&str>,
    config: &PageConfig,
) -> OutboundRequest<F> {
    let body = serde_json::json!({ "mode": mode }).to_string();
    OutboundRequest {
        method: HttpMethod::Post,
        url: config.mode_endpoint.clone(),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                config.csrf_header_name.clone(),
                csrf_token.unwrap_or_default().to_string(),
            ),
        ],
        body: Some(RequestBody::Json(body)),
    }
}

/// Sends the new mode and reloads the page on any 2xx answer.
pub async fn update_mode<E>(env: &E, mode: &str, config: &PageConfig) -> ModeUpdateOutcome
where
    E: PageDocument
        + CookieSource
        + Navigator
        + DiagnosticSink
        + RequestDispatcher<<E as PageDocument>::File>,
{
    let token = env.cookie(&config.csrf_cookie_name);
    if token.is_none() {
        tracing::debug!(
            cookie = %config.csrf_cookie_name,
            "no anti-forgery token in cookie store"
        );
    }
    let request = build_mode_update_request(mode, token.as_deref(), config);

    match env.dispatch(request).await {
        Ok(status) if (200..=299).contains(&status) => {
            tracing::debug!(status, mode, "mode updated, reloading");
            env.reload();
            ModeUpdateOutcome::Reloaded { status }
        }
        Ok(status) => {
            report(
                env,
                HandlerKind::ModeSelect,
                format!("mode update failed with status {status}"),
            );
            ModeUpdateOutcome::Rejected { status }
        }
        Err(error) => {
            report(
                env,
                HandlerKind::ModeSelect,
                format!("mode update request failed: {error}"),
            );
            ModeUpdateOutcome::TransportFailed {
                message: error.to_string(),
            }
        }
    }
}

/// The `<select>` whose changes trigger a mode update.
#[derive(Debug, Clone)]
pub struct ModeSelector<N> {
    select: N,
    select_id: String,
}

impl<N: Clone> ModeSelector<N> {
    pub fn bind<D>(document: &D, config: &PageConfig) -> Result<Self, BindingError>
    where
        D: PageDocument<Node = N>,
    {
        let select = document
            .element_by_id(&config.mode_select_id)
            .ok_or_else(|| BindingError::missing(HandlerKind::ModeSelect, &config.mode_select_id))?;
        Ok(Self {
            select,
            select_id: config.mode_select_id.clone(),
        })
    }

    pub fn select(&self) -> &N {
        &self.select
    }

    pub fn selected_mode<D>(&self, document: &D) -> Result<String, BindingError>
    where
        D: PageDocument<Node = N>,
    {
        document
            .value(&self.select)
            .ok_or_else(|| BindingError::WrongElement {
                handler: HandlerKind::ModeSelect,
                id: self.select_id.clone(),
                expected: "select",
            })
    }
}
