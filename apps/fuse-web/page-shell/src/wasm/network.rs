use super::*;

use async_trait::async_trait;
use fuse_page_core::{
    FormValue, HttpMethod, OutboundRequest, RequestBody, RequestDispatcher, TransportError,
};
use gloo_net::http::Request;

#[async_trait(?Send)]
impl RequestDispatcher<web_sys::File> for BrowserPage {
    async fn dispatch(
        &self,
        request: OutboundRequest<web_sys::File>,
    ) -> Result<u16, TransportError> {
        let result = send_request(request).await;
        DIAGNOSTICS.with(|state| state.borrow_mut().count_dispatch(result.is_ok()));
        result
    }
}

pub(super) async fn send_request(
    request: OutboundRequest<web_sys::File>,
) -> Result<u16, TransportError> {
    let mut request_builder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
    };
    for (header_name, header_value) in &request.headers {
        request_builder = request_builder.header(header_name, header_value);
    }

    let response = if let Some(body) = request.body {
        let body = request_body_to_js(body)?;
        let request = request_builder
            .body(body)
            .map_err(|error| TransportError::Build(error.to_string()))?;
        request.send().await.map_err(map_network_error)?
    } else {
        request_builder.send().await.map_err(map_network_error)?
    };

    Ok(response.status())
}

pub(super) fn map_network_error(error: gloo_net::Error) -> TransportError {
    TransportError::Network(error.to_string())
}

/// Multipart bodies become a `FormData` so the browser writes the boundary
/// and the file bytes itself.
pub(super) fn request_body_to_js(
    body: RequestBody<web_sys::File>,
) -> Result<JsValue, TransportError> {
    match body {
        RequestBody::UrlEncoded(text) | RequestBody::Json(text) => Ok(JsValue::from_str(&text)),
        RequestBody::Multipart(fields) => {
            let form_data = web_sys::FormData::new()
                .map_err(|_| TransportError::Build("failed to create multipart body".to_string()))?;
            for (name, value) in fields {
                let appended = match value {
                    FormValue::Text(text) => form_data.append_with_str(&name, &text),
                    FormValue::File(file) => {
                        form_data.append_with_blob_and_filename(&name, &file.payload, &file.name)
                    }
                };
                appended.map_err(|_| {
                    TransportError::Build(format!("failed to append multipart field `{name}`"))
                })?;
            }
            Ok(form_data.into())
        }
    }
}
