use crate::config::PageConfig;
use crate::diagnostics::{DiagnosticSink, HandlerKind, report};
use crate::environment::PageDocument;
use crate::error::BindingError;

/// A dismiss control paired with the banner it removes.
#[derive(Debug, Clone)]
pub struct DismissControl<N> {
    control: N,
    banner: N,
}

impl<N: Clone> DismissControl<N> {
    pub fn control(&self) -> &N {
        &self.control
    }

    pub fn banner(&self) -> &N {
        &self.banner
    }

    /// Removes the banner. `false` means it was already gone.
    pub fn dismiss<D>(&self, document: &D) -> bool
    where
        D: PageDocument<Node = N>,
    {
        let removed = document.detach(&self.banner);
        tracing::debug!(removed, "notification dismissed");
        removed
    }
}

/// Pairs every dismiss control present right now with its parent banner.
///
/// Banners inserted after this call are never bound.
pub fn bind_dismiss_controls<D>(
    document: &D,
    config: &PageConfig,
    sink: &dyn DiagnosticSink,
) -> Vec<DismissControl<D::Node>>
where
    D: PageDocument,
{
    document
        .query_selector_all(&config.dismiss_selector)
        .into_iter()
        .filter_map(|control| match document.parent(&control) {
            Some(banner) => Some(DismissControl { control, banner }),
            None => {
                let error = BindingError::Detached {
                    handler: HandlerKind::NotificationDismiss,
                    selector: config.dismiss_selector.clone(),
                };
                report(sink, HandlerKind::NotificationDismiss, error.to_string());
                None
            }
        })
        .collect()
}
