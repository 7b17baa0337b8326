// SPDX-License-Identifier: MPL-2.0
//! Running toast action payloads.
//!
//! Pressing a toast's action button hands its payload to an [`ActionRunner`]
//! supplied by the host. Whatever the runner does (navigation, a retry, a
//! network call) is opaque to the overlay; a failure is logged and never
//! keeps the toast open.

use crate::diagnostics::DiagnosticsHandle;
use crate::domain::toast::ToastId;
use crate::error::{BoxError, Error, Result};
use futures_util::future::BoxFuture;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;

/// Future returned by [`crate::session::OverlaySession::press_action`].
pub type ActionTask = BoxFuture<'static, Result<()>>;

/// Performs the side effect associated with an action payload.
pub trait ActionRunner<A>: Send + Sync {
    fn run(&self, action: A) -> BoxFuture<'static, std::result::Result<(), BoxError>>;
}

impl<A, F, Fut> ActionRunner<A> for F
where
    F: Fn(A) -> Fut + Send + Sync,
    Fut: Future<Output = std::result::Result<(), BoxError>> + Send + 'static,
{
    fn run(&self, action: A) -> BoxFuture<'static, std::result::Result<(), BoxError>> {
        Box::pin(self(action))
    }
}

/// Runs `action` through `runner`, logging a failure with the payload that caused it.
///
/// The returned error has already been reported; callers may ignore it.
pub fn run_guarded<A>(
    runner: Arc<dyn ActionRunner<A>>,
    id: ToastId,
    action: A,
    diagnostics: Option<DiagnosticsHandle>,
) -> ActionTask
where
    A: Debug + Send + 'static,
{
    let payload = format!("{action:?}");
    let task = runner.run(action);
    Box::pin(async move {
        match task.await {
            Ok(()) => Ok(()),
            Err(source) => {
                tracing::warn!(%id, %payload, error = %source, "toast action failed");
                if let Some(handle) = &diagnostics {
                    handle.log_action_failed(&id, payload.clone(), source.to_string());
                }
                Err(Error::action_failed(payload, source))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    enum Nav {
        Settings,
        Broken,
    }

    fn runner(calls: Arc<AtomicUsize>) -> Arc<dyn ActionRunner<Nav>> {
        Arc::new(move |nav: Nav| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                match nav {
                    Nav::Settings => Ok(()),
                    Nav::Broken => Err::<(), BoxError>("screen missing".into()),
                }
            }
        })
    }

    #[tokio::test]
    async fn successful_action_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = run_guarded(runner(Arc::clone(&calls)), ToastId::new("t"), Nav::Settings, None).await;
        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_is_wrapped_with_payload_and_recorded() {
        let mut collector = DiagnosticsCollector::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let result = run_guarded(
            runner(calls),
            ToastId::new("t"),
            Nav::Broken,
            Some(collector.handle()),
        )
        .await;

        match result {
            Err(Error::ActionFailed { payload, source }) => {
                assert_eq!(payload, "Broken");
                assert_eq!(source.to_string(), "screen missing");
            }
            other => panic!("expected ActionFailed, got {other:?}"),
        }

        collector.process_pending();
        let recorded = collector.iter().any(|event| {
            matches!(
                &event.kind,
                DiagnosticEventKind::ActionFailed { payload, .. } if payload == "Broken"
            )
        });
        assert!(recorded);
    }
}
