//! Diagnostic channel for binding and invocation failures.

/// Sink for the adapter's degradation reports.
///
/// Write-only: the adapter never reads this channel back. Hosts that need
/// to know a provider is missing operations or failing calls implement this
/// trait and watch it.
pub trait Diagnostics: Send + Sync {
    /// An operation failed to resolve at connect time.
    ///
    /// Emitted once per missing operation per connect; invoking the absent
    /// operation later is silent.
    fn binding_failure(&self, operation: &str, signature: &str);

    /// A bound operation failed during a call. Emitted per occurrence.
    fn call_failure(&self, operation: &str, kind: &str, message: &str);
}

/// Default sink forwarding to `tracing`.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn binding_failure(&self, operation: &str, signature: &str) {
        tracing::error!("failed to bind provider method {} (wanted {})", operation, signature);
    }

    fn call_failure(&self, operation: &str, kind: &str, message: &str) {
        tracing::error!("provider call {} failed [{}]: {}", operation, kind, message);
    }
}
