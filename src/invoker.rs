//! Fault-absorbing call execution.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::catalogue::OperationId;
use crate::diagnostics::Diagnostics;
use crate::provider::MethodFn;
use crate::value::Value;

/// Executes bound operations against the provider instance.
///
/// This is the one place where provider instability is absorbed: faults,
/// panics and wrongly-kinded results all collapse to the caller-supplied
/// default, reported through the diagnostics channel. Nothing here ever
/// raises outward.
pub struct Invoker {
    diagnostics: Arc<dyn Diagnostics>,
}

impl Invoker {
    pub fn new(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Call `operation` with `args` against `instance`, or return `default`.
    ///
    /// An absent operation returns the default silently; its resolution
    /// failure was already reported once at connect time.
    pub fn invoke(
        &self,
        operation: OperationId,
        bound: Option<&MethodFn>,
        instance: &dyn Any,
        args: &[Value],
        default: Value,
    ) -> Value {
        let Some(handler) = bound else {
            return default;
        };

        let sig = operation.signature();
        match panic::catch_unwind(AssertUnwindSafe(|| handler(instance, args))) {
            Ok(Ok(value)) => {
                if value.kind() == sig.returns {
                    value
                } else {
                    self.diagnostics.call_failure(
                        sig.name,
                        "type mismatch",
                        &format!("expected {}, provider returned {}", sig.returns, value.kind()),
                    );
                    default
                }
            }
            Ok(Err(fault)) => {
                self.diagnostics
                    .call_failure(sig.name, &fault.kind, &fault.message);
                default
            }
            Err(payload) => {
                self.diagnostics
                    .call_failure(sig.name, "panic", &panic_message(payload));
                default
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
