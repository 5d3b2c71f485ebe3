//! One-time method binding at connection time.

use std::collections::HashMap;

use crate::catalogue::OperationId;
use crate::diagnostics::Diagnostics;
use crate::provider::{EntryPointType, MethodFn};

/// Operations resolved at connect time.
///
/// Entries missing here stay absent for the whole session; the adapter
/// answers them with defaults until the next connect.
pub struct BoundOperations {
    ops: HashMap<OperationId, MethodFn>,
}

impl BoundOperations {
    /// The bound handle for an operation, if it resolved.
    pub fn get(&self, op: OperationId) -> Option<&MethodFn> {
        self.ops.get(&op)
    }

    /// Whether an operation resolved at connect time.
    pub fn is_bound(&self, op: OperationId) -> bool {
        self.ops.contains_key(&op)
    }

    /// Number of operations that resolved.
    pub fn bound_count(&self) -> usize {
        self.ops.len()
    }
}

/// Resolve every catalogue operation against the entry-point type.
///
/// Overloaded operations resolve by name and parameter kinds, the rest by
/// name alone. Each operation that fails to resolve is reported once and
/// recorded absent; binding always completes. Partial binding is the
/// expected outcome against older or newer provider versions.
pub fn bind_operations(
    entry: &dyn EntryPointType,
    diagnostics: &dyn Diagnostics,
) -> BoundOperations {
    let mut ops = HashMap::new();

    for op in OperationId::ALL {
        let sig = op.signature();
        let resolved = match sig.params {
            Some(params) => entry.method_with_params(sig.name, params),
            None => entry.method(sig.name),
        };
        match resolved {
            Some(handler) => {
                ops.insert(op, handler);
            }
            None => diagnostics.binding_failure(sig.name, &sig.describe()),
        }
    }

    BoundOperations { ops }
}
