//! Provider-side surface: modules, entry-point types and method tables.
//!
//! A provider ships as a program module (a dynamic library exporting
//! [`MODULE_ENTRY_SYMBOL`], or an in-process registration) and publishes
//! its entry-point types through [`ProviderModule`]. Each entry-point type
//! resolves methods by name, or by name and parameter kinds where the name
//! is overloaded.

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

use crate::value::{Value, ValueKind};

/// Symbol a provider library exports to hand its module to the host.
pub const MODULE_ENTRY_SYMBOL: &str = "ribbon_module_entry";

/// Signature of the exported entry function.
pub type ModuleEntryFn = fn() -> Box<dyn ProviderModule>;

/// Failure raised by provider code during instantiation or a call.
///
/// The failure descriptor that replaces exceptions at the boundary: the
/// invoker consumes it and converts it to the operation's default.
#[derive(Debug, Clone, Error)]
#[error("[{kind}] {message}")]
pub struct ProviderFault {
    /// Failure category, e.g. `DuplicateRibbonCode`.
    pub kind: String,
    /// Human-readable detail.
    pub message: String,
}

impl ProviderFault {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// A directly callable provider method.
///
/// Receives the provider instance and the arguments in catalogue order.
pub type MethodFn =
    Arc<dyn Fn(&dyn Any, &[Value]) -> Result<Value, ProviderFault> + Send + Sync>;

/// One loaded program module and the entry-point types it exports.
pub trait ProviderModule: Send + Sync {
    /// Module name, used in log output only.
    fn name(&self) -> &str;

    /// Entry-point types exported by this module.
    fn exported_types(&self) -> Vec<Arc<dyn EntryPointType>>;
}

/// An exported entry-point type: constructible, with resolvable methods.
pub trait EntryPointType: Send + Sync {
    /// Fully qualified type name used for discovery.
    fn full_name(&self) -> &str;

    /// Construct a fresh provider instance.
    fn instantiate(&self) -> Result<Box<dyn Any>, ProviderFault>;

    /// Resolve a method by name alone. An overloaded name is ambiguous and
    /// resolves to nothing.
    fn method(&self, name: &str) -> Option<MethodFn>;

    /// Resolve a specific overload by name and parameter kinds.
    fn method_with_params(&self, name: &str, params: &[ValueKind]) -> Option<MethodFn>;
}

/// Method registry backing an [`EntryPointType`] implementation.
///
/// Providers register one handler per method overload; the table answers
/// the two resolution queries the binder performs.
#[derive(Default)]
pub struct MethodTable {
    methods: Vec<MethodEntry>,
}

struct MethodEntry {
    name: String,
    params: Vec<ValueKind>,
    handler: MethodFn,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method overload.
    pub fn insert<F>(&mut self, name: impl Into<String>, params: &[ValueKind], handler: F)
    where
        F: Fn(&dyn Any, &[Value]) -> Result<Value, ProviderFault> + Send + Sync + 'static,
    {
        self.methods.push(MethodEntry {
            name: name.into(),
            params: params.to_vec(),
            handler: Arc::new(handler),
        });
    }

    /// Resolve by name; `None` if the name is absent or overloaded.
    pub fn by_name(&self, name: &str) -> Option<MethodFn> {
        let mut found = self.methods.iter().filter(|m| m.name == name);
        let first = found.next()?;
        if found.next().is_some() {
            return None;
        }
        Some(first.handler.clone())
    }

    /// Resolve one overload by exact parameter kinds.
    pub fn by_signature(&self, name: &str, params: &[ValueKind]) -> Option<MethodFn> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.params == params)
            .map(|m| m.handler.clone())
    }

    /// Number of registered overloads.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
