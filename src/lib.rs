//! Adapter for calling an optional crew ribbon plugin across versions.
//!
//! The host application calls a fixed catalogue of ribbon operations
//! through [`RibbonAdapter`] without ever holding a compile-time dependency
//! on the provider. The provider may be absent, may be an older or newer
//! version missing some operations, and may fail during any call; in every
//! case the façade returns the operation's documented default and reports
//! the degradation on the diagnostics channel instead of failing the host.
//!
//! Connection is a one-time explicit step: the entry-point type is located
//! by fully-qualified name among the loaded provider modules, an instance
//! is constructed, and every catalogue operation is bound to a callable
//! handle. Partial binding is expected: operations a provider version
//! lacks simply answer with their defaults for the session.
//!
//! # Example
//!
//! ```rust,ignore
//! use lib_ribbon_adapter::{AdapterConfig, ModuleRegistry, RibbonAdapter, CrewRef};
//!
//! let config = AdapterConfig::new("ribbons.ExternalInterface")
//!     .with_modules_dir("plugins");
//! let modules = unsafe { ModuleRegistry::from_config(&config)? };
//!
//! let mut adapter = RibbonAdapter::new(config);
//! adapter.connect(&modules);
//!
//! if adapter.is_installed() {
//!     println!("provider version: {}", adapter.version());
//!     let jeb = CrewRef::new("Jebediah".to_string());
//!     adapter.award_by_code("KSP", &jeb);
//! }
//! # Ok::<(), lib_ribbon_adapter::AdapterError>(())
//! ```

mod adapter;
mod binder;
mod catalogue;
mod config;
mod diagnostics;
mod error;
mod invoker;
mod locator;
mod provider;
mod registry;
mod value;

pub use adapter::*;
pub use binder::*;
pub use catalogue::*;
pub use config::*;
pub use diagnostics::*;
pub use error::*;
pub use invoker::*;
pub use locator::*;
pub use provider::*;
pub use registry::*;
pub use value::*;
