//! Registry of loaded program modules.

use std::path::Path;

use libloading::{Library, Symbol};

use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::provider::{ModuleEntryFn, ProviderModule, MODULE_ENTRY_SYMBOL};

/// The set of currently loaded program modules searched during discovery.
///
/// Modules arrive two ways: in-process registration (static linking,
/// tests), or a provider library loaded from disk. Loaded libraries stay
/// mapped for the registry's lifetime.
pub struct ModuleRegistry {
    modules: Vec<LoadedModule>,
}

struct LoadedModule {
    module: Box<dyn ProviderModule>,
    /// Keeps the backing library alive alongside its module
    _library: Option<Library>,
}

/// Platform extension of provider libraries.
fn library_extension() -> &'static str {
    if cfg!(target_os = "macos") {
        "dylib"
    } else if cfg!(target_os = "windows") {
        "dll"
    } else {
        "so"
    }
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Build a registry from configuration, scanning the configured
    /// provider directory when one is set.
    ///
    /// # Safety
    /// Same as [`scan_dir`](Self::scan_dir).
    pub unsafe fn from_config(config: &AdapterConfig) -> Result<Self> {
        let mut registry = Self::new();
        if let Some(dir) = &config.modules_dir {
            registry.scan_dir(dir)?;
        }
        Ok(registry)
    }

    /// Register an in-process module.
    pub fn register(&mut self, module: Box<dyn ProviderModule>) {
        tracing::info!("registered provider module '{}'", module.name());
        self.modules.push(LoadedModule {
            module,
            _library: None,
        });
    }

    /// Load a provider library and register the module it exports.
    ///
    /// # Safety
    /// This loads native code which could be unsafe. Ensure you trust the
    /// library.
    pub unsafe fn load_library(&mut self, path: &Path) -> Result<()> {
        let library = Library::new(path)
            .map_err(|e| AdapterError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let entry: Symbol<ModuleEntryFn> = library
            .get(MODULE_ENTRY_SYMBOL.as_bytes())
            .map_err(|e| AdapterError::SymbolNotFound(e.to_string()))?;

        let module = entry();
        tracing::info!(
            "loaded provider module '{}' from {}",
            module.name(),
            path.display()
        );

        self.modules.push(LoadedModule {
            module,
            _library: Some(library),
        });
        Ok(())
    }

    /// Scan a directory for provider libraries.
    ///
    /// Candidates that fail to load are skipped with a warning rather than
    /// failing the scan. Returns the number of modules loaded.
    ///
    /// # Safety
    /// Same as [`load_library`](Self::load_library).
    pub unsafe fn scan_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(library_extension()) {
                continue;
            }
            match self.load_library(&path) {
                Ok(()) => loaded += 1,
                Err(e) => {
                    tracing::warn!("skipping provider candidate {}: {}", path.display(), e);
                }
            }
        }
        Ok(loaded)
    }

    /// Iterate the loaded modules.
    pub fn modules(&self) -> impl Iterator<Item = &dyn ProviderModule> {
        self.modules.iter().map(|m| m.module.as_ref())
    }

    /// Number of loaded modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
