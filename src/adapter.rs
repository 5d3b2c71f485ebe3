//! The public façade over the optional ribbon provider.

use std::any::Any;
use std::sync::Arc;

use crate::binder::{self, BoundOperations};
use crate::catalogue::OperationId;
use crate::config::AdapterConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::invoker::Invoker;
use crate::locator;
use crate::registry::ModuleRegistry;
use crate::value::{CrewRef, RibbonRef, Value};

/// Prestige used when the caller has no preference. The provider only uses
/// prestige for ribbon ordering.
pub const DEFAULT_PRESTIGE: i32 = -10_000;

/// A connected provider session: one instance plus the operations bound
/// against it at connect time.
struct Connection {
    instance: Box<dyn Any>,
    ops: BoundOperations,
}

/// Façade over the optional ribbon provider.
///
/// Every operation tolerates "provider absent", "operation missing in this
/// provider version" and "operation failed", returning its documented
/// default instead. Nothing here returns an error or panics; degradations
/// are visible only on the diagnostics channel.
///
/// The adapter starts uninstalled. [`connect`](Self::connect) is the one
/// explicit step that locates the provider's entry-point type, constructs
/// an instance and binds the operation catalogue; binding never recurs
/// until `connect` is called again.
pub struct RibbonAdapter {
    config: AdapterConfig,
    diagnostics: Arc<dyn Diagnostics>,
    invoker: Invoker,
    connection: Option<Connection>,
}

impl RibbonAdapter {
    /// Create a disconnected adapter reporting through `tracing`.
    pub fn new(config: AdapterConfig) -> Self {
        Self::with_diagnostics(config, Arc::new(TracingDiagnostics))
    }

    /// Create a disconnected adapter with a custom diagnostics sink.
    pub fn with_diagnostics(config: AdapterConfig, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            config,
            invoker: Invoker::new(diagnostics.clone()),
            diagnostics,
            connection: None,
        }
    }

    /// The adapter's configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Connect to the provider.
    ///
    /// Locates the configured entry-point type among the loaded modules,
    /// constructs an instance and binds the operation catalogue. Any
    /// failure leaves the adapter uninstalled. Calling again rebinds from
    /// scratch against the current registry; must not run concurrently
    /// with façade calls.
    pub fn connect(&mut self, modules: &ModuleRegistry) {
        self.connection = None;

        let Some(entry) = locator::locate_entry_point(modules, &self.config.entry_point) else {
            tracing::info!("provider '{}' not installed", self.config.entry_point);
            return;
        };

        match entry.instantiate() {
            Ok(instance) => {
                let ops = binder::bind_operations(entry.as_ref(), self.diagnostics.as_ref());
                tracing::info!(
                    "connected to provider '{}' ({}/{} operations bound)",
                    self.config.entry_point,
                    ops.bound_count(),
                    OperationId::ALL.len()
                );
                self.connection = Some(Connection { instance, ops });
            }
            Err(fault) => {
                tracing::error!(
                    "failed to construct provider '{}': {}",
                    self.config.entry_point,
                    fault
                );
            }
        }
    }

    /// Whether a provider session is installed.
    pub fn is_installed(&self) -> bool {
        self.connection.is_some()
    }

    fn call(&self, op: OperationId, args: &[Value], default: Value) -> Value {
        match &self.connection {
            None => default,
            Some(conn) => {
                self.invoker
                    .invoke(op, conn.ops.get(op), conn.instance.as_ref(), args, default)
            }
        }
    }

    /// The provider's version string.
    ///
    /// `"not installed"` without a session, `"unknown"` when the operation
    /// is unavailable or fails.
    pub fn version(&self) -> String {
        if !self.is_installed() {
            return "not installed".to_string();
        }
        self.call(
            OperationId::GetVersion,
            &[],
            Value::Text("unknown".into()),
        )
        .into_text()
        .unwrap_or_else(|| "unknown".to_string())
    }

    /// Register a ribbon under a unique `code`.
    ///
    /// `texture` is the path to the ribbon artwork, relative to the host's
    /// asset root. `first` marks a first-time-only ribbon. The provider
    /// enforces code uniqueness; registering the same code twice is a
    /// caller error surfaced as a failed registration.
    pub fn register_ribbon(
        &self,
        code: &str,
        texture: &str,
        name: &str,
        description: &str,
        first: bool,
        prestige: i32,
    ) -> Option<RibbonRef> {
        self.call(
            OperationId::RegisterRibbon,
            &[
                Value::Text(code.into()),
                Value::Text(texture.into()),
                Value::Text(name.into()),
                Value::Text(description.into()),
                Value::Bool(first),
                Value::Int(prestige),
            ],
            Value::Unit,
        )
        .into_ribbon()
    }

    /// Register a custom ribbon under a unique numeric `id`.
    ///
    /// Custom ids start at 1001; lower ids collide with the provider's
    /// built-in ribbons.
    pub fn register_custom_ribbon(
        &self,
        id: i32,
        texture: &str,
        name: &str,
        description: &str,
        prestige: i32,
    ) -> Option<RibbonRef> {
        self.call(
            OperationId::RegisterCustomRibbon,
            &[
                Value::Int(id),
                Value::Text(texture.into()),
                Value::Text(name.into()),
                Value::Text(description.into()),
                Value::Int(prestige),
            ],
            Value::Unit,
        )
        .into_ribbon()
    }

    /// Award the ribbon with `code` to one crew member.
    ///
    /// Repeat awards are provider-side no-ops; the first award counts.
    pub fn award_by_code(&self, code: &str, crew: &CrewRef) {
        self.call(
            OperationId::AwardByCode,
            &[Value::Text(code.into()), Value::Crew(crew.clone())],
            Value::Unit,
        );
    }

    /// Award a registered ribbon to one crew member.
    pub fn award_ribbon(&self, ribbon: &RibbonRef, crew: &CrewRef) {
        self.call(
            OperationId::AwardByRibbon,
            &[Value::Ribbon(ribbon.clone()), Value::Crew(crew.clone())],
            Value::Unit,
        );
    }

    /// Award the ribbon with `code` to several crew members.
    pub fn award_all_by_code(&self, code: &str, crew: &[CrewRef]) {
        self.call(
            OperationId::AwardAllByCode,
            &[Value::Text(code.into()), Value::CrewList(crew.to_vec())],
            Value::Unit,
        );
    }

    /// Award a registered ribbon to several crew members.
    pub fn award_ribbon_to_all(&self, ribbon: &RibbonRef, crew: &[CrewRef]) {
        self.call(
            OperationId::AwardAllByRibbon,
            &[Value::Ribbon(ribbon.clone()), Value::CrewList(crew.to_vec())],
            Value::Unit,
        );
    }

    /// Whether the ribbon with `code` has been awarded to the crew member.
    pub fn is_awarded_by_code(&self, code: &str, crew: &CrewRef) -> bool {
        self.call(
            OperationId::IsAwardedByCode,
            &[Value::Text(code.into()), Value::Crew(crew.clone())],
            Value::Bool(false),
        )
        .as_bool()
        .unwrap_or(false)
    }

    /// Whether a registered ribbon has been awarded to the crew member.
    pub fn is_awarded(&self, ribbon: &RibbonRef, crew: &CrewRef) -> bool {
        self.call(
            OperationId::IsAwardedByRibbon,
            &[Value::Ribbon(ribbon.clone()), Value::Crew(crew.clone())],
            Value::Bool(false),
        )
        .as_bool()
        .unwrap_or(false)
    }

    /// Number of missions the crew member has flown.
    pub fn missions_flown(&self, crew: &CrewRef) -> i32 {
        self.stat_int(OperationId::MissionsFlown, crew)
    }

    /// Number of dockings the crew member has performed.
    pub fn dockings(&self, crew: &CrewRef) -> i32 {
        self.stat_int(OperationId::Dockings, crew)
    }

    /// Research points the crew member has accumulated.
    pub fn research(&self, crew: &CrewRef) -> f64 {
        self.stat_float(OperationId::Research, crew)
    }

    /// Total mission time of the crew member.
    pub fn total_mission_time(&self, crew: &CrewRef) -> f64 {
        self.stat_float(OperationId::TotalMissionTime, crew)
    }

    /// Number of contracts the crew member has completed.
    pub fn contracts_completed(&self, crew: &CrewRef) -> i32 {
        self.stat_int(OperationId::ContractsCompleted, crew)
    }

    fn stat_int(&self, op: OperationId, crew: &CrewRef) -> i32 {
        self.call(op, &[Value::Crew(crew.clone())], Value::Int(0))
            .as_int()
            .unwrap_or(0)
    }

    fn stat_float(&self, op: OperationId, crew: &CrewRef) -> f64 {
        self.call(op, &[Value::Crew(crew.clone())], Value::Float(0.0))
            .as_float()
            .unwrap_or(0.0)
    }
}
