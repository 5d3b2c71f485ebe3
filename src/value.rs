//! Values crossing the provider boundary.
//!
//! Calls into the provider carry arguments and results as [`Value`]s, a
//! closed set of semantic kinds. Ribbon and crew references are opaque
//! tokens: the adapter moves them between host and provider without ever
//! looking inside.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque ribbon token.
///
/// Produced by the provider on registration and passed back into award and
/// query calls unchanged.
#[derive(Clone)]
pub struct RibbonRef(Arc<dyn Any + Send + Sync>);

impl RibbonRef {
    /// Wrap a provider-owned token.
    pub fn new<T: Any + Send + Sync>(token: T) -> Self {
        Self(Arc::new(token))
    }

    /// Provider-side access to the wrapped token.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_ref().downcast_ref()
    }
}

impl fmt::Debug for RibbonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RibbonRef(..)")
    }
}

/// Opaque crew identity token.
///
/// Supplied by the host and passed through unmodified; the provider decides
/// what identity means.
#[derive(Clone)]
pub struct CrewRef(Arc<dyn Any + Send + Sync>);

impl CrewRef {
    /// Wrap a host-owned identity token.
    pub fn new<T: Any + Send + Sync>(token: T) -> Self {
        Self(Arc::new(token))
    }

    /// Provider-side access to the wrapped token.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_ref().downcast_ref()
    }
}

impl fmt::Debug for CrewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CrewRef(..)")
    }
}

/// Semantic kind of a [`Value`], used for overload discrimination and
/// return-type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Unit,
    Bool,
    Int,
    Float,
    Text,
    Ribbon,
    Crew,
    CrewList,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Unit => "Unit",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::Text => "Text",
            ValueKind::Ribbon => "Ribbon",
            ValueKind::Crew => "Crew",
            ValueKind::CrewList => "CrewList",
        })
    }
}

/// An argument or result of a provider call.
#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i32),
    Float(f64),
    Text(String),
    Ribbon(RibbonRef),
    Crew(CrewRef),
    CrewList(Vec<CrewRef>),
}

impl Value {
    /// The value's semantic kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unit => ValueKind::Unit,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Ribbon(_) => ValueKind::Ribbon,
            Value::Crew(_) => ValueKind::Crew,
            Value::CrewList(_) => ValueKind::CrewList,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ribbon(&self) -> Option<&RibbonRef> {
        match self {
            Value::Ribbon(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_crew(&self) -> Option<&CrewRef> {
        match self {
            Value::Crew(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_crew_list(&self) -> Option<&[CrewRef]> {
        match self {
            Value::CrewList(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_ribbon(self) -> Option<RibbonRef> {
        match self {
            Value::Ribbon(r) => Some(r),
            _ => None,
        }
    }
}
