//! Registry of type-identification strategies.
//!
//! Each strategy answers the same question ("is this value of the target
//! kind?") through a different mechanism, so their relative cost can be
//! compared on identical input. Strategies are stateless function pointers
//! and must not allocate.

use std::any::TypeId;

use crate::error::BenchError;
use crate::fixture::{Circle, Hexagon, Shape, Square, Triangle};
use crate::Kind;

/// A pure type-check predicate. Stateless; must not allocate.
pub type StrategyFn = fn(&dyn Shape, Kind) -> bool;

/// A named strategy under comparison.
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub description: &'static str,
    pub check: StrategyFn,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// `TypeId` of the concrete type behind each kind.
fn concrete_type_id(kind: Kind) -> TypeId {
    match kind {
        Kind::Circle => TypeId::of::<Circle>(),
        Kind::Square => TypeId::of::<Square>(),
        Kind::Triangle => TypeId::of::<Triangle>(),
        Kind::Hexagon => TypeId::of::<Hexagon>(),
    }
}

/// Explicit discriminant tag: one virtual call, one integer compare.
fn check_kind_tag(shape: &dyn Shape, target: Kind) -> bool {
    shape.kind() == target
}

/// Safe downcast to the concrete type.
fn check_downcast(shape: &dyn Shape, target: Kind) -> bool {
    let any = shape.as_any();
    match target {
        Kind::Circle => any.downcast_ref::<Circle>().is_some(),
        Kind::Square => any.downcast_ref::<Square>().is_some(),
        Kind::Triangle => any.downcast_ref::<Triangle>().is_some(),
        Kind::Hexagon => any.downcast_ref::<Hexagon>().is_some(),
    }
}

/// Dynamic type identity by comparing `TypeId`s directly.
fn check_type_id(shape: &dyn Shape, target: Kind) -> bool {
    shape.as_any().type_id() == concrete_type_id(target)
}

/// Dynamic type identity through `Any::is`.
fn check_any_is(shape: &dyn Shape, target: Kind) -> bool {
    let any = shape.as_any();
    match target {
        Kind::Circle => any.is::<Circle>(),
        Kind::Square => any.is::<Square>(),
        Kind::Triangle => any.is::<Triangle>(),
        Kind::Hexagon => any.is::<Hexagon>(),
    }
}

/// The built-in strategy set, in registration order.
pub const BUILTIN_STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "kind-tag",
        description: "virtual discriminant accessor compared against the target",
        check: check_kind_tag,
    },
    Strategy {
        name: "downcast",
        description: "Any::downcast_ref to the concrete type",
        check: check_downcast,
    },
    Strategy {
        name: "type-id",
        description: "TypeId equality against the target's concrete type",
        check: check_type_id,
    },
    Strategy {
        name: "any-is",
        description: "Any::is against the concrete type",
        check: check_any_is,
    },
];

/// Explicit name-to-strategy registry. No dynamic discovery: every
/// strategy is registered by a call site.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    entries: Vec<Strategy>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with [`BUILTIN_STRATEGIES`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for strategy in BUILTIN_STRATEGIES {
            registry.register(*strategy);
        }
        registry
    }

    /// Register a strategy. Re-registering a name replaces the previous
    /// entry, keeping its position in iteration order.
    pub fn register(&mut self, strategy: Strategy) {
        match self.entries.iter_mut().find(|s| s.name == strategy.name) {
            Some(slot) => *slot = strategy,
            None => self.entries.push(strategy),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&Strategy, BenchError> {
        self.entries
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| BenchError::UnknownStrategy {
                name: name.to_string(),
            })
    }

    /// Resolve a list of names, preserving the requested order.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<&Strategy>, BenchError> {
        names.iter().map(|n| self.lookup(n)).collect()
    }

    /// All registered strategies in registration order.
    pub fn all(&self) -> &[Strategy] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|s| s.name).collect()
    }
}
