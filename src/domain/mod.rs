//! Domain models for dmdiag
//!
//! Pure data describing one snapshot of a dependency manager registry:
//! owning units, the components they own, the dependencies those
//! components declare, and the root causes deduced from them.

pub mod component;
pub mod dependency;
pub mod root_cause;
pub mod unit;

pub use component::{Component, PropertyValue};
pub use dependency::{Dependency, DependencyKey, DependencyKind};
pub use root_cause::RootCause;
pub use unit::{OwningUnit, UnitState};
