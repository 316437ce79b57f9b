//! Rule configuration.
//!
//! A `RuleSet` is assembled once with the `add_*` builder methods and then
//! reused, read-only, for any number of files.

mod kind;
mod set;

pub use kind::{AllowedValue, ColumnOrderRule, MaxLength, RuleGroup, YesNoMode, YesNoRule};
pub use set::{RuleSet, configure};
