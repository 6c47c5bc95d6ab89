pub mod grouping;
pub mod model;

pub use grouping::{GuardGroup, NamespaceGroup, group_by_guard, group_by_namespace};
pub use model::{Namespace, ParamType, Parameter};
