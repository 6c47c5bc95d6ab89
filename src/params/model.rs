use std::str::FromStr;

/// The closed set of runtime parameter types understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Int,
    Bool,
    Real,
    String,
}

impl ParamType {
    /// Strings live in host memory only and never get a device copy.
    pub fn is_device_resident(&self) -> bool {
        !matches!(self, ParamType::String)
    }
}

impl FromStr for ParamType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" => Ok(ParamType::Int),
            "bool" => Ok(ParamType::Bool),
            "real" => Ok(ParamType::Real),
            "string" => Ok(ParamType::String),
            _ => Err(()),
        }
    }
}

/// A `@namespace` declaration: the C++ namespace symbol and the class owning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub class_name: String,
}

impl Namespace {
    pub fn new(name: &str, class_name: &str) -> Self {
        Self {
            name: name.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// One runtime parameter, as declared on a single data line.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Key used in the inputs file and the Fortran variable name.
    pub name: String,
    /// C++ variable name; equal to `name` unless given as `(name, code_name)`.
    pub code_name: String,
    pub param_type: ParamType,
    pub default: String,
    /// Alternate default compiled in under `AMREX_DEBUG`.
    pub debug_default: Option<String>,
    pub in_fortran: bool,
    pub guard: Option<String>,
    pub namespace: Namespace,
    pub line: usize,
}

impl Parameter {
    /// `namespace::code_name`, the fully qualified C++ variable.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace.name, self.code_name)
    }
}
