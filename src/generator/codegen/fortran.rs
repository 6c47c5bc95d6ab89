//! Per-parameter Fortran fragments for the shared `meth_params` module.

use crate::generator::codegen::cpp::DEBUG_GUARD;
use crate::params::{ParamType, Parameter};

/// Kind suffix appended to every real literal.
pub const REAL_KIND_SUFFIX: &str = "_rt";

/// Module-level allocatable declaration.
pub fn declaration(param: &Parameter) -> String {
    let name = &param.name;
    match param.param_type {
        ParamType::Int => format!("integer,  allocatable, save :: {}\n", name),
        ParamType::Real => format!("real(rt), allocatable, save :: {}\n", name),
        ParamType::Bool => format!("logical,  allocatable, save :: {}\n", name),
        ParamType::String => format!("character (len=:), allocatable, save :: {}\n", name),
    }
}

/// Allocation followed by the default assignment.
///
/// Strings are allocated with length one; the ParmParse query reallocates
/// them to the length of the value it reads.
pub fn default_assignment(param: &Parameter) -> String {
    let name = &param.name;
    let mut out = match param.param_type {
        ParamType::String => format!("    allocate(character(len=1)::{})\n", name),
        ParamType::Int | ParamType::Bool | ParamType::Real => format!("    allocate({})\n", name),
    };

    let default = literal(param.param_type, &param.default);
    match &param.debug_default {
        Some(debug_default) => {
            let debug_default = literal(param.param_type, debug_default);
            out.push_str(&format!("#ifdef {}\n", DEBUG_GUARD));
            out.push_str(&format!("    {} = {};\n", name, debug_default));
            out.push_str("#else\n");
            out.push_str(&format!("    {} = {};\n", name, default));
            out.push_str("#endif\n");
        }
        None => out.push_str(&format!("    {} = {};\n", name, default)),
    }

    out
}

pub fn query(param: &Parameter) -> String {
    format!("    call pp%query(\"{}\", {})\n", param.name, param.name)
}

pub fn device_update(param: &Parameter) -> String {
    format!("    !$acc update device({})\n", param.name)
}

pub fn deallocation(param: &Parameter) -> String {
    format!(
        "    if (allocated({name})) then\n        deallocate({name})\n    end if\n",
        name = param.name
    )
}

/// Rewrites a default literal into Fortran syntax.
///
/// Reals take the `_rt` kind suffix. A kind suffix is only legal on an
/// `e`-exponent literal, so a `d` exponent is rewritten to `e` first.
/// Booleans become `.true.` / `.false.`.
pub fn literal(param_type: ParamType, value: &str) -> String {
    match param_type {
        ParamType::Real => {
            let mut normalized = value.replace(['d', 'D'], "e");
            normalized.push_str(REAL_KIND_SUFFIX);
            normalized
        }
        ParamType::Bool => match value.to_lowercase().as_str() {
            "true" => ".true.".to_string(),
            "false" => ".false.".to_string(),
            _ => value.to_string(),
        },
        ParamType::Int | ParamType::String => value.to_string(),
    }
}
