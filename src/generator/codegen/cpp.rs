//! Per-parameter C++ fragments.

use crate::params::{ParamType, Parameter};

pub const DEBUG_GUARD: &str = "AMREX_DEBUG";

/// Storage definition, `NS_declares.H`.
pub fn definition(param: &Parameter) -> String {
    let qualified = param.qualified_name();
    match param.param_type {
        ParamType::Int => format!("AMREX_GPU_MANAGED int         {};\n", qualified),
        ParamType::Bool => format!("AMREX_GPU_MANAGED bool        {};\n", qualified),
        ParamType::Real => format!("AMREX_GPU_MANAGED amrex::Real {};\n", qualified),
        ParamType::String => format!("std::string {};\n", qualified),
    }
}

/// Extern declaration inside the namespace scope, `NS_params.H`.
pub fn extern_declaration(param: &Parameter) -> String {
    let name = &param.code_name;
    match param.param_type {
        ParamType::Int => format!("extern AMREX_GPU_MANAGED int {};\n", name),
        ParamType::Bool => format!("extern AMREX_GPU_MANAGED bool {};\n", name),
        ParamType::Real => format!("extern AMREX_GPU_MANAGED amrex::Real {};\n", name),
        ParamType::String => format!("extern std::string {};\n", name),
    }
}

/// Default assignment; selects the debug default under `AMREX_DEBUG` when one exists.
pub fn default_assignment(param: &Parameter) -> String {
    let qualified = param.qualified_name();
    match &param.debug_default {
        Some(debug_default) => format!(
            "#ifdef {guard}\n{var} = {debug};\n#else\n{var} = {default};\n#endif\n",
            guard = DEBUG_GUARD,
            var = qualified,
            debug = debug_default,
            default = param.default,
        ),
        None => format!("{} = {};\n", qualified, param.default),
    }
}

/// ParmParse lookup overriding the default from the inputs file.
pub fn query(param: &Parameter) -> String {
    format!("pp.query(\"{}\", {});\n", param.name, param.qualified_name())
}

/// One `job_info` line flagging the parameter with `[*]` when it differs from its default.
pub fn job_info_test(param: &Parameter) -> String {
    let qualified = param.qualified_name();
    format!(
        "jobInfoFile << ({var} == {default} ? \"    \" : \"[*] \") << \"{ns}.{name} = \" << {var} << std::endl;\n",
        var = qualified,
        default = param.default,
        ns = param.namespace.name,
        name = param.code_name,
    )
}

