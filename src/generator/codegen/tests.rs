#[cfg(test)]
mod tests {
    use crate::generator::codegen::template::expand_template;
    use crate::generator::codegen::{FORTRAN_MODULE_FILE, GeneratedFile, ParamCodeGenerator, cpp};
    use crate::generator::parse_source;
    use crate::params::Parameter;
    use anyhow::Result;

    const PARAMETERS: &str = r#"
@namespace: castro Castro

(solver_tol, cfl) real (1.e-6, 1.e-8) y None
do_hydro          int  -1              y
job_name          string "castro"     y
rotation_period   real 1.0             y ROTATION
omega_x           real 0.0             n ROTATION
grav_source_type  int  4               n GRAVITY
print_update      bool true

@namespace: diffusion Diffusion
diffuse_cutoff    real 0.0             y
"#;

    const TEMPLATE: &str = "module meth_params_module\n\n  implicit none\n\n  @@f90_declarations@@\n\ncontains\n\n  subroutine ca_set_castro_method_params()\n    type (amrex_parmparse) :: pp\n    @@set_castro_params@@\n  end subroutine\n\n  subroutine ca_destroy_castro_method_params()\n    @@free_castro_params@@\n  end subroutine\n\nend module meth_params_module\n";

    fn params() -> Vec<Parameter> {
        parse_source(PARAMETERS).unwrap()
    }

    fn find<'a>(files: &'a [GeneratedFile], name: &str) -> &'a str {
        &files
            .iter()
            .find(|f| f.file_name == name)
            .unwrap_or_else(|| panic!("{} was not generated", name))
            .contents
    }

    #[test]
    fn test_cpp_fragments_for_aliased_debug_parameter() {
        let params = params();
        let p = &params[0];

        assert_eq!(cpp::extern_declaration(p), "extern AMREX_GPU_MANAGED amrex::Real cfl;\n");
        assert_eq!(cpp::definition(p), "AMREX_GPU_MANAGED amrex::Real castro::cfl;\n");
        assert_eq!(
            cpp::default_assignment(p),
            "#ifdef AMREX_DEBUG\ncastro::cfl = 1.e-8;\n#else\ncastro::cfl = 1.e-6;\n#endif\n"
        );
        assert_eq!(cpp::query(p), "pp.query(\"solver_tol\", castro::cfl);\n");
    }

    #[test]
    fn test_job_info_keeps_string_quotes() {
        let params = params();

        assert_eq!(
            cpp::job_info_test(&params[2]),
            "jobInfoFile << (castro::job_name == \"castro\" ? \"    \" : \"[*] \") << \"castro.job_name = \" << castro::job_name << std::endl;\n"
        );
        assert!(cpp::job_info_test(&params[1]).contains("castro::do_hydro == -1 ?"));
    }

    #[test]
    fn test_four_headers_per_namespace_then_module() -> Result<()> {
        let generator = ParamCodeGenerator::new("_cpp_parameters")?;
        let files = generator.generate(&params(), TEMPLATE)?;

        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "castro_declares.H",
                "castro_params.H",
                "castro_queries.H",
                "castro_job_info_tests.H",
                "diffusion_declares.H",
                "diffusion_params.H",
                "diffusion_queries.H",
                "diffusion_job_info_tests.H",
                FORTRAN_MODULE_FILE,
            ]
        );

        for file in &files {
            assert!(
                file.contents.contains("please edit _cpp_parameters and rebuild"),
                "{} is missing the generated-file banner",
                file.file_name
            );
        }

        Ok(())
    }

    #[test]
    fn test_declares_header_groups_by_guard() -> Result<()> {
        let generator = ParamCodeGenerator::new("_cpp_parameters")?;
        let files = generator.generate_namespace_files(&params())?;
        let declares = find(&files, "castro_declares.H");

        let expected_body = "#ifndef _CASTRO_DECLARES_H_\n\
#define _CASTRO_DECLARES_H_\n\
AMREX_GPU_MANAGED amrex::Real castro::cfl;\n\
AMREX_GPU_MANAGED int         castro::do_hydro;\n\
std::string castro::job_name;\n\
AMREX_GPU_MANAGED bool        castro::print_update;\n\
#ifdef ROTATION\n\
AMREX_GPU_MANAGED amrex::Real castro::rotation_period;\n\
AMREX_GPU_MANAGED amrex::Real castro::omega_x;\n\
#endif\n\
#ifdef GRAVITY\n\
AMREX_GPU_MANAGED int         castro::grav_source_type;\n\
#endif\n\
#endif\n";

        assert!(declares.ends_with(expected_body), "Unexpected declares header:\n{}", declares);
        Ok(())
    }

    #[test]
    fn test_params_header_declares_externs_in_namespace() -> Result<()> {
        let generator = ParamCodeGenerator::new("_cpp_parameters")?;
        let files = generator.generate_namespace_files(&params())?;
        let header = find(&files, "diffusion_params.H");

        assert!(header.contains("#ifndef _DIFFUSION_PARAMS_H_\n#define _DIFFUSION_PARAMS_H_\n"));
        assert!(header.contains(
            "namespace diffusion {\nextern AMREX_GPU_MANAGED amrex::Real diffuse_cutoff;\n}\n\n#endif\n"
        ));
        assert!(!header.contains("cfl"), "Parameters must stay in their own namespace");
        Ok(())
    }

    #[test]
    fn test_queries_assign_default_before_lookup() -> Result<()> {
        let generator = ParamCodeGenerator::new("_cpp_parameters")?;
        let files = generator.generate_namespace_files(&params())?;
        let queries = find(&files, "castro_queries.H");

        let default_at = queries.find("castro::do_hydro = -1;").unwrap();
        let query_at = queries.find("pp.query(\"do_hydro\", castro::do_hydro);").unwrap();
        assert!(default_at < query_at);

        assert!(queries.contains(
            "#ifdef ROTATION\ncastro::rotation_period = 1.0;\npp.query(\"rotation_period\", castro::rotation_period);\n\ncastro::omega_x = 0.0;\npp.query(\"omega_x\", castro::omega_x);\n\n#endif\n\n"
        ));
        Ok(())
    }

    #[test]
    fn test_declarations_marker_expansion() {
        let module = expand_template(TEMPLATE, &params(), "");

        assert!(module.contains(
            "  real(rt), allocatable, save :: solver_tol\n  integer,  allocatable, save :: do_hydro\n  character (len=:), allocatable, save :: job_name\n  real(rt), allocatable, save :: rotation_period\n  real(rt), allocatable, save :: diffuse_cutoff\n"
        ));
        assert!(module.contains(
            "\n  !$acc declare &\n  !$acc create(solver_tol) &\n  !$acc create(do_hydro) &\n#ifdef ROTATION\n  !$acc create(rotation_period) &\n#endif\n  !$acc create(diffuse_cutoff)\n\ncontains\n"
        ));
        assert!(!module.contains("create(job_name)"), "Strings stay off the device");
        assert!(!module.contains("@@"), "Every marker should be replaced");
    }

    #[test]
    fn test_setup_marker_expansion() {
        let module = expand_template(TEMPLATE, &params(), "");

        let castro_setup = concat!(
            "    allocate(solver_tol)\n",
            "#ifdef AMREX_DEBUG\n",
            "    solver_tol = 1.e-8_rt;\n",
            "#else\n",
            "    solver_tol = 1.e-6_rt;\n",
            "#endif\n",
            "    allocate(do_hydro)\n",
            "    do_hydro = -1;\n",
            "    allocate(character(len=1)::job_name)\n",
            "    job_name = \"castro\";\n",
            "#ifdef ROTATION\n",
            "    allocate(rotation_period)\n",
            "    rotation_period = 1.0_rt;\n",
            "#endif\n",
            "\n",
            "    call amrex_parmparse_build(pp, \"castro\")\n",
            "    call pp%query(\"solver_tol\", solver_tol)\n",
            "    call pp%query(\"do_hydro\", do_hydro)\n",
            "    call pp%query(\"job_name\", job_name)\n",
            "#ifdef ROTATION\n",
            "    call pp%query(\"rotation_period\", rotation_period)\n",
            "#endif\n",
            "    call amrex_parmparse_destroy(pp)\n\n\n",
        );
        assert!(module.contains(castro_setup), "Unexpected setup block:\n{}", module);

        let device_updates = concat!(
            "    call amrex_parmparse_build(pp, \"diffusion\")\n",
            "    call pp%query(\"diffuse_cutoff\", diffuse_cutoff)\n",
            "    call amrex_parmparse_destroy(pp)\n\n\n\n",
            "    !$acc update device(solver_tol)\n",
            "    !$acc update device(do_hydro)\n",
            "#ifdef ROTATION\n",
            "    !$acc update device(rotation_period)\n",
            "#endif\n",
            "    !$acc update device(diffuse_cutoff)\n",
            "  end subroutine\n",
        );
        assert!(module.contains(device_updates), "Unexpected device updates:\n{}", module);
    }

    #[test]
    fn test_teardown_marker_expansion() {
        let module = expand_template(TEMPLATE, &params(), "");

        assert!(module.contains(
            "  subroutine ca_destroy_castro_method_params()\n    if (allocated(solver_tol)) then\n        deallocate(solver_tol)\n    end if\n"
        ));
        assert!(module.contains("    if (allocated(diffuse_cutoff)) then\n        deallocate(diffuse_cutoff)\n    end if\n\n\n  end subroutine\n"));
    }

    #[test]
    fn test_unbound_parameters_never_reach_fortran() {
        let module = expand_template(TEMPLATE, &params(), "");

        for name in ["omega_x", "grav_source_type", "print_update", "cfl)"] {
            assert!(!module.contains(name), "{} leaked into the Fortran module", name);
        }
        assert!(!module.contains("GRAVITY"));
    }

    #[test]
    fn test_template_lines_pass_through() {
        let module = expand_template(TEMPLATE, &[], "! banner\n");

        assert!(module.starts_with("! banner\nmodule meth_params_module\n\n  implicit none\n"));
        assert!(module.ends_with("end module meth_params_module\n"));
        assert!(!module.contains("!$acc declare"), "No declare block without device parameters");
    }
}
