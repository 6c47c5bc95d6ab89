pub mod cpp;
pub mod fortran;
pub mod layout;
pub mod template;
mod tests;

use crate::params::grouping::write_guarded;
use crate::params::{Parameter, group_by_guard, group_by_namespace};
use anyhow::Result;
use layout::{HeaderKind, HeaderLayouts, cpp_banner, fortran_banner};

/// Name of the shared Fortran module produced from the template.
pub const FORTRAN_MODULE_FILE: &str = "meth_params_nd.F90";

/// A rendered file, ready to be written into the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

/// Output file name for one of the per-namespace headers.
pub fn output_file_name(namespace: &str, kind: HeaderKind) -> String {
    format!("{}{}", namespace, kind.file_suffix())
}

pub struct ParamCodeGenerator {
    layouts: HeaderLayouts,
    source_name: String,
}

impl ParamCodeGenerator {
    /// `source_name` is the parameter file named in the generated-file banners.
    pub fn new(source_name: &str) -> Result<Self> {
        Ok(Self {
            layouts: HeaderLayouts::new()?,
            source_name: source_name.to_string(),
        })
    }

    /// All C++ headers, four per namespace, followed by the Fortran module.
    pub fn generate(&self, params: &[Parameter], template: &str) -> Result<Vec<GeneratedFile>> {
        let mut files = self.generate_namespace_files(params)?;
        files.push(self.generate_fortran_module(params, template));
        Ok(files)
    }

    pub fn generate_namespace_files(&self, params: &[Parameter]) -> Result<Vec<GeneratedFile>> {
        let banner = cpp_banner(&self.source_name);
        let mut files = Vec::new();

        for group in group_by_namespace(params) {
            let namespace = &group.namespace.name;
            for kind in HeaderKind::ALL {
                let body = self.namespace_body(kind, &group.params);
                files.push(GeneratedFile {
                    file_name: output_file_name(namespace, kind),
                    contents: self.layouts.render(kind, namespace, &banner, &body)?,
                });
            }
        }

        Ok(files)
    }

    pub fn generate_fortran_module(&self, params: &[Parameter], template: &str) -> GeneratedFile {
        let banner = fortran_banner(&self.source_name);
        GeneratedFile {
            file_name: FORTRAN_MODULE_FILE.to_string(),
            contents: template::expand_template(template, params, &banner),
        }
    }

    fn namespace_body(&self, kind: HeaderKind, params: &[&Parameter]) -> String {
        let mut body = String::new();

        for group in group_by_guard(params.iter().copied()) {
            let fragment: String = group
                .params
                .iter()
                .map(|p| match kind {
                    HeaderKind::Declares => cpp::definition(p),
                    HeaderKind::Params => cpp::extern_declaration(p),
                    HeaderKind::Queries => {
                        format!("{}{}\n", cpp::default_assignment(p), cpp::query(p))
                    }
                    HeaderKind::JobInfoTests => cpp::job_info_test(p),
                })
                .collect();

            write_guarded(&mut body, group.guard, &fragment);

            if kind == HeaderKind::Queries {
                body.push('\n');
            }
        }

        body
    }
}
