//! Expansion of the `meth_params` module template.
//!
//! The template is copied line by line. Three marker lines are replaced with
//! blocks generated from the Fortran-bound parameters.

use crate::generator::codegen::fortran;
use crate::params::grouping::write_guarded;
use crate::params::{Parameter, group_by_guard, group_by_namespace};

pub const DECLARATIONS_MARKER: &str = "@@f90_declarations@@";
pub const SETUP_MARKER: &str = "@@set_castro_params@@";
pub const TEARDOWN_MARKER: &str = "@@free_castro_params@@";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    PassThrough,
    Declarations,
    Setup,
    Teardown,
}

impl Section {
    fn classify(line: &str) -> Self {
        if line.contains(DECLARATIONS_MARKER) {
            Section::Declarations
        } else if line.contains(SETUP_MARKER) {
            Section::Setup
        } else if line.contains(TEARDOWN_MARKER) {
            Section::Teardown
        } else {
            Section::PassThrough
        }
    }
}

pub struct TemplateExpander<'a> {
    params: Vec<&'a Parameter>,
    section: Section,
    out: String,
}

impl<'a> TemplateExpander<'a> {
    /// Starts the output with `banner`. Only parameters bound to Fortran are kept.
    pub fn new(params: &'a [Parameter], banner: &str) -> Self {
        Self {
            params: params.iter().filter(|p| p.in_fortran).collect(),
            section: Section::PassThrough,
            out: banner.to_string(),
        }
    }

    /// Consumes one template line, including its line terminator.
    pub fn feed(&mut self, line: &str) {
        self.section = Section::classify(line);

        match self.section {
            Section::PassThrough => self.out.push_str(line),
            Section::Declarations => self.write_declarations(),
            Section::Setup => self.write_setup(),
            Section::Teardown => self.write_teardown(),
        }

        // Every block is emitted in one step, right at its marker.
        self.section = Section::PassThrough;
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn device_params(&self) -> Vec<&'a Parameter> {
        self.params
            .iter()
            .copied()
            .filter(|p| p.param_type.is_device_resident())
            .collect()
    }

    fn write_declarations(&mut self) {
        for param in &self.params {
            self.out.push_str("  ");
            self.out.push_str(&fortran::declaration(param));
        }

        let device = self.device_params();
        if device.is_empty() {
            return;
        }

        self.out.push('\n');
        self.out.push_str("  !$acc declare &\n");
        let last = device.len() - 1;
        for (n, param) in device.iter().enumerate() {
            let separator = if n != last { " &\n" } else { "\n" };
            let entry = format!("  !$acc create({}){}", param.name, separator);
            write_guarded(&mut self.out, param.guard.as_deref(), &entry);
        }
    }

    fn write_setup(&mut self) {
        for namespace in group_by_namespace(self.params.iter().copied()) {
            let groups = group_by_guard(namespace.params.iter().copied());

            for group in &groups {
                let body: String = group.params.iter().map(|p| fortran::default_assignment(p)).collect();
                write_guarded(&mut self.out, group.guard, &body);
            }

            self.out.push('\n');
            self.out.push_str(&format!(
                "    call amrex_parmparse_build(pp, \"{}\")\n",
                namespace.namespace.name
            ));

            for group in &groups {
                let body: String = group.params.iter().map(|p| fortran::query(p)).collect();
                write_guarded(&mut self.out, group.guard, &body);
            }

            self.out.push_str("    call amrex_parmparse_destroy(pp)\n");
            self.out.push_str("\n\n");
        }

        self.out.push('\n');
        for param in self.device_params() {
            write_guarded(&mut self.out, param.guard.as_deref(), &fortran::device_update(param));
        }
    }

    fn write_teardown(&mut self) {
        for param in &self.params {
            self.out.push_str(&fortran::deallocation(param));
        }
        self.out.push_str("\n\n");
    }
}

/// Expands every marker in `template`, copying all other lines verbatim.
pub fn expand_template(template: &str, params: &[Parameter], banner: &str) -> String {
    let mut expander = TemplateExpander::new(params, banner);
    for line in template.split_inclusive('\n') {
        expander.feed(line);
    }
    expander.finish()
}
