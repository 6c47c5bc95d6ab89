use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

pub const GENERATOR_NAME: &str = "paramgen";

const DECLARES_H: &str = "{{ banner }}#ifndef _{{ guard }}_DECLARES_H_\n#define _{{ guard }}_DECLARES_H_\n{{ body }}#endif\n";

const PARAMS_H: &str = "{{ banner }}#ifndef _{{ guard }}_PARAMS_H_\n#define _{{ guard }}_PARAMS_H_\n\nnamespace {{ scope }} {\n{{ body }}}\n\n#endif\n";

const QUERIES_H: &str = "{{ banner }}{{ body }}";

const JOB_INFO_TESTS_H: &str = "{{ banner }}{{ body }}";

/// The four per-namespace headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Declares,
    Params,
    Queries,
    JobInfoTests,
}

impl HeaderKind {
    pub const ALL: [HeaderKind; 4] = [
        HeaderKind::Declares,
        HeaderKind::Params,
        HeaderKind::Queries,
        HeaderKind::JobInfoTests,
    ];

    fn template_name(&self) -> &'static str {
        match self {
            HeaderKind::Declares => "declares.H",
            HeaderKind::Params => "params.H",
            HeaderKind::Queries => "queries.H",
            HeaderKind::JobInfoTests => "job_info_tests.H",
        }
    }

    pub fn file_suffix(&self) -> &'static str {
        match self {
            HeaderKind::Declares => "_declares.H",
            HeaderKind::Params => "_params.H",
            HeaderKind::Queries => "_queries.H",
            HeaderKind::JobInfoTests => "_job_info_tests.H",
        }
    }
}

#[derive(Serialize)]
struct HeaderLayout<'a> {
    banner: &'a str,
    guard: String,
    scope: &'a str,
    body: &'a str,
}

/// Renders header skeletons around generated bodies.
pub struct HeaderLayouts {
    tera: Tera,
}

impl HeaderLayouts {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // Bodies are C++ source; nothing may be HTML-escaped.
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (HeaderKind::Declares.template_name(), DECLARES_H),
            (HeaderKind::Params.template_name(), PARAMS_H),
            (HeaderKind::Queries.template_name(), QUERIES_H),
            (HeaderKind::JobInfoTests.template_name(), JOB_INFO_TESTS_H),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, kind: HeaderKind, namespace: &str, banner: &str, body: &str) -> Result<String> {
        let layout = HeaderLayout {
            banner,
            guard: namespace.to_uppercase(),
            scope: namespace,
            body,
        };
        let context = Context::from_serialize(&layout)?;
        Ok(self.tera.render(kind.template_name(), &context)?)
    }
}

/// Warning placed at the top of every generated C++ header.
pub fn cpp_banner(source_name: &str) -> String {
    banner("//", source_name)
}

/// Warning placed at the top of the generated Fortran module.
pub fn fortran_banner(source_name: &str) -> String {
    banner("!", source_name)
}

fn banner(comment: &str, source_name: &str) -> String {
    format!(
        "\n{c} This file is automatically created by {tool} at build time.\n{c} To update or add runtime parameters, please edit {src} and rebuild.\n\n",
        c = comment,
        tool = GENERATOR_NAME,
        src = source_name,
    )
}
