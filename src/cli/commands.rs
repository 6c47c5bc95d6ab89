use crate::cli::args::Cli;
use crate::config::GeneratorConfig;
use crate::generator::{ParamCodeGenerator, parser, write_files};
use crate::params::{ParamType, Parameter, group_by_namespace};
use anyhow::{Result, anyhow};
use clap::Parser;
use std::fs;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("paramgen v{}", env!("CARGO_PKG_VERSION"));
    }

    let config = GeneratorConfig::new(&cli.input, &cli.template, &cli.output_dir, cli.verbose);
    generate_command(&config)
}

/// Parses the parameter file and writes every generated file into the output directory.
pub fn generate_command(config: &GeneratorConfig) -> Result<()> {
    config.validate()?;
    let verbose = config.verbose;

    if verbose {
        println!("🔍 Parsing parameter file: {}", config.input.display());
    }

    let source = fs::read_to_string(&config.input)
        .map_err(|e| anyhow!("Failed to read input file: {}", e))?;
    let template = fs::read_to_string(&config.template)
        .map_err(|e| anyhow!("Failed to read template file: {}", e))?;

    let params = parser::parse_source(&source)?;

    if verbose {
        print_summary(&params);
    }
    warn_host_only_params(&params);

    let generator = ParamCodeGenerator::new(&config.source_name())?;
    let files = generator.generate(&params, &template)?;
    let written = write_files(&config.output_dir, &files)?;

    if verbose {
        for path in &written {
            println!("📁 Wrote {}", path.display());
        }
    }

    println!(
        "✅ Generated {} files for {} parameters in {}",
        written.len(),
        params.len(),
        config.output_dir.display()
    );

    Ok(())
}

fn print_summary(params: &[Parameter]) {
    for group in group_by_namespace(params) {
        println!(
            "📋 Namespace {} ({}): {} parameters",
            group.namespace.name,
            group.namespace.class_name,
            group.params.len()
        );
    }

    let fortran: Vec<&str> = group_by_namespace(params.iter().filter(|p| p.in_fortran))
        .into_iter()
        .map(|group| group.namespace.name.as_str())
        .collect();
    println!("🔧 Fortran namespaces: {}", fortran.join(", "));
}

fn warn_host_only_params(params: &[Parameter]) {
    for param in params
        .iter()
        .filter(|p| p.in_fortran && p.param_type == ParamType::String)
    {
        eprintln!(
            "warning: string parameter {} will not be available on the GPU",
            param.name
        );
    }
}
