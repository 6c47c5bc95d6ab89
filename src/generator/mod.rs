pub mod codegen;
pub mod errors;
pub mod parser;

pub use codegen::{FORTRAN_MODULE_FILE, GeneratedFile, ParamCodeGenerator};
pub use errors::{ConfigError, ParseError};
pub use parser::parse_source;

use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

/// Convenience function: parse a parameter file and render every output file in memory.
pub fn generate(source: &str, template: &str, source_name: &str) -> Result<Vec<GeneratedFile>> {
    let params = parse_source(source)?;
    let generator = ParamCodeGenerator::new(source_name)?;
    generator.generate(&params, template)
}

/// Writes each file into `output_dir`, replacing any previous version.
pub fn write_files(output_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = output_dir.join(&file.file_name);
        fs::write(&path, &file.contents)
            .map_err(|e| anyhow!("Unable to open {} for writing: {}", path.display(), e))?;
        written.push(path);
    }

    Ok(written)
}
