use crate::generator::errors::ConfigError;
use std::path::{Path, PathBuf};

/// Everything one generator run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

impl GeneratorConfig {
    pub fn new(input: &Path, template: &Path, output_dir: &Path, verbose: bool) -> Self {
        Self {
            input: input.to_path_buf(),
            template: template.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            verbose,
        }
    }

    /// Checks that the input and template exist and that the output directory is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.is_file() {
            return Err(ConfigError::MissingInput {
                path: self.input.clone(),
            });
        }
        if !self.template.is_file() {
            return Err(ConfigError::MissingTemplate {
                path: self.template.clone(),
            });
        }
        if !self.output_dir.is_dir() {
            return Err(ConfigError::MissingOutputDir {
                path: self.output_dir.clone(),
            });
        }
        Ok(())
    }

    /// File name quoted in the generated-file banners.
    pub fn source_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}
