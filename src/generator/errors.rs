use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("line {line}: namespace not set before parameter '{name}'")]
    NamespaceNotSet { line: usize, name: String },

    #[error("line {line}: invalid command '{command}'")]
    InvalidCommand { line: usize, command: String },

    #[error("line {line}: malformed command '{text}', expected '@namespace: <symbol> <ClassName>'")]
    MalformedCommand { line: usize, text: String },

    #[error("line {line}: invalid data type for parameter {name}: {dtype}")]
    InvalidDataType {
        line: usize,
        name: String,
        dtype: String,
    },

    #[error("line {line}: malformed {field} pair '{text}', expected '(a, b)'")]
    MalformedPair {
        line: usize,
        field: &'static str,
        text: String,
    },

    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error opening the input file '{}'", path.display())]
    MissingInput { path: PathBuf },

    #[error("invalid template file '{}'", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("output directory '{}' does not exist", path.display())]
    MissingOutputDir { path: PathBuf },
}
