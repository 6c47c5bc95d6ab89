use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paramgen",
    about = "Generate C++ headers and the Fortran meth_params module from a runtime parameter list",
    version
)]
pub struct Cli {
    /// Template for the meth_params module
    #[arg(short = 'm', value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output directory for the generated files
    #[arg(short = 'o', value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Input file containing the list of parameters to define
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
