use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use rewire_graph::{compare_null_model, NullModelCheck};

use crate::io::read_matrix;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Graph before rewiring
    #[arg(long)]
    pub original: PathBuf,
    /// Graph after rewiring
    #[arg(long)]
    pub rewired: PathBuf,
}

pub fn run(args: &VerifyArgs) -> Result<NullModelCheck, Box<dyn Error>> {
    let original = read_matrix(&args.original)?;
    let rewired = read_matrix(&args.rewired)?;
    Ok(compare_null_model(&original, &rewired))
}
