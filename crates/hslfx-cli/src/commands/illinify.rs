//! Illinify command

use crate::IlliniArgs;
use anyhow::Result;
use hslfx_ops::parallel;

pub fn run(args: IlliniArgs) -> Result<()> {
    let mut image = super::load_image(&args.input)?;
    parallel::illinify(&mut image);
    super::save_image(&args.output, &image)
}
