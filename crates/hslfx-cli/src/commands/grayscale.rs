//! Grayscale command

use crate::GrayscaleArgs;
use anyhow::Result;
use hslfx_ops::parallel;

pub fn run(args: GrayscaleArgs) -> Result<()> {
    let mut image = super::load_image(&args.input)?;
    parallel::grayscale(&mut image);
    super::save_image(&args.output, &image)
}
