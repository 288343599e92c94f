//! Watermark command

use crate::WatermarkArgs;
use anyhow::{Context, Result};
use hslfx_ops::parallel;

pub fn run(args: WatermarkArgs) -> Result<()> {
    let mut base = super::load_image(&args.base)?;
    let stencil = super::load_image(&args.stencil)?;

    parallel::watermark(&mut base, &stencil).with_context(|| {
        format!(
            "Cannot watermark {} with {}",
            args.base.display(),
            args.stencil.display()
        )
    })?;

    super::save_image(&args.output, &base)
}
