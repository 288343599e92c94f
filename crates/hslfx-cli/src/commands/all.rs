//! All command: every transform on one input

use crate::AllArgs;
use anyhow::{Context, Result};
use hslfx_ops::parallel;
use tracing::info;

pub fn run(args: AllArgs) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let stencil = super::load_image(&args.stencil)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create: {}", args.out_dir.display()))?;
    let out = |name: &str| args.out_dir.join(name);

    let mut gray = image.clone();
    parallel::grayscale(&mut gray);
    super::save_image(&out("out-grayscale.png"), &gray)?;

    let mut lit = image.clone();
    parallel::spotlight(&mut lit, args.center_x, args.center_y);
    super::save_image(&out("out-spotlight.png"), &lit)?;

    let mut illini = image.clone();
    parallel::illinify(&mut illini);
    super::save_image(&out("out-illinify.png"), &illini)?;

    let mut marked = image;
    parallel::watermark(&mut marked, &stencil).with_context(|| {
        format!(
            "Cannot watermark {} with {}",
            args.input.display(),
            args.stencil.display()
        )
    })?;
    super::save_image(&out("out-watermark.png"), &marked)?;

    info!(out_dir = %args.out_dir.display(), "Wrote 4 images");
    Ok(())
}
