//! Spotlight command

use crate::SpotlightArgs;
use anyhow::Result;
use hslfx_ops::parallel;
use tracing::warn;

pub fn run(args: SpotlightArgs) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    let inside = u32::try_from(args.center_x).is_ok_and(|x| x < image.width())
        && u32::try_from(args.center_y).is_ok_and(|y| y < image.height());
    if !inside {
        warn!(
            center_x = args.center_x,
            center_y = args.center_y,
            "Spotlight center lies outside the image"
        );
    }

    parallel::spotlight(&mut image, args.center_x, args.center_y);
    super::save_image(&args.output, &image)
}
