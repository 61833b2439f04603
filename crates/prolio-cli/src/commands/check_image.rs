use prolio_config::ProlioConfig;
use prolio_core::media::{DimensionRule, validate_image_file};
use prolio_core::responses::ImageCheckResponse;

use crate::cli::{CheckImageArgs, GlobalFlags};
use crate::output::output;

fn rule_for(args: &CheckImageArgs, config: &ProlioConfig) -> DimensionRule {
    let width = args.width.unwrap_or(config.media.banner_width);
    let height = args.height.unwrap_or(config.media.banner_height);
    let exact = if args.exact {
        true
    } else if args.at_least {
        false
    } else {
        config.media.exact
    };
    if exact {
        DimensionRule::exact(width, height)
    } else {
        DimensionRule::at_least(width, height)
    }
}

fn check(args: &CheckImageArgs, config: &ProlioConfig) -> ImageCheckResponse {
    let rule = rule_for(args, config);
    let path = args.path.display().to_string();
    match validate_image_file(&args.path, &rule) {
        Ok((width, height)) => ImageCheckResponse {
            path,
            width,
            height,
            valid: true,
            message: None,
        },
        Err(error) => {
            let (width, height) = prolio_core::media::read_dimensions(&args.path).unwrap_or((0, 0));
            ImageCheckResponse {
                path,
                width,
                height,
                valid: false,
                message: Some(error.to_string()),
            }
        }
    }
}

/// Handle `prolio check-image`. Exits non-zero when the image does not fit.
pub fn handle(args: &CheckImageArgs, config: &ProlioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = check(args, config);
    output(&response, flags.format)?;
    if !response.valid {
        anyhow::bail!("{} does not meet the banner size requirement", response.path);
    }
    Ok(())
}
