use std::path::PathBuf;

use thiserror::Error;

use crate::models::{MAX_PIXELS, MAX_SIZE, MIN_PIXELS, MIN_SIZE};

/// A single rejected configuration option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("pixel length needs to be at least {min}, got {0}", min = MIN_PIXELS)]
    PixelsTooSmall(u32),

    #[error("pixel length needs to be at most {max}, got {0}", max = MAX_PIXELS)]
    PixelsTooLarge(u32),

    #[error("grid size can not be less than {min}, got {0}", min = MIN_SIZE)]
    SizeTooSmall(u32),

    #[error("grid size can not exceed max of {max}, got {0}", max = MAX_SIZE)]
    SizeTooLarge(u32),

    #[error("can not set foreground color to nil, please provide a valid color")]
    MissingForeground,

    #[error("can not set background to nil color, please provide a valid color")]
    MissingBackground,

    #[error("pixel length {pixels} must be greater than grid size {size}")]
    PixelsNotLargerThanSize { pixels: u32, size: u32 },
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid icon name entered: {0:?}")]
    InvalidInput(String),

    #[error("Config error: {}", format_option_errors(.0))]
    InvalidOptions(Vec<OptionError>),

    #[error("unable to access file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("issue encoding image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn format_option_errors(errors: &[OptionError]) -> String {
    let mut message = String::from("\nOption errors:");
    for error in errors {
        message.push('\n');
        message.push_str(&error.to_string());
    };
    message
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseError(pub String);
