use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;
use crate::icon::IconOption;

pub const DEFAULT_PIXELS: u32 = 250;
/// Smallest icon side in pixels.
pub const MIN_PIXELS: u32 = 100;
/// Largest icon side in pixels.
pub const MAX_PIXELS: u32 = 500;

pub const DEFAULT_SIZE: u32 = 5;
/// Smallest n of an n x n block pattern.
pub const MIN_SIZE: u32 = 5;
/// Largest n of an n x n block pattern.
pub const MAX_SIZE: u32 = 20;

/// An opaque 8-bit RGB color.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Takes the first three checksum bytes as red, green and blue.
    pub fn from_checksum(checksum: &[u8]) -> Self {
        Self::new(checksum[0], checksum[1], checksum[2])
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value.trim().trim_start_matches('#');
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|digit| [digit, digit]).collect(),
            6 => digits.to_owned(),
            _ => return Err(ParseError(format!("invalid color {value:?}"))),
        };
        let bytes = hex::decode(expanded)
            .map_err(|_| ParseError(format!("invalid color {value:?}")))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Hue in degrees `[0, 360)`, saturation and luminance in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hash used to seed the pattern and the default foreground.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumKind {
    /// 16-byte MD5 digest.
    #[default]
    Md5,
    /// 32-byte SHA-256 digest.
    Sha256,
}

impl FromStr for ChecksumKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" => Ok(Self::Sha256),
            _ => Err(ParseError(format!("unknown checksum {value:?}"))),
        }
    }
}

/// Container format written by the codec.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(ParseError(format!("unknown image format {value:?}"))),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.extension())
    }
}

/// Icon settings loaded from a JSON file. Missing fields keep the defaults.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    pub size: Option<u32>,
    pub pixels: Option<u32>,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub complementary_background: bool,
    pub checksum: Option<ChecksumKind>,
    pub format: Option<ImageFormat>,
    pub jpeg_quality: Option<u8>,
}

impl IconConfig {
    /// Converts the settings into options, in the order they must be applied.
    /// The complementary background goes last so it sees the final foreground.
    pub fn options(&self) -> Vec<IconOption> {
        let mut options = Vec::new();
        if let Some(size) = self.size {
            options.push(IconOption::Size(size));
        };
        if let Some(pixels) = self.pixels {
            options.push(IconOption::Pixels(pixels));
        };
        if let Some(foreground) = self.foreground {
            options.push(IconOption::Foreground(Some(foreground)));
        };
        if let Some(background) = self.background {
            options.push(IconOption::Background(Some(background)));
        };
        if self.complementary_background {
            options.push(IconOption::ComplementaryBackground);
        };
        options
    }
}

/// Serializable description of a built icon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IconSummary {
    pub name: String,
    pub pixels: u32,
    pub size: u32,
    pub checksum: String,
    pub foreground: Rgb,
    pub background: Rgb,
    pub pattern: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}
