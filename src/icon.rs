use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::checksum::compute_checksum;
use crate::color::complementary;
use crate::errors::{IconError, OptionError};
use crate::grid::Grid;
use crate::models::{
    ChecksumKind,
    IconSummary,
    ImageFormat,
    Rgb,
    DEFAULT_PIXELS,
    DEFAULT_SIZE,
    MAX_PIXELS,
    MAX_SIZE,
    MIN_PIXELS,
    MIN_SIZE,
};
use crate::render::{draw_pattern, Encoder, ImageCodec};
use crate::utils::write_file;

/// A single configuration step. Options are applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconOption {
    /// Side of the icon in pixels, `MIN_PIXELS..=MAX_PIXELS`.
    Pixels(u32),
    /// Number of blocks per row and column, `MIN_SIZE..=MAX_SIZE`.
    Size(u32),
    Foreground(Option<Rgb>),
    Background(Option<Rgb>),
    /// Background becomes the complement of the foreground set so far.
    ComplementaryBackground,
}

/// Settings accumulated while options are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSettings {
    pub size: u32,
    pub pixels: u32,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl IconSettings {
    /// Defaults for a checksum: its first three bytes become the foreground.
    pub fn new(checksum: &[u8]) -> Self {
        Self {
            size: DEFAULT_SIZE,
            pixels: DEFAULT_PIXELS,
            foreground: Rgb::from_checksum(checksum),
            background: Rgb::WHITE,
        }
    }

    pub fn apply(self, option: IconOption) -> Result<Self, OptionError> {
        let settings = match option {
            IconOption::Pixels(pixels) => {
                if pixels < MIN_PIXELS {
                    return Err(OptionError::PixelsTooSmall(pixels));
                };
                if pixels > MAX_PIXELS {
                    return Err(OptionError::PixelsTooLarge(pixels));
                };
                Self { pixels, ..self }
            },
            IconOption::Size(size) => {
                if size < MIN_SIZE {
                    return Err(OptionError::SizeTooSmall(size));
                };
                if size > MAX_SIZE {
                    return Err(OptionError::SizeTooLarge(size));
                };
                Self { size, ..self }
            },
            IconOption::Foreground(color) => {
                let foreground = color.ok_or(OptionError::MissingForeground)?;
                Self { foreground, ..self }
            },
            IconOption::Background(color) => {
                let background = color.ok_or(OptionError::MissingBackground)?;
                Self { background, ..self }
            },
            IconOption::ComplementaryBackground => {
                Self { background: complementary(self.foreground), ..self }
            },
        };
        Ok(settings)
    }

    /// Checks rules that span more than one option.
    pub fn validate(&self) -> Result<(), OptionError> {
        if self.pixels <= self.size {
            return Err(OptionError::PixelsNotLargerThanSize {
                pixels: self.pixels,
                size: self.size,
            });
        };
        Ok(())
    }
}

/// Collects options for an icon. Nothing is derived until `build`.
#[derive(Debug, Clone)]
pub struct IconBuilder {
    name: String,
    checksum: ChecksumKind,
    options: Vec<IconOption>,
}

impl IconBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checksum: ChecksumKind::default(),
            options: Vec::new(),
        }
    }

    pub fn checksum(mut self, kind: ChecksumKind) -> Self {
        self.checksum = kind;
        self
    }

    pub fn option(mut self, option: IconOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = IconOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn pixels(self, pixels: u32) -> Self {
        self.option(IconOption::Pixels(pixels))
    }

    pub fn size(self, size: u32) -> Self {
        self.option(IconOption::Size(size))
    }

    pub fn foreground(self, color: impl Into<Option<Rgb>>) -> Self {
        self.option(IconOption::Foreground(color.into()))
    }

    pub fn background(self, color: impl Into<Option<Rgb>>) -> Self {
        self.option(IconOption::Background(color.into()))
    }

    pub fn complementary_background(self) -> Self {
        self.option(IconOption::ComplementaryBackground)
    }

    /// Validates every option, then derives checksum, grid and image.
    ///
    /// An empty name fails before any option is looked at. Invalid options
    /// are all reported together.
    pub fn build(self) -> Result<Icon, IconError> {
        if self.name.is_empty() {
            return Err(IconError::InvalidInput(self.name));
        };
        let checksum = compute_checksum(&[self.name.as_str()], self.checksum);
        log::debug!("checksum for {:?}: {}", self.name, hex::encode(&checksum));

        let mut settings = IconSettings::new(&checksum);
        let mut errors = Vec::new();
        for option in self.options {
            match settings.apply(option) {
                Ok(updated) => settings = updated,
                Err(error) => errors.push(error),
            };
        };
        if errors.is_empty() {
            if let Err(error) = settings.validate() {
                errors.push(error);
            };
        };
        if !errors.is_empty() {
            return Err(IconError::InvalidOptions(errors));
        };

        if settings.pixels % settings.size != 0 {
            log::warn!(
                "{} pixels is not a multiple of {} blocks, icon will have a border",
                settings.pixels,
                settings.size,
            );
        };
        let grid = Grid::from_checksum(&checksum, settings.size as usize);
        let image = draw_pattern(&grid, settings.pixels, settings.foreground, settings.background);
        log::info!(
            "built {}x{} icon for {:?} ({}x{} blocks)",
            settings.pixels,
            settings.pixels,
            self.name,
            settings.size,
            settings.size,
        );
        Ok(Icon {
            name: self.name,
            checksum,
            settings,
            grid,
            image,
        })
    }
}

/// A finished mirrored block icon. Immutable once built.
#[derive(Debug, Clone)]
pub struct Icon {
    name: String,
    checksum: Vec<u8>,
    settings: IconSettings,
    grid: Grid,
    image: RgbaImage,
}

impl Icon {
    pub fn builder(name: impl Into<String>) -> IconBuilder {
        IconBuilder::new(name)
    }

    /// Builds an icon with default settings.
    pub fn new(name: impl Into<String>) -> Result<Self, IconError> {
        IconBuilder::new(name).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u32 {
        self.settings.size
    }

    pub fn pixels(&self) -> u32 {
        self.settings.pixels
    }

    pub fn checksum(&self) -> &[u8] {
        &self.checksum
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn foreground(&self) -> Rgb {
        self.settings.foreground
    }

    pub fn background(&self) -> Rgb {
        self.settings.background
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Textual form of the block pattern.
    pub fn pattern(&self) -> String {
        self.grid.pattern()
    }

    /// `name.png` or `name.jpeg`.
    pub fn file_name(&self, format: ImageFormat) -> String {
        format!("{}.{}", self.name, format.extension())
    }

    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, IconError> {
        self.encode_with(&ImageCodec::default(), format)
    }

    pub fn encode_with(
        &self,
        encoder: &dyn Encoder,
        format: ImageFormat,
    ) -> Result<Vec<u8>, IconError> {
        encoder.encode(&self.image, format)
    }

    /// Writes the icon into `directory` and returns the file path.
    pub fn save_to(&self, directory: &Path, format: ImageFormat) -> Result<PathBuf, IconError> {
        self.save_to_with(&ImageCodec::default(), directory, format)
    }

    pub fn save_to_with(
        &self,
        encoder: &dyn Encoder,
        directory: &Path,
        format: ImageFormat,
    ) -> Result<PathBuf, IconError> {
        let bytes = self.encode_with(encoder, format)?;
        let path = directory.join(self.file_name(format));
        write_file(&bytes, &path)?;
        log::info!("saved {}", path.display());
        Ok(path)
    }

    /// Saves `name.png` in the current directory.
    pub fn save_png(&self) -> Result<PathBuf, IconError> {
        self.save_to(Path::new("."), ImageFormat::Png)
    }

    /// Saves `name.jpeg` in the current directory.
    pub fn save_jpeg(&self) -> Result<PathBuf, IconError> {
        self.save_to(Path::new("."), ImageFormat::Jpeg)
    }

    pub fn summary(&self) -> IconSummary {
        IconSummary {
            name: self.name.clone(),
            pixels: self.pixels(),
            size: self.size(),
            checksum: hex::encode(&self.checksum),
            foreground: self.foreground(),
            background: self.background(),
            pattern: self.grid.pattern_rows(),
            file: None,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Icon:")?;
        writeln!(formatter, "file name: {}", self.name)?;
        writeln!(formatter, "size in pixels {} x {}", self.pixels(), self.pixels())?;
        writeln!(formatter, "size in blocks {} x {}", self.size(), self.size())?;
        writeln!(formatter, "foreground {}", self.foreground())?;
        writeln!(formatter, "background {}", self.background())?;
        writeln!(formatter, "{}", self.pattern())
    }
}
