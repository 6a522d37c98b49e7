//! Deterministic mirrored block icons ("identicons").
//!
//! A name is hashed into a checksum, the checksum seeds a horizontally
//! mirrored n x n block pattern and a foreground color, and the pattern is
//! painted onto a square raster that can be written as PNG or JPEG.
//!
//! ```no_run
//! use identicon::{Icon, Rgb};
//!
//! let icon = Icon::builder("Custom")
//!     .foreground(Rgb::new(122, 16, 21))
//!     .complementary_background()
//!     .size(7)
//!     .pixels(300)
//!     .build()?;
//! println!("{}", icon.pattern());
//! icon.save_png()?;
//! # Ok::<(), identicon::IconError>(())
//! ```

pub mod checksum;
pub mod color;
pub mod errors;
pub mod grid;
pub mod icon;
pub mod logger;
pub mod models;
pub mod render;
pub mod utils;

pub use errors::{IconError, OptionError};
pub use grid::Grid;
pub use icon::{Icon, IconBuilder, IconOption, IconSettings};
pub use models::{ChecksumKind, Hsl, IconConfig, IconSummary, ImageFormat, Rgb};
pub use render::{Encoder, ImageCodec};
