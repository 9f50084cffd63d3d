//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types shared by the framebuffer, the
//! surface backends and the game loop. Apart from `serde` derives and the
//! `bitflags` masks there is no behavior here beyond validation.
//!
//! # Screen Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SCREEN_WIDTH` | 160 | Console columns |
//! | `DEFAULT_SCREEN_HEIGHT` | 50 | Console rows |
//! | `DEFAULT_FONT_WIDTH` | 6 | Font cell width hint (pixels) |
//! | `DEFAULT_FONT_HEIGHT` | 12 | Font cell height hint (pixels) |
//! | `DEFAULT_FRAME_MS` | 16 | Target frame interval (~60 FPS) |
//!
//! # Cell Attributes
//!
//! A cell attribute packs two [`ConsoleColor`]s into a 16-bit field:
//! foreground in bits 0-3, background in bits 4-7.
//!
//! # Examples
//!
//! ```
//! use console_game_types::{CellAttribute, ConsoleColor, ScreenDimensions, WindowRegion};
//!
//! let dims = ScreenDimensions::new(160, 50).unwrap();
//! assert_eq!(dims.area(), 8000);
//!
//! let region = WindowRegion::from_dimensions(dims);
//! assert_eq!((region.right, region.bottom), (159, 49));
//!
//! let attr = CellAttribute::new(ConsoleColor::Yellow, ConsoleColor::DarkBlue);
//! assert_eq!(attr.bits(), 0x1E);
//! assert_eq!(attr.foreground(), ConsoleColor::Yellow);
//!
//! assert!(ScreenDimensions::new(-1, 50).is_err());
//! ```

pub mod config;

pub use config::{ConfigError, ConsoleProperties};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Default screen width in columns (160)
pub const DEFAULT_SCREEN_WIDTH: u16 = 160;

/// Default screen height in rows (50)
pub const DEFAULT_SCREEN_HEIGHT: u16 = 50;

/// Default font cell width hint in pixels (6)
pub const DEFAULT_FONT_WIDTH: i16 = 6;

/// Default font cell height hint in pixels (12)
pub const DEFAULT_FONT_HEIGHT: i16 = 12;

/// Default target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Largest accepted screen dimension.
///
/// Window rectangles and draw coordinates are signed 16-bit values.
pub const MAX_DIMENSION: u16 = i16::MAX as u16;

/// Size of the character grid in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct ScreenDimensions {
    width: u16,
    height: u16,
}

#[derive(Deserialize)]
struct RawDimensions {
    width: i32,
    height: i32,
}

impl TryFrom<RawDimensions> for ScreenDimensions {
    type Error = ConfigError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl ScreenDimensions {
    /// Validate and build screen dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_game_types::{ConfigError, ScreenDimensions};
    ///
    /// assert!(ScreenDimensions::new(0, 0).is_ok());
    /// assert!(matches!(
    ///     ScreenDimensions::new(80, -3),
    ///     Err(ConfigError::NegativeDimension { axis: "height", value: -3 })
    /// ));
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        Ok(Self {
            width: check_axis("width", width)?,
            height: check_axis("height", height)?,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for ScreenDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

fn check_axis(axis: &'static str, value: i32) -> Result<u16, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeDimension { axis, value });
    }
    if value > MAX_DIMENSION as i32 {
        return Err(ConfigError::DimensionTooLarge { axis, value });
    }
    Ok(value as u16)
}

/// Visible window rectangle within the surface buffer.
///
/// Corners are inclusive, matching console window semantics. A grid with a
/// zero dimension maps to an empty region (`right < left` or `bottom < top`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowRegion {
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
}

impl WindowRegion {
    pub const fn new(left: i16, top: i16, right: i16, bottom: i16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Region covering the whole grid, anchored at (0, 0).
    pub fn from_dimensions(dims: ScreenDimensions) -> Self {
        // Both fit in i16 (validated by ScreenDimensions::new).
        Self::new(0, 0, dims.width as i16 - 1, dims.height as i16 - 1)
    }

    /// Number of columns. A full i16 span is 65536, so this is wider than u16.
    pub fn width(&self) -> u32 {
        (self.right as i32 - self.left as i32 + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom as i32 - self.top as i32 + 1).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Intersect with the grid described by `dims`.
    pub fn clip_to(&self, dims: ScreenDimensions) -> Self {
        let bounds = Self::from_dimensions(dims);
        Self::new(
            self.left.max(bounds.left),
            self.top.max(bounds.top),
            self.right.min(bounds.right),
            self.bottom.min(bounds.bottom),
        )
    }

    pub fn contains(&self, x: i16, y: i16) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// The 16 console colors, in console palette order.
///
/// The discriminant is the 4-bit palette index stored in a [`CellAttribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum ConsoleColor {
    #[default]
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkCyan = 3,
    DarkRed = 4,
    DarkMagenta = 5,
    DarkYellow = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Cyan = 11,
    Red = 12,
    Magenta = 13,
    Yellow = 14,
    White = 15,
}

impl ConsoleColor {
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// Color for a palette index; only the low nibble is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_game_types::ConsoleColor;
    ///
    /// assert_eq!(ConsoleColor::from_index(12), ConsoleColor::Red);
    /// assert_eq!(ConsoleColor::from_index(0x1F), ConsoleColor::White);
    /// ```
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index & 0x0F) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Foreground/background pair packed into a 16-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellAttribute(u16);

impl CellAttribute {
    pub const fn new(fg: ConsoleColor, bg: ConsoleColor) -> Self {
        Self((fg as u16) | ((bg as u16) << 4))
    }

    /// Foreground only, on a black background.
    pub const fn fg(fg: ConsoleColor) -> Self {
        Self::new(fg, ConsoleColor::Black)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn foreground(self) -> ConsoleColor {
        ConsoleColor::from_index((self.0 & 0x0F) as u8)
    }

    pub fn background(self) -> ConsoleColor {
        ConsoleColor::from_index(((self.0 >> 4) & 0x0F) as u8)
    }
}

impl Default for CellAttribute {
    fn default() -> Self {
        Self::new(ConsoleColor::Gray, ConsoleColor::Black)
    }
}

impl From<ConsoleColor> for CellAttribute {
    fn from(color: ConsoleColor) -> Self {
        Self::fg(color)
    }
}

bitflags! {
    /// Access rights requested for a surface buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessRights: u32 {
        const READ = 0x8000_0000;
        const WRITE = 0x4000_0000;
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

bitflags! {
    /// Share mode for a surface buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShareMode: u32 {
        const READ = 0x0000_0001;
        const WRITE = 0x0000_0002;
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}
