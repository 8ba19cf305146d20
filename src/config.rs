//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_AXIS};

/// Native panel dimensions (rotation 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either axis is 0 or
    /// larger than [`MAX_AXIS`].
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_AXIS || height == 0 || height > MAX_AXIS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Same dimensions with the axes exchanged
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation (portrait)
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise (landscape)
    Rotate90,
    /// Rotate 180 degrees (portrait)
    Rotate180,
    /// Rotate 270 degrees clockwise (landscape)
    Rotate270,
}

impl Rotation {
    /// Rotation from a raw index, taken modulo 4
    ///
    /// ```
    /// use st7735_tiles::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(1), Rotation::Rotate90);
    /// assert_eq!(Rotation::from_index(6), Rotation::Rotate180);
    /// ```
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::Rotate0,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            _ => Self::Rotate270,
        }
    }

    /// Raw index 0-3
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether width and height are exchanged relative to the native panel
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Panel variant, selecting the window part of the init sequence
///
/// ST7735R modules ship with different glass cut-outs, identified by the
/// color of the protective film tab.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PanelVariant {
    /// 1.8" 128x160, green tab (window shifted by 2 columns, 1 row)
    Green18,
    /// 1.8" 128x160, red tab
    Red18,
    /// 1.44" 128x128, green tab
    #[default]
    Green144,
    /// 0.96" 80x160 mini panel
    Mini160x80,
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Native panel dimensions
    pub dimensions: Dimensions,
    /// Rotation applied after init
    pub rotation: Rotation,
    /// Controller start offset added to row (RASET) addresses
    pub col_start: u8,
    /// Controller start offset added to column (CASET) addresses
    pub row_start: u8,
    /// Panel uses BGR subpixel order
    pub bgr: bool,
    /// Init table variant
    pub variant: PanelVariant,
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        if self.rotation.is_landscape() {
            self.dimensions.swapped()
        } else {
            self.dimensions
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7735_tiles::{Builder, Dimensions, PanelVariant, Rotation};
///
/// let dims = match Dimensions::new(128, 128) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .variant(PanelVariant::Green144)
///     .rotation(Rotation::Rotate90)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Native panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Rotation applied after init
    rotation: Rotation,
    col_start: u8,
    row_start: u8,
    /// Panel uses BGR subpixel order
    bgr: bool,
    /// Init table variant
    variant: PanelVariant,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            // 1.44" green tab glass starts two rows into controller RAM
            col_start: 2,
            row_start: 0,
            bgr: true,
            variant: PanelVariant::Green144,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set native panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the start offset added to row addresses
    pub fn col_start(mut self, value: u8) -> Self {
        self.col_start = value;
        self
    }

    /// Set the start offset added to column addresses
    pub fn row_start(mut self, value: u8) -> Self {
        self.row_start = value;
        self
    }

    /// Set BGR (true) or RGB (false) subpixel order
    pub fn bgr(mut self, value: bool) -> Self {
        self.bgr = value;
        self
    }

    /// Set the panel variant
    pub fn variant(mut self, variant: PanelVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            col_start: self.col_start,
            row_start: self.row_start,
            bgr: self.bgr,
            variant: self.variant,
        })
    }
}
