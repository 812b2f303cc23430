//! Plot configuration for strip figures
//!
//! This module defines the configuration shared by the surface and
//! wireframe renderings.

use plotters::prelude::*;

/// Teal, the default surface colour
pub const TEAL: RGBColor = RGBColor(0, 128, 128);

/// Configuration for customizing strip figures
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `surface_color`, `alpha`: Fill (or wireframe line) colour and opacity
/// - `mesh_line_color`: Cell outline colour in surface mode
/// - `edge_color`, `edge_line_width`: Edge overlay style
/// - `wireframe`: Draw grid lines only instead of filled cells
/// - `elevation`, `azimuth`: Camera angles in degrees
/// - `background`: Background color
///
/// # Example
///
/// ```rust,ignore
/// use mobius_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::surface("Thin strip");
/// config.surface_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 1000)
    pub height: u32,

    /// Plot title (default: "Mobius Strip")
    pub title: String,

    /// Surface colour (default: teal)
    pub surface_color: RGBColor,

    /// Surface opacity in [0, 1] (default: 0.7)
    pub alpha: f64,

    /// Cell outline colour in surface mode (default: BLACK)
    pub mesh_line_color: RGBColor,

    /// Edge overlay colour (default: RED)
    pub edge_color: RGBColor,

    /// Edge overlay width in pixels (default: 2)
    pub edge_line_width: u32,

    /// Draw a wireframe instead of filled cells (default: false)
    pub wireframe: bool,

    /// Camera elevation in degrees (default: 30)
    pub elevation: f64,

    /// Camera azimuth in degrees (default: 45)
    pub azimuth: f64,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1000,
            title: "Mobius Strip".to_string(),
            surface_color: TEAL,
            alpha: 0.7,
            mesh_line_color: BLACK,
            edge_color: RED,
            edge_line_width: 2,
            wireframe: false,
            elevation: 30.0,
            azimuth: 45.0,
            background: WHITE,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Filled-surface config with optional custom title
    ///
    /// Title defaults to "Mobius Strip".
    pub fn surface(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Wireframe config with optional custom title
    ///
    /// Title defaults to "Mobius Strip (Wireframe)". Lines use the default
    /// surface colour at the same opacity as the filled surface.
    pub fn wireframe(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.wireframe = true;
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Mobius Strip (Wireframe)".to_string());
        config
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set camera angles (degrees)
    pub fn view(mut self, elevation: f64, azimuth: f64) -> Self {
        self.elevation = elevation;
        self.azimuth = azimuth;
        self
    }

    /// Builder pattern: set surface colour and opacity
    pub fn color(mut self, color: RGBColor, alpha: f64) -> Self {
        self.surface_color = color;
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
