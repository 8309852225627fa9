use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_SERIF_FONT: &str = "CMU Serif";
pub const AMSMATH_PREAMBLE: &str = r"\usepackage{amsmath}";

const BASE_FONT_SIZE: f64 = 12.0;
const BASE_AXIS_LABEL_SIZE: f64 = 12.0;
const BASE_TITLE_SIZE: f64 = 12.0;
const BASE_TICK_LABEL_SIZE: f64 = 11.0;
const BASE_LEGEND_SIZE: f64 = 11.0;

const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];
const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];
const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];
const DEEP: &[&str] = &[
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3", "#8c8c8c",
    "#ccb974", "#64b5cd",
];
const COLORBLIND: &[&str] = &[
    "#0173b2", "#de8f05", "#029e73", "#d55e00", "#cc78bc", "#ca9161", "#fbafe4", "#949494",
    "#ece133", "#56b4e9",
];

/// Named scale preset for font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotContext {
    #[default]
    Paper,
    Notebook,
    Talk,
    Poster,
}

impl PlotContext {
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::Paper => 0.8,
            Self::Notebook => 1.0,
            Self::Talk => 1.5,
            Self::Poster => 2.0,
        }
    }
}

impl fmt::Display for PlotContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Paper => "paper",
            Self::Notebook => "notebook",
            Self::Talk => "talk",
            Self::Poster => "poster",
        };
        f.write_str(name)
    }
}

impl FromStr for PlotContext {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "paper" => Ok(Self::Paper),
            "notebook" => Ok(Self::Notebook),
            "talk" => Ok(Self::Talk),
            "poster" => Ok(Self::Poster),
            other => Err(ChartError::InvalidArgument(format!(
                "unknown plot context `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    SansSerif,
}

/// User-facing theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_palette")]
    pub palette: String,
    #[serde(default)]
    pub context: PlotContext,
    #[serde(default = "default_font_scale")]
    pub font_scale: f64,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Serif face used when `tex` is on; `None` keeps the default face.
    #[serde(default)]
    pub font_family: Option<String>,
    /// Typeset text with math-quality rendering.
    #[serde(default = "default_tex")]
    pub tex: bool,
}

fn default_palette() -> String {
    "Set1".to_owned()
}

fn default_font_scale() -> f64 {
    2.0
}

fn default_line_width() -> f64 {
    2.0
}

fn default_tex() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            context: PlotContext::default(),
            font_scale: default_font_scale(),
            line_width: default_line_width(),
            font_family: None,
            tex: default_tex(),
        }
    }
}

/// Font sizes in points after context and font scale are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub base: f64,
    pub axis_label_size: f64,
    pub title_size: f64,
    pub tick_label_size: f64,
    pub legend_size: f64,
}

/// Resolved plotting defaults a backend applies process-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDefaults {
    pub style: String,
    pub palette_name: String,
    pub palette: Vec<Color>,
    pub context: PlotContext,
    pub fonts: FontSizes,
    pub line_width: f64,
    pub x_tick_direction: TickDirection,
    pub y_tick_direction: TickDirection,
    pub use_tex: bool,
    pub font_family: FontFamily,
    pub serif_fonts: Vec<String>,
    pub latex_preamble: Option<String>,
}

fn palette_hex(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "Set1" => Some(SET1),
        "Set2" => Some(SET2),
        "Dark2" => Some(DARK2),
        "deep" => Some(DEEP),
        "colorblind" => Some(COLORBLIND),
        _ => None,
    }
}

/// Colors of a named palette.
pub fn palette_colors(name: &str) -> ChartResult<Vec<Color>> {
    let hex = palette_hex(name)
        .ok_or_else(|| ChartError::InvalidArgument(format!("unknown palette `{name}`")))?;
    hex.iter().map(|value| Color::from_hex(value)).collect()
}

impl ThemeConfig {
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: PlotContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    #[must_use]
    pub fn with_tex(mut self, tex: bool) -> Self {
        self.tex = tex;
        self
    }

    fn validate(&self) -> ChartResult<()> {
        for (value, name) in [(self.font_scale, "font_scale"), (self.line_width, "line_width")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidArgument(format!(
                    "theme `{name}` must be finite and > 0"
                )));
            }
        }
        if matches!(&self.font_family, Some(family) if family.trim().is_empty()) {
            return Err(ChartError::InvalidArgument(
                "theme font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn resolve(&self) -> ChartResult<PlotDefaults> {
        self.validate()?;
        let palette = palette_colors(&self.palette)?;

        let scale = self.context.scale() * self.font_scale;
        let fonts = FontSizes {
            base: BASE_FONT_SIZE * scale,
            axis_label_size: BASE_AXIS_LABEL_SIZE * scale,
            title_size: BASE_TITLE_SIZE * scale,
            tick_label_size: BASE_TICK_LABEL_SIZE * scale,
            legend_size: BASE_LEGEND_SIZE * scale,
        };

        let (font_family, serif_fonts, latex_preamble) = if self.tex {
            let serif = self
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_SERIF_FONT.to_owned());
            (
                FontFamily::Serif,
                vec![serif],
                Some(AMSMATH_PREAMBLE.to_owned()),
            )
        } else {
            (FontFamily::SansSerif, Vec::new(), None)
        };

        Ok(PlotDefaults {
            style: "ticks".to_owned(),
            palette_name: self.palette.clone(),
            palette,
            context: self.context,
            fonts,
            line_width: self.line_width,
            x_tick_direction: TickDirection::In,
            y_tick_direction: TickDirection::In,
            use_tex: self.tex,
            font_family,
            serif_fonts,
            latex_preamble,
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize theme config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse theme config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

static CURRENT_DEFAULTS: RwLock<Option<PlotDefaults>> = RwLock::new(None);

/// Resolves `config` and installs it as the process-wide plotting defaults.
pub fn set_pretty_defaults(config: &ThemeConfig) -> ChartResult<PlotDefaults> {
    let defaults = config.resolve()?;
    let mut slot = CURRENT_DEFAULTS
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = Some(defaults.clone());
    debug!(
        palette = %defaults.palette_name,
        context = %defaults.context,
        font_scale = config.font_scale,
        line_width = defaults.line_width,
        use_tex = defaults.use_tex,
        "applied plot defaults"
    );
    Ok(defaults)
}

/// Process-wide plotting defaults, or the stock theme when none were set.
pub fn current_defaults() -> ChartResult<PlotDefaults> {
    let installed = CURRENT_DEFAULTS
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone();
    match installed {
        Some(defaults) => Ok(defaults),
        None => ThemeConfig::default().resolve(),
    }
}
