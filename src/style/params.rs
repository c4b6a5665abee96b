use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::style::palette::ColorScheme;

/// Border width control range, in canvas pixels.
pub const BORDER_WIDTH_RANGE: (f64, f64) = (5.0, 100.0);
/// Element size control range; also the size oscillation range.
pub const ELEMENT_SIZE_RANGE: (f64, f64) = (10.0, 120.0);
/// Upper bound for element spacing. The spacing oscillation runs over `[10, 100]`.
pub const ELEMENT_SPACING_MAX: f64 = 100.0;
/// Layer count control range; also the layer oscillation range.
pub const BORDER_LAYERS_RANGE: (u32, u32) = (1, 10);

/// Named canvas aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    /// 1:1
    Square,
    /// 4:3
    Standard,
    /// 16:9
    #[default]
    Widescreen,
    /// 3:2
    Photo,
    /// 2:3
    Portrait,
    /// 9:16
    Mobile,
    /// 21:9
    Ultrawide,
}

impl AspectRatio {
    /// Every ratio, in control-panel order.
    pub const ALL: [AspectRatio; 7] = [
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::Widescreen,
        AspectRatio::Photo,
        AspectRatio::Portrait,
        AspectRatio::Mobile,
        AspectRatio::Ultrawide,
    ];

    /// `(width, height)` ratio terms.
    pub fn terms(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Standard => (4, 3),
            AspectRatio::Widescreen => (16, 9),
            AspectRatio::Photo => (3, 2),
            AspectRatio::Portrait => (2, 3),
            AspectRatio::Mobile => (9, 16),
            AspectRatio::Ultrawide => (21, 9),
        }
    }

    /// Display label, e.g. `16:9 (Widescreen)`.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1 (Square)",
            AspectRatio::Standard => "4:3 (Standard)",
            AspectRatio::Widescreen => "16:9 (Widescreen)",
            AspectRatio::Photo => "3:2 (Photo)",
            AspectRatio::Portrait => "2:3 (Portrait)",
            AspectRatio::Mobile => "9:16 (Mobile)",
            AspectRatio::Ultrawide => "21:9 (Ultrawide)",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = FiligreeError;

    /// Accepts the full label or the bare `W:H` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| {
                let label = r.label();
                label.eq_ignore_ascii_case(s) || label.split(' ').next() == Some(s)
            })
            .ok_or_else(|| FiligreeError::validation(format!("unknown aspect ratio \"{s}\"")))
    }
}

/// One of the interchangeable motif drawing routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MotifStyle {
    /// Stylized lily: base disc, center petal, side petals.
    #[default]
    FleurDeLis,
    /// Concentric rings.
    Circles,
    /// Five-petal flower.
    Flowers,
    /// Disc with a cut-out spiral.
    Spirals,
    /// Disc ringed with eight beads.
    Ornate,
    /// Leaf with a stem.
    Leaves,
    /// Nested diamonds.
    Diamonds,
    /// Lens-shaped scroll with an inner cut-out.
    Scrolls,
    /// Six-fold rosette.
    RepeatingShape,
    /// Eight-point star with beads.
    VintageBorder,
    /// Tinted raster scroll image.
    VintageScroll,
    /// Tinted raster "shape 13" image.
    Shape13,
}

impl MotifStyle {
    /// Every style, in control-panel order.
    pub const ALL: [MotifStyle; 12] = [
        MotifStyle::FleurDeLis,
        MotifStyle::Circles,
        MotifStyle::Flowers,
        MotifStyle::Spirals,
        MotifStyle::Ornate,
        MotifStyle::Leaves,
        MotifStyle::Diamonds,
        MotifStyle::Scrolls,
        MotifStyle::RepeatingShape,
        MotifStyle::VintageBorder,
        MotifStyle::VintageScroll,
        MotifStyle::Shape13,
    ];

    /// Display label, e.g. `Fleur de Lis`.
    pub fn label(self) -> &'static str {
        match self {
            MotifStyle::FleurDeLis => "Fleur de Lis",
            MotifStyle::Circles => "Circles",
            MotifStyle::Flowers => "Flowers",
            MotifStyle::Spirals => "Spirals",
            MotifStyle::Ornate => "Ornate",
            MotifStyle::Leaves => "Leaves",
            MotifStyle::Diamonds => "Diamonds",
            MotifStyle::Scrolls => "Scrolls",
            MotifStyle::RepeatingShape => "Repeating Shape",
            MotifStyle::VintageBorder => "Vintage Border",
            MotifStyle::VintageScroll => "Vintage Scroll",
            MotifStyle::Shape13 => "Shape 13",
        }
    }

    /// Whether the motif composites a raster asset instead of vector geometry.
    pub fn is_raster(self) -> bool {
        matches!(self, MotifStyle::VintageScroll | MotifStyle::Shape13)
    }
}

impl fmt::Display for MotifStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MotifStyle {
    type Err = FiligreeError;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn squash(s: &str) -> String {
            s.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect()
        }

        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|m| squash(m.label()) == wanted)
            .ok_or_else(|| FiligreeError::validation(format!("unknown motif style \"{s}\"")))
    }
}

macro_rules! serde_via_label {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse::<$ty>().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_label!(AspectRatio);
serde_via_label!(MotifStyle);

/// Which parameters are animated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationFlags {
    /// Scroll motifs along the edges with a subtle rotation shimmer.
    pub scroll: bool,
    /// Oscillate the element size.
    pub size: bool,
    /// Oscillate the element spacing.
    pub spacing: bool,
    /// Oscillate the layer count.
    pub layers: bool,
}

impl AnimationFlags {
    /// Whether any size/spacing/layer oscillation is enabled.
    pub fn oscillates(self) -> bool {
        self.size || self.spacing || self.layers
    }
}

/// Everything the control panel exposes for one border.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BorderStyleParams {
    /// Named canvas ratio.
    pub aspect_ratio: AspectRatio,
    /// Swap the ratio terms (landscape <-> portrait).
    pub flip_orientation: bool,
    /// Canvas (paper) color.
    pub canvas_color: Rgb8,
    /// Motif (ink) color.
    pub border_color: Rgb8,
    /// Inset of the outermost ring from the canvas edge.
    pub border_width: f64,
    /// Motif drawn at every placement.
    pub style: MotifStyle,
    /// Motif size.
    pub element_size: f64,
    /// Gap between consecutive motifs.
    pub element_spacing: f64,
    /// Number of concentric rings.
    pub border_layers: u32,
    /// Swap canvas and border colors.
    pub invert_colors: bool,
    /// Animation toggles.
    pub animation: AnimationFlags,
}

impl Default for BorderStyleParams {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::Widescreen,
            flip_orientation: true,
            canvas_color: Rgb8::new(0xF5, 0xF2, 0xE3),
            border_color: Rgb8::new(0x00, 0x00, 0x00),
            border_width: 30.0,
            style: MotifStyle::FleurDeLis,
            element_size: 20.0,
            element_spacing: 20.0,
            border_layers: 3,
            invert_colors: false,
            animation: AnimationFlags::default(),
        }
    }
}

impl BorderStyleParams {
    /// Parse parameters from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> FiligreeResult<Self> {
        let params: Self = serde_json::from_reader(r)
            .map_err(|e| FiligreeError::serde(format!("parse border params JSON: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Parse parameters from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FiligreeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FiligreeError::validation(format!("open border params '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON form, suitable for [`BorderStyleParams::from_reader`].
    pub fn to_json_pretty(&self) -> FiligreeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FiligreeError::serde(format!("serialize border params: {e}")))
    }

    /// Check every numeric control against its range.
    pub fn validate(&self) -> FiligreeResult<()> {
        fn in_range(name: &str, v: f64, lo: f64, hi: f64) -> FiligreeResult<()> {
            if !v.is_finite() || v < lo || v > hi {
                return Err(FiligreeError::validation(format!(
                    "{name} must be in [{lo}, {hi}], got {v}"
                )));
            }
            Ok(())
        }

        in_range(
            "border_width",
            self.border_width,
            BORDER_WIDTH_RANGE.0,
            BORDER_WIDTH_RANGE.1,
        )?;
        in_range(
            "element_size",
            self.element_size,
            ELEMENT_SIZE_RANGE.0,
            ELEMENT_SIZE_RANGE.1,
        )?;
        if !self.element_spacing.is_finite()
            || self.element_spacing <= 0.0
            || self.element_spacing > ELEMENT_SPACING_MAX
        {
            return Err(FiligreeError::validation(format!(
                "element_spacing must be in (0, {ELEMENT_SPACING_MAX}], got {}",
                self.element_spacing
            )));
        }
        let (lo, hi) = BORDER_LAYERS_RANGE;
        if !(lo..=hi).contains(&self.border_layers) {
            return Err(FiligreeError::validation(format!(
                "border_layers must be in [{lo}, {hi}], got {}",
                self.border_layers
            )));
        }
        Ok(())
    }

    /// Background/foreground after applying `invert_colors`.
    pub fn effective_colors(&self) -> ColorScheme {
        ColorScheme::resolve(self.canvas_color, self.border_color, self.invert_colors)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/params.rs"]
mod tests;
