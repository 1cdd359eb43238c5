//! Plot styles of the detectors taking part in the comparison.

use plotters::style::RGBColor;

/// Color, line style and legend label of a single detector, written the way matplotlib
/// understands them: a hex color like `#005AC8`, a line style like `--` and a LaTeX-flavoured
/// label. A default-constructed style has all fields empty, which draws an invisible line with
/// a blank legend entry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DetectorStyle {
    /// Hex color, `#RRGGBB`.
    pub color: &'static str,
    /// Matplotlib line style.
    pub linestyle: &'static str,
    /// Legend label.
    pub label: &'static str,
}

impl DetectorStyle {
    const fn new(color: &'static str, linestyle: &'static str, label: &'static str) -> Self {
        Self {
            color,
            linestyle,
            label,
        }
    }

    /// Returns the color of this style, or `None` if the line should be invisible.
    #[must_use]
    pub fn rgb(&self) -> Option<RGBColor> {
        parse_color(self.color)
    }

    /// Returns the dash pattern of this style.
    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        LineStyle::from_matplotlib(self.linestyle)
    }
}

const DETECTOR_STYLES: [(&str, DetectorStyle); 13] = [
    ("ANUBIS0", DetectorStyle::new("#005AC8", "--", r"ANUBIS0, 3 ab$^{-1}$")),
    ("ANUBIS1", DetectorStyle::new("#005AC8", "-", r"ANUBIS, 3 ab$^{-1}$")),
    ("AL3X", DetectorStyle::new("#00A0FA", "-", r"AL3X, 250 fb$^{-1}$")),
    ("CODEXB0", DetectorStyle::new("#AA0A3C", "--", r"CODEX-b0, 300 fb$^{-1}$")),
    ("CODEXB1", DetectorStyle::new("#AA0A3C", "-", r"CODEX-b, 300 fb$^{-1}$")),
    ("FACET", DetectorStyle::new("#000000", "-", r"FACET, 3 ab$^{-1}$")),
    ("FASER", DetectorStyle::new("#FA78FA", "-", r"FASER, 150 fb$^{-1}$")),
    ("FASER2", DetectorStyle::new("#ff0505", "-", r"FASER2, 3 ab$^{-1}$")),
    ("MAPP1", DetectorStyle::new("#0A9B4B", "-", r"MAPP1, 30 fb$^{-1}$")),
    ("MAPP2", DetectorStyle::new("#FF825F", "-", r"MAPP2, 300 fb$^{-1}$")),
    ("MATHUSLA0", DetectorStyle::new("#a39103", "--", r"MATHUSLA0, 3 ab$^{-1}$")),
    ("MATHUSLA1", DetectorStyle::new("#a39103", "-", r"MATHUSLA, 3 ab$^{-1}$")),
    ("MATHUSLA2", DetectorStyle::new("#a39103", "-.", r"MATHUSLA2, 3 ab$^{-1}$")),
];

/// Looks up the style of the detector called `name`. Unknown detectors get an empty style.
#[must_use]
pub fn detector_style(name: &str) -> DetectorStyle {
    DETECTOR_STYLES
        .iter()
        .find_map(|&(key, style)| (key == name).then_some(style))
        .unwrap_or_default()
}

/// Iterates over all known detectors and their styles.
pub fn detector_styles() -> impl Iterator<Item = (&'static str, DetectorStyle)> {
    DETECTOR_STYLES.iter().copied()
}

/// Parses a `#RRGGBB` hex color. Anything else, including the empty string, yields `None`.
#[must_use]
pub fn parse_color(color: &str) -> Option<RGBColor> {
    let hex = color.strip_prefix('#')?;

    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Dash pattern of a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineStyle {
    /// `-`
    Solid,
    /// `--`
    Dashed,
    /// `-.`
    DashDot,
    /// `:`
    Dotted,
    /// Empty or unknown style; nothing is drawn.
    Hidden,
}

impl LineStyle {
    /// Interprets the short matplotlib line-style names.
    #[must_use]
    pub fn from_matplotlib(linestyle: &str) -> Self {
        match linestyle {
            "-" | "solid" => Self::Solid,
            "--" | "dashed" => Self::Dashed,
            "-." | "dashdot" => Self::DashDot,
            ":" | "dotted" => Self::Dotted,
            _ => Self::Hidden,
        }
    }

    /// Length of the dashes and of the gaps between them in pixels, `None` for solid and
    /// hidden lines.
    #[must_use]
    pub const fn dash_pattern(self) -> Option<(u32, u32)> {
        match self {
            Self::Solid | Self::Hidden => None,
            Self::Dashed => Some((6, 4)),
            Self::DashDot => Some((9, 3)),
            Self::Dotted => Some((1, 3)),
        }
    }

    /// Horizontal pixel segments making up the legend sample of this style, relative to the
    /// left end of the sample.
    #[must_use]
    pub const fn legend_segments(self) -> [(i32, i32); 3] {
        match self {
            Self::Solid | Self::Hidden => [(0, 7), (7, 14), (14, 20)],
            Self::Dashed => [(0, 5), (8, 13), (16, 20)],
            Self::DashDot => [(0, 8), (11, 12), (15, 20)],
            Self::Dotted => [(0, 1), (9, 10), (18, 19)],
        }
    }
}
