//! Axis labels, ranges, titles and reference lines of the benchmark scenarios.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Corner of the plot the legend is placed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LegendPosition {
    /// Lower right corner.
    LowerRight,
    /// Upper right corner.
    UpperRight,
}

/// Horizontal dashed black line marking a threshold, for example the number of signal events
/// needed for a discovery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceLine {
    /// Position on the y axis.
    pub y: f64,
    /// Line width in points.
    pub width: f64,
}

/// Everything that is drawn around the curves of a scenario. Labels and the title are
/// LaTeX-flavoured and converted with [`crate::label::to_plain`] when drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    /// Label of the x axis.
    pub x_label: &'static str,
    /// Label of the y axis.
    pub y_label: &'static str,
    /// Title above the plot.
    pub title: &'static str,
    /// Lower and upper bound of the x axis.
    pub x_range: (f64, f64),
    /// Lower and upper bound of the y axis.
    pub y_range: (f64, f64),
    /// Optional horizontal threshold line.
    pub reference: Option<ReferenceLine>,
    /// Position of the legend.
    pub legend: LegendPosition,
}

/// Benchmark scenario, selecting the decoration of a plot.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Scenario {
    /// Light neutral fermion produced in B-meson decays.
    One,
    /// NMSSM with `M_A = 410 GeV` and `M_{A_S} = 70 GeV`.
    TwoA,
    /// NMSSM with `M_A = 500 GeV` and `M_{A_S} = 200 GeV`.
    TwoB,
    /// Pair-produced sleptons decaying into a light neutralino.
    Three,
}

/// Error returned when parsing an unknown scenario name.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown scenario `{0}`, expected one of: one, twoA, twoB, three")]
pub struct UnknownScenario(pub String);

const NMSSM_X_LABEL: &str = r"c$\tau_{A_S}$ [m]";
const NMSSM_Y_LABEL: &str = r"$\sigma (pp\rightarrow A\rightarrow A_S\,h_{\mathrm{SM}})$ [fb]";

impl Scenario {
    /// All scenarios in order.
    pub const ALL: [Self; 4] = [Self::One, Self::TwoA, Self::TwoB, Self::Three];

    /// Name used to select this scenario.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::TwoA => "twoA",
            Self::TwoB => "twoB",
            Self::Three => "three",
        }
    }

    /// Returns the decoration of this scenario.
    #[must_use]
    pub const fn decoration(self) -> Decoration {
        match self {
            Self::One => Decoration {
                x_label: r"c$\tau_{N}$ [m]",
                y_label: r"Br$(B^+/B^0 \to e^+/\bar{\nu}_e   N)$",
                title: r"$m_N=1$~GeV",
                x_range: (1e-2, 1e7),
                y_range: (1e-13, 1e-5),
                reference: None,
                legend: LegendPosition::LowerRight,
            },
            Self::TwoA => Decoration {
                x_label: NMSSM_X_LABEL,
                y_label: NMSSM_Y_LABEL,
                title: r"$M_{A}=410$~GeV,\,\,$M_{A_S}=70$~GeV",
                x_range: (1e-2, 1e7),
                y_range: (1e-1, 1e7),
                reference: Some(ReferenceLine {
                    y: 4.08 / 0.06,
                    width: 1.75,
                }),
                legend: LegendPosition::LowerRight,
            },
            Self::TwoB => Decoration {
                x_label: NMSSM_X_LABEL,
                y_label: NMSSM_Y_LABEL,
                title: r"$M_{A}=500$~GeV,\,\,$M_{A_S}=200$~GeV",
                x_range: (1e-2, 1e7),
                y_range: (1e-1, 1e7),
                reference: Some(ReferenceLine {
                    y: 1.26 / 0.06 / 0.66,
                    width: 1.75,
                }),
                legend: LegendPosition::LowerRight,
            },
            Self::Three => Decoration {
                x_label: r"c$\tau_{\tilde{\chi}^0_1}$ [m]",
                y_label: "Signal Events",
                title: r"$m_{\tilde{e}_R}=500$~GeV,\,\,$m_{\tilde{\chi}^0_1}=1$~GeV",
                x_range: (1e-4, 1e4),
                y_range: (1e-4, 1e4),
                reference: Some(ReferenceLine { y: 3.0, width: 2.25 }),
                legend: LegendPosition::UpperRight,
            },
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| UnknownScenario(s.to_owned()))
    }
}

/// Returns the decoration selected by `selector`, or `None` if it doesn't name a scenario.
#[must_use]
pub fn decoration(selector: &str) -> Option<Decoration> {
    selector.parse().ok().map(Scenario::decoration)
}
