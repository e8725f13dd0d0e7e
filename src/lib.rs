use clap::ValueEnum;

pub mod error;
pub mod fixture;
pub mod harness;
pub mod report;
pub mod schema;
pub mod strategy;
pub mod suite;

/// Variant kind within the closed polymorphic set under benchmark.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum Kind {
    /// Circle variant (the default target for checks).
    #[default]
    Circle,
    /// Square variant.
    Square,
    /// Triangle variant.
    Triangle,
    /// Hexagon variant.
    Hexagon,
}

impl Kind {
    /// Every declared kind, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Circle, Kind::Square, Kind::Triangle, Kind::Hexagon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Circle => "circle",
            Kind::Square => "square",
            Kind::Triangle => "triangle",
            Kind::Hexagon => "hexagon",
        }
    }

    /// Stable index into per-kind count tables.
    pub fn index(&self) -> usize {
        match self {
            Kind::Circle => 0,
            Kind::Square => 1,
            Kind::Triangle => 2,
            Kind::Hexagon => 3,
        }
    }
}
