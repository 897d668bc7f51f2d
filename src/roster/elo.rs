//! FACEIT skill levels.

/// Lower ELO bound of each FACEIT level, highest level first.
const LEVEL_THRESHOLDS: [(u8, i64); 10] = [
    (10, 2001),
    (9, 1751),
    (8, 1531),
    (7, 1351),
    (6, 1201),
    (5, 1051),
    (4, 901),
    (3, 751),
    (2, 501),
    (1, 100),
];

/// FACEIT skill level from 1 to 10, 0 for ratings below the first band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EloLevel(pub u8);

impl EloLevel {
    pub fn from_elo(elo: i64) -> Self {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(_, threshold)| elo >= *threshold)
            .map(|(level, _)| EloLevel(*level))
            .unwrap_or(EloLevel(0))
    }

    /// Badge colour class, following FACEIT's grey/green/yellow/orange/red level colours
    pub fn color_class(&self) -> &'static str {
        match self.0 {
            0 | 1 => "bg-neutral text-neutral-content",
            2 | 3 => "bg-success text-success-content",
            4..=7 => "bg-warning text-warning-content",
            8 | 9 => "bg-orange-500 text-white",
            _ => "bg-error text-error-content",
        }
    }
}
