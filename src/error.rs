use std::fmt;

/// Rejected tuning, raised when a game or generator is constructed
#[derive(Debug)]
pub enum ConfigError {
    NonPositiveTickRate { tick_rate: f32 },
    NonPositiveScrollStep { step: i32 },
    NonPositiveDimension { field: &'static str, value: i32 },
    CountTooLarge { field: &'static str, value: u32, max: u32 },
    OutOfRange { field: &'static str, value: i32, limit: i32 },
    EmptyGap,
    GapTooLarge { gap: u32, tiles: u32 },
    NoGapPlacement { min_start: u32, gap: u32, tiles: u32 },
    GroundTooShort { covered: i32, required: i32 },
    WrapAheadOfSpawn { wrap_x: i32, spawn_x: i32 },
    NoColumns,
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTickRate { tick_rate } => {
                write!(f, "tick rate must be positive and finite, got {tick_rate}")
            }
            Self::NonPositiveScrollStep { step } => {
                write!(f, "scroll step must be positive, got {step}")
            }
            Self::NonPositiveDimension { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::CountTooLarge { field, value, max } => {
                write!(f, "{field} must be at most {max}, got {value}")
            }
            Self::OutOfRange {
                field,
                value,
                limit,
            } => write!(f, "{field} must lie within -{limit}..={limit}, got {value}"),
            Self::EmptyGap => write!(f, "gap size must be at least one tile"),
            Self::GapTooLarge { gap, tiles } => {
                write!(f, "gap of {gap} tiles does not fit a column of {tiles}")
            }
            Self::NoGapPlacement {
                min_start,
                gap,
                tiles,
            } => write!(
                f,
                "no gap placement: start >= {min_start}, size {gap}, column of {tiles} must leave the last tile solid"
            ),
            Self::GroundTooShort { covered, required } => write!(
                f,
                "ground tiles cover {covered} units, need at least {required}"
            ),
            Self::WrapAheadOfSpawn { wrap_x, spawn_x } => write!(
                f,
                "column wrap x {wrap_x} must be left of spawn x {spawn_x}"
            ),
            Self::NoColumns => write!(f, "at least one obstacle column is required"),
            Self::Json(err) => write!(f, "invalid tuning json: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
