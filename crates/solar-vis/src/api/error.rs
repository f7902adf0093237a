use thiserror::Error;

use crate::api::types::ShapeId;

/// Everything that can go wrong while drawing.
///
/// All variants are caller contract violations; none of them are transient,
/// so nothing in this crate retries.
#[derive(Debug, Error)]
pub enum VisError {
    #[error("scale factor has not been computed yet")]
    UninitializedScale,
    #[error("characteristic length must be positive and finite, got {0}")]
    InvalidCharacteristicLength(f64),
    #[error("body has no marker; create it before updating")]
    MissingMarker,
    #[error("{0} is no longer on the surface")]
    StaleMarker(ShapeId),
    #[error("speed/distance axes are not seeded; plot speed-vs-time and distance-vs-time first")]
    UnseededAxis,
    #[error("body index {index} out of range for {len} bodies")]
    BodyIndexOutOfRange { index: usize, len: usize },
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
    #[error("{axis} axis maximum is degenerate: {value}")]
    DegenerateAxis { axis: &'static str, value: f64 },
    #[error("invalid view configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse view configuration: {0}")]
    Config(#[from] serde_json::Error),
}
