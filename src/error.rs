use thiserror::Error;

/// Errors produced while generating a maze or deriving its wall graph.
#[derive(Debug, Error)]
pub enum MazeError {
    /// A dimension was zero.
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u16, height: u16 },
    /// Internal bookkeeping found a state that a correct algorithm never reaches.
    #[error("maze invariant violated: {0}")]
    InvariantViolation(String),
    #[error("failed to write maze: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = MazeError> = std::result::Result<T, E>;

/// Reject grids with a zero side.
pub(crate) fn check_dimensions(width: u16, height: u16) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimension { width, height });
    }
    Ok(())
}
