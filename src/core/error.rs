use thiserror::Error;

/// Failures the simulation can report. None of them is fatal to the host page:
/// callers log them and degrade to an empty or partial field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("no 2d drawing context available")]
    SurfaceUnavailable,
    #[error("reference image failed to load: {0}")]
    AssetLoad(String),
    #[error("reference image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    PixelBuffer { len: usize, width: u32, height: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown configuration key `{0}`")]
    UnknownOverride(String),
}

pub type SimResult<T> = Result<T, SimError>;
