use thiserror::Error;

/// Top-level error type for the Polaris diagram kernel.
#[derive(Debug, Error)]
pub enum PolarisError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Invalid diagram parameters, rejected before any sampling happens.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("angle step must be positive, got {step}")]
    NonPositiveStep { step: f64 },

    #[error("sweep is empty: start {start} must be below end {end}")]
    EmptySweep { start: f64, end: f64 },

    #[error("base radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },

    #[error("parameter {parameter} is not finite")]
    NonFinite { parameter: &'static str },

    #[error("sweep holds {count} samples, more than the limit of {max}")]
    TooManySamples { count: f64, max: usize },

    #[error("canvas must have a positive size, got {width}x{height}")]
    NonPositiveCanvas { width: f64, height: f64 },
}

/// Errors raised by the interactive session surface.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("no diagram bound to key {0:?}")]
    UnknownKey(char),

    #[error("slider {slider} = {value} is out of range [{min}, {max}]")]
    SliderOutOfRange {
        slider: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`PolarisError`].
pub type Result<T> = std::result::Result<T, PolarisError>;
