//! Error types surfaced by `reset` and `tick`.

/// Simulation error kinds
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// Rejected at the input boundary, nothing was committed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The stars coincide, the inverse-square force is undefined
    #[error("singularity: relative separation {separation} m is not integrable")]
    Singularity { separation: f64 },

    /// The elapsed-time accumulator left the exactly representable range
    #[error("elapsed time overflow at tick {tick}")]
    Overflow { tick: u64 },
}

impl SimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SimError::Configuration(msg.into())
    }
}

pub type SimResult<T> = Result<T, SimError>;
