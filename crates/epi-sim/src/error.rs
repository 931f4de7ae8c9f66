use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] EpiError),

    #[error("population size {got} does not match configured population {expected}")]
    PopulationMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;
