//! Tipos de erro para shor-core

use thiserror::Error;

/// Resultado customizado para operações de simulação
pub type CoreResult<T> = Result<T, CoreError>;

/// Erros que podem ocorrer na simulação do vetor de estado
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Qubit budget exceeded: requested {requested} with {live} live, budget {budget}")]
    CapacityExceeded {
        requested: usize,
        live: usize,
        budget: usize,
    },

    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubit { index: usize, num_qubits: usize },

    #[error("Duplicate qubit {0} in gate operands")]
    DuplicateQubit(usize),

    #[error("Register released out of allocation order")]
    ReleaseOutOfOrder,

    #[error("Register not in |0…0⟩ on release: residual probability {0}")]
    DirtyRelease(f64),

    #[error("State norm drifted to {0}")]
    NormDrift(f64),

    #[error("Measurement collapsed onto probability mass {0}")]
    DegenerateMeasurement(f64),
}
