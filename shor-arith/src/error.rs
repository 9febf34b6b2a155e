//! Tipos de erro para shor-arith

use shor_core::CoreError;
use thiserror::Error;

/// Resultado customizado para circuitos aritméticos
pub type ArithResult<T> = Result<T, ArithError>;

/// Erros que podem ocorrer na construção de circuitos modulares
#[derive(Debug, Clone, Error)]
pub enum ArithError {
    #[error("Constant {constant} is not invertible modulo {modulus}")]
    NotInvertible { constant: u64, modulus: u64 },

    #[error("Constant {constant} out of range (0, {modulus})")]
    ConstantOutOfRange { constant: u64, modulus: u64 },

    #[error("Modulus {0} must be greater than 1")]
    InvalidModulus(u64),

    #[error("Register of {len} qubits cannot hold residues modulo {modulus}")]
    RegisterTooSmall { len: usize, modulus: u64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}
