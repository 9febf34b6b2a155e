//! Erros da transformada de Fourier quântica

use shor_core::CoreError;
use thiserror::Error;

/// Erros possíveis ao aplicar a QFT
#[derive(Error, Debug)]
pub enum FourierError {
    /// Registrador vazio não tem transformada definida
    #[error("registrador vazio: a QFT requer pelo menos 1 qubit")]
    EmptyRegister,

    /// Erro propagado do motor de simulação
    #[error("erro do núcleo de simulação: {0}")]
    Core(#[from] CoreError),
}

/// Resultado das operações de Fourier
pub type FourierResult<T> = Result<T, FourierError>;
