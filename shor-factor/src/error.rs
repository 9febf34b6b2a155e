//! Erros do pipeline de fatoração

use shor_arith::ArithError;
use shor_core::CoreError;
use shor_fourier::FourierError;
use thiserror::Error;

/// Erros possíveis durante uma execução do pipeline
///
/// Resultados algorítmicos ordinários (período ímpar, gcd trivial) NÃO
/// são erros: veja [`crate::FactorResult`]. Aqui ficam apenas violações
/// de pré-condição e falhas de invariante da simulação.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// O número a fatorar precisa ser composto e maior que 1
    #[error("número inválido para fatoração: {0} (requer N > 1)")]
    InvalidNumber(u64),

    /// O palpite precisa ser coprimo com o número a fatorar
    #[error("palpite {guess} não é coprimo com {number}: gcd = {gcd}")]
    GuessNotCoprime { guess: u64, number: u64, gcd: u64 },

    /// Erro propagado do núcleo de simulação
    #[error("erro do núcleo de simulação: {0}")]
    Core(#[from] CoreError),

    /// Erro propagado dos circuitos aritméticos
    #[error("erro de aritmética modular: {0}")]
    Arith(#[from] ArithError),

    /// Erro propagado da transformada de Fourier
    #[error("erro da QFT: {0}")]
    Fourier(#[from] FourierError),
}

/// Resultado das operações do pipeline
pub type PipelineResult<T> = Result<T, PipelineError>;
