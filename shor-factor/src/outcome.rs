//! Desfechos algorítmicos de uma tentativa de fatoração
//!
//! O algoritmo de Shor só tem sucesso probabilisticamente por
//! tentativa: período ímpar e gcd trivial são desfechos rotineiros que
//! pedem um novo palpite, nunca exceções. Cada variante carrega a razão
//! exata para o chamador decidir a próxima ação.

use serde::{Deserialize, Serialize};

/// Desfecho de uma tentativa de fatoração com um palpite fixo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorResult {
    /// Fator não trivial encontrado
    Factor(u64),

    /// O período recuperado é ímpar; tentar outro palpite
    PeriodOdd,

    /// `gcd(guess^(r/2) − 1, N)` caiu em {1, N}; tentar outro palpite
    TrivialGcd,

    /// Nenhum fator emergiu; usado pelo orquestrador externo ao
    /// esgotar o limite de tentativas sem sucesso
    NotFound,
}

impl FactorResult {
    /// Verdadeiro quando a tentativa produziu um fator
    pub fn is_factor(&self) -> bool {
        matches!(self, FactorResult::Factor(_))
    }
}

impl std::fmt::Display for FactorResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorResult::Factor(p) => write!(f, "fator {p}"),
            FactorResult::PeriodOdd => write!(f, "período ímpar"),
            FactorResult::TrivialGcd => write!(f, "gcd trivial"),
            FactorResult::NotFound => write!(f, "período não encontrado"),
        }
    }
}
