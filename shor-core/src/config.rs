//! Configuração do simulador

use serde::{Deserialize, Serialize};

/// Configuração da sessão de simulação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Número máximo de qubits vivos (vetor de estado cresce como 2^N)
    pub max_qubits: usize,
    /// Seed do gerador pseudo-aleatório de medição
    pub seed: u64,
    /// Tolerância numérica para a norma do estado
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 26,
            seed: 42,
            norm_tolerance: 1e-9,
        }
    }
}

impl SimulatorConfig {
    /// Configuração padrão com seed customizada
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
