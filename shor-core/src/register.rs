//! Registrador quântico — visão ordenada de qubits

use serde::{Deserialize, Serialize};

/// Registrador quântico: sequência ordenada de índices de qubits
/// no vetor de amplitudes compartilhado.
///
/// Convenção little-endian: o qubit de índice 0 do registrador é o bit
/// menos significativo do inteiro que o registrador codifica. Registradores
/// nunca se sobrepõem em índices de qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumRegister {
    qubits: Vec<usize>,
}

impl QuantumRegister {
    /// Cria registrador a partir de índices (LSB primeiro)
    pub fn new(qubits: Vec<usize>) -> Self {
        Self { qubits }
    }

    /// Número de qubits
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Registrador vazio?
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Índice global do k-ésimo qubit (bit k do inteiro codificado)
    pub fn qubit(&self, k: usize) -> usize {
        self.qubits[k]
    }

    /// Todos os índices, LSB primeiro
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Maior inteiro representável + 1 (2^len)
    pub fn dimension(&self) -> usize {
        1usize << self.qubits.len()
    }

    /// Máscara de bits dos qubits do registrador no índice global
    pub fn mask(&self) -> usize {
        self.qubits.iter().fold(0, |m, &q| m | (1usize << q))
    }

    /// Extrai o valor little-endian do registrador de um índice de base
    pub fn value_of(&self, basis_index: usize) -> u64 {
        self.qubits
            .iter()
            .enumerate()
            .fold(0u64, |v, (k, &q)| v | ((((basis_index >> q) & 1) as u64) << k))
    }
}
