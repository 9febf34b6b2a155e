//! # Amplitude Store — Vetor de Estado
//!
//! Dono exclusivo do vetor denso de 2^N amplitudes complexas de uma sessão
//! de simulação. Registradores são visões leves (índices de qubits) sobre
//! este vetor; alocação e liberação seguem disciplina de pilha.
//!
//! Invariante: a soma dos quadrados das magnitudes é 1 dentro da tolerância
//! configurada após toda operação unitária.

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimulatorConfig;
use crate::error::{CoreError, CoreResult};
use crate::register::QuantumRegister;

/// Vetor de estado de N qubits com alocação de registradores em pilha
#[derive(Debug, Clone)]
pub struct AmplitudeStore {
    /// Amplitudes dos 2^N estados de base
    amps: Vec<Complex64>,
    /// Número de qubits vivos
    num_qubits: usize,
    /// Pilha de blocos alocados: (primeiro qubit, comprimento)
    blocks: Vec<(usize, usize)>,
    /// Configuração da sessão
    config: SimulatorConfig,
    /// Gerador pseudo-aleatório de medição (determinístico por seed)
    pub(crate) rng: StdRng,
}

impl AmplitudeStore {
    /// Cria sessão vazia (zero qubits, amplitude escalar 1)
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            amps: vec![Complex64::new(1.0, 0.0)],
            num_qubits: 0,
            blocks: Vec::new(),
            config,
            rng,
        }
    }

    /// Sessão com configuração padrão e seed dada
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimulatorConfig::with_seed(seed))
    }

    /// Configuração da sessão
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Número de qubits vivos
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço de estados (2^N)
    pub fn dimension(&self) -> usize {
        self.amps.len()
    }

    /// Amplitudes dos estados de base
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Acesso mutável bruto (só para o motor de portas)
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amps
    }

    /// Aloca registrador de n qubits em |0…0⟩
    ///
    /// Os novos qubits ocupam os índices mais altos; o produto tensorial
    /// com |0…0⟩ preserva as amplitudes existentes nos índices baixos.
    pub fn allocate(&mut self, n: usize) -> CoreResult<QuantumRegister> {
        if self.num_qubits + n > self.config.max_qubits {
            return Err(CoreError::CapacityExceeded {
                requested: n,
                live: self.num_qubits,
                budget: self.config.max_qubits,
            });
        }

        let start = self.num_qubits;
        self.num_qubits += n;
        self.amps.resize(1usize << self.num_qubits, Complex64::new(0.0, 0.0));
        self.blocks.push((start, n));

        Ok(QuantumRegister::new((start..start + n).collect()))
    }

    /// Libera registrador, exigindo que esteja limpo (|0…0⟩)
    ///
    /// A liberação segue a ordem inversa da alocação: somente o bloco mais
    /// recente pode ser liberado. Sujeira residual acima da tolerância é um
    /// bug fatal na sequência de portas chamadora, não um erro recuperável.
    pub fn release(&mut self, register: &QuantumRegister) -> CoreResult<()> {
        let Some(&(start, len)) = self.blocks.last() else {
            return Err(CoreError::ReleaseOutOfOrder);
        };
        let expected: Vec<usize> = (start..start + len).collect();
        if register.qubits() != expected.as_slice() {
            return Err(CoreError::ReleaseOutOfOrder);
        }

        let residual = self.residual_probability(register);
        if residual > self.config.norm_tolerance {
            return Err(CoreError::DirtyRelease(residual));
        }

        self.blocks.pop();
        self.num_qubits -= len;
        self.amps.truncate(1usize << self.num_qubits);
        Ok(())
    }

    /// Probabilidade total de qualquer qubit do registrador estar em |1⟩
    pub fn residual_probability(&self, register: &QuantumRegister) -> f64 {
        let mask = register.mask();
        self.amps
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Distribuição marginal de Born sobre os inteiros do registrador
    ///
    /// Soma |amplitude|² sobre todos os qubits fora do registrador;
    /// o índice k da distribuição é o inteiro little-endian k.
    pub fn probabilities(&self, register: &QuantumRegister) -> Vec<f64> {
        let mut dist = vec![0.0; register.dimension()];
        for (i, amp) in self.amps.iter().enumerate() {
            dist[register.value_of(i) as usize] += amp.norm_sqr();
        }
        dist
    }

    /// Norma do vetor de estado
    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Verifica deriva de norma além da tolerância
    pub fn check_norm(&self) -> CoreResult<()> {
        let norm = self.norm();
        if (norm - 1.0).abs() > self.config.norm_tolerance {
            return Err(CoreError::NormDrift(norm));
        }
        Ok(())
    }

    /// Renormaliza defensivamente (após sequências longas de portas)
    pub fn renormalize(&mut self) -> CoreResult<()> {
        let norm = self.norm();
        if norm < 1e-12 {
            return Err(CoreError::NormDrift(norm));
        }
        let inv = 1.0 / norm;
        for amp in &mut self.amps {
            *amp *= inv;
        }
        Ok(())
    }

    /// Valida um índice de qubit
    pub(crate) fn check_qubit(&self, index: usize) -> CoreResult<()> {
        if index >= self.num_qubits {
            return Err(CoreError::InvalidQubit {
                index,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }
}

impl Default for AmplitudeStore {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}
