//! # Gate Engine — Aplicação de Portas
//!
//! Aplica operadores unitários ao vetor de amplitudes por aritmética de
//! índices sobre padrões de bits: O(2^N) por porta de poucos qubits, nunca
//! multiplicação de matriz completa.
//!
//! Controles são um conjunto etiquetado (positivo/negativo). Controles
//! negativos são sintetizados cercando a aplicação com X no qubit de
//! controle; o caminho de aplicação em si é uma única rotina uniforme que
//! aplica a matriz onde todos os controles estão em |1⟩.

use crate::error::{CoreError, CoreResult};
use crate::gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
use crate::store::AmplitudeStore;

/// Controle etiquetado: dispara em |1⟩ (positivo) ou |0⟩ (negativo)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub qubit: usize,
    pub positive: bool,
}

impl Control {
    /// Controle que dispara em |1⟩
    pub fn positive(qubit: usize) -> Self {
        Self {
            qubit,
            positive: true,
        }
    }

    /// Controle que dispara em |0⟩
    pub fn negative(qubit: usize) -> Self {
        Self {
            qubit,
            positive: false,
        }
    }
}

impl AmplitudeStore {
    /// Rotina uniforme: matriz 2×2 no alvo, nos índices onde todos os
    /// bits de `ctrl_mask` estão em 1
    fn apply_matrix(&mut self, m: &Matrix2x2, target: usize, ctrl_mask: usize) {
        let t = 1usize << target;
        let dim = self.dimension();
        // Enumera só os índices participantes: bits livres percorridos por
        // enumeração de submáscaras, O(1) por par de estados de base
        let free = (dim - 1) & !(ctrl_mask | t);
        let amps = self.amplitudes_mut();

        let mut sub = free;
        loop {
            let i = sub | ctrl_mask;
            let j = i | t;
            let [a0, a1] = m.apply([amps[i], amps[j]]);
            amps[i] = a0;
            amps[j] = a1;
            if sub == 0 {
                break;
            }
            sub = (sub - 1) & free;
        }
    }

    /// Valida alvo + controles e monta a máscara de controles
    fn control_mask(&self, target: usize, controls: &[Control]) -> CoreResult<usize> {
        self.check_qubit(target)?;
        let mut seen = 1usize << target;
        let mut mask = 0usize;
        for c in controls {
            self.check_qubit(c.qubit)?;
            let bit = 1usize << c.qubit;
            if seen & bit != 0 {
                return Err(CoreError::DuplicateQubit(c.qubit));
            }
            seen |= bit;
            mask |= bit;
        }
        Ok(mask)
    }

    /// Aplica porta single-qubit sem controles
    pub fn apply(&mut self, gate: &dyn QuantumGate, target: usize) -> CoreResult<()> {
        self.apply_controlled(gate, target, &[])
    }

    /// Combinador `controlled`: aplica a porta sob um conjunto de controles
    ///
    /// Controles negativos são negados com X antes e depois da aplicação,
    /// de modo que a rotina central só conhece controles positivos.
    pub fn apply_controlled(
        &mut self,
        gate: &dyn QuantumGate,
        target: usize,
        controls: &[Control],
    ) -> CoreResult<()> {
        let mask = self.control_mask(target, controls)?;
        let x = PauliX.matrix();

        for c in controls.iter().filter(|c| !c.positive) {
            self.apply_matrix(&x, c.qubit, 0);
        }
        self.apply_matrix(&gate.matrix(), target, mask);
        for c in controls.iter().filter(|c| !c.positive) {
            self.apply_matrix(&x, c.qubit, 0);
        }
        Ok(())
    }

    /// Aplica a adjunta da porta sob controles
    pub fn apply_controlled_adjoint(
        &mut self,
        gate: &dyn QuantumGate,
        target: usize,
        controls: &[Control],
    ) -> CoreResult<()> {
        let mask = self.control_mask(target, controls)?;
        let x = PauliX.matrix();

        for c in controls.iter().filter(|c| !c.positive) {
            self.apply_matrix(&x, c.qubit, 0);
        }
        self.apply_matrix(&gate.adjoint(), target, mask);
        for c in controls.iter().filter(|c| !c.positive) {
            self.apply_matrix(&x, c.qubit, 0);
        }
        Ok(())
    }

    /// X multi-controlado (controles todos positivos)
    ///
    /// Para k pequeno a aplicação direta é exata e barata; decomposições
    /// assistidas por ancilla vivem na camada aritmética.
    pub fn mcx(&mut self, target: usize, controls: &[usize]) -> CoreResult<()> {
        let tagged: Vec<Control> = controls.iter().map(|&q| Control::positive(q)).collect();
        let mask = self.control_mask(target, &tagged)?;
        self.apply_matrix(&PauliX.matrix(), target, mask);
        Ok(())
    }

    // =========================================================================
    // Atalhos nomeados
    // =========================================================================

    /// Pauli-X no qubit
    pub fn x(&mut self, qubit: usize) -> CoreResult<()> {
        self.apply(&PauliX, qubit)
    }

    /// Pauli-Y no qubit
    pub fn y(&mut self, qubit: usize) -> CoreResult<()> {
        self.apply(&PauliY, qubit)
    }

    /// Pauli-Z no qubit
    pub fn z(&mut self, qubit: usize) -> CoreResult<()> {
        self.apply(&PauliZ, qubit)
    }

    /// Hadamard no qubit
    pub fn h(&mut self, qubit: usize) -> CoreResult<()> {
        self.apply(&Hadamard, qubit)
    }

    /// Porta S no qubit
    pub fn s(&mut self, qubit: usize) -> CoreResult<()> {
        self.apply(&SGate, qubit)
    }

    /// Porta T no qubit
    pub fn t(&mut self, qubit: usize) -> CoreResult<()> {
        self.apply(&TGate, qubit)
    }

    /// Rotação Rx(θ)
    pub fn rx(&mut self, theta: f64, qubit: usize) -> CoreResult<()> {
        self.apply(&RotationX::new(theta), qubit)
    }

    /// Rotação Ry(θ)
    pub fn ry(&mut self, theta: f64, qubit: usize) -> CoreResult<()> {
        self.apply(&RotationY::new(theta), qubit)
    }

    /// Rotação Rz(θ)
    pub fn rz(&mut self, theta: f64, qubit: usize) -> CoreResult<()> {
        self.apply(&RotationZ::new(theta), qubit)
    }

    /// Fase φ no qubit
    pub fn phase(&mut self, phi: f64, qubit: usize) -> CoreResult<()> {
        self.apply(&Phase::new(phi), qubit)
    }

    /// CNOT: X no alvo controlado em |1⟩
    pub fn cnot(&mut self, control: usize, target: usize) -> CoreResult<()> {
        self.mcx(target, &[control])
    }

    /// Toffoli (CCNOT)
    pub fn ccnot(&mut self, control1: usize, control2: usize, target: usize) -> CoreResult<()> {
        self.mcx(target, &[control1, control2])
    }

    /// Fase controlada: e^{iθ} onde controle e alvo estão em |1⟩
    pub fn cphase(&mut self, theta: f64, control: usize, target: usize) -> CoreResult<()> {
        self.apply_controlled(&Phase::new(theta), target, &[Control::positive(control)])
    }

    /// SWAP por permutação de índices
    pub fn swap(&mut self, a: usize, b: usize) -> CoreResult<()> {
        self.cswap(a, b, &[])
    }

    /// SWAP controlado (Fredkin para um controle, geral para k)
    pub fn cswap(&mut self, a: usize, b: usize, controls: &[usize]) -> CoreResult<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(CoreError::DuplicateQubit(a));
        }
        let mut mask = 0usize;
        for &c in controls {
            self.check_qubit(c)?;
            let bit = 1usize << c;
            if bit & (1usize << a | 1usize << b | mask) != 0 {
                return Err(CoreError::DuplicateQubit(c));
            }
            mask |= bit;
        }

        let (bit_a, bit_b) = (1usize << a, 1usize << b);
        let dim = self.dimension();
        // Cada par visitado uma vez: a=1, b=0 fixos, demais bits livres
        let free = (dim - 1) & !(mask | bit_a | bit_b);
        let amps = self.amplitudes_mut();

        let mut sub = free;
        loop {
            let i = sub | mask | bit_a;
            let j = i ^ (bit_a | bit_b);
            amps.swap(i, j);
            if sub == 0 {
                break;
            }
            sub = (sub - 1) & free;
        }
        Ok(())
    }
}
