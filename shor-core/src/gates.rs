//! # Quantum Gates — Portas Quânticas
//!
//! Portas padrão como valores de dados: cada porta é uma matriz 2×2
//! unitária; alvo e controles são fornecidos na aplicação (ver `engine`).
//!
//! ## Gates Implementadas
//!
//! - **Pauli**: X, Y, Z
//! - **Superposição**: H (Hadamard)
//! - **Fase**: S, T, Phase(φ)
//! - **Rotation**: Rx, Ry, Rz

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

impl Matrix2x2 {
    /// Cria matriz identidade
    pub fn identity() -> Self {
        Self {
            elements: [[ONE, ZERO], [ZERO, ONE]],
        }
    }

    /// Aplica a um par de amplitudes [alpha, beta]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [
                [a * e + b * g, a * f + b * h],
                [c * e + d * g, c * f + d * h],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }
}

/// Trait para portas quânticas
pub trait QuantumGate: Send + Sync {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta (2x2 para single-qubit)
    fn matrix(&self) -> Matrix2x2;

    /// Adjunta da porta (inversa, já que a porta é unitária)
    fn adjoint(&self) -> Matrix2x2 {
        self.matrix().dagger()
    }

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        let m = self.matrix();
        let m_dag = m.dagger();
        let product = m.mul(&m_dag);

        // Verifica se produto é identidade
        let [[a, b], [c, d]] = product.elements;
        (a.re - 1.0).abs() < 1e-10
            && a.im.abs() < 1e-10
            && b.norm_sqr() < 1e-10
            && c.norm_sqr() < 1e-10
            && (d.re - 1.0).abs() < 1e-10
            && d.im.abs() < 1e-10
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> Matrix2x2 {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Matrix2x2 {
            elements: [[h, h], [h, -h]],
        }
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ZERO, ONE], [ONE, ZERO]],
        }
    }
}

/// Porta Pauli-Y
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [
                [ZERO, Complex64::new(0.0, -1.0)],
                [Complex64::new(0.0, 1.0), ZERO],
            ],
        }
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ONE, ZERO], [ZERO, Complex64::new(-1.0, 0.0)]],
        }
    }
}

/// Porta S (√Z)
#[derive(Clone, Copy, Debug, Default)]
pub struct SGate;

impl QuantumGate for SGate {
    fn name(&self) -> &'static str {
        "S"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ONE, ZERO], [ZERO, Complex64::new(0.0, 1.0)]],
        }
    }
}

/// Porta T (π/8)
#[derive(Clone, Copy, Debug, Default)]
pub struct TGate;

impl QuantumGate for TGate {
    fn name(&self) -> &'static str {
        "T"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, PI / 4.0)]],
        }
    }
}

/// Porta de rotação em X
#[derive(Clone, Copy, Debug)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "Rx"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(self.theta / 2.0).sin());
        Matrix2x2 {
            elements: [[c, s], [s, c]],
        }
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let s = (self.theta / 2.0).sin();
        Matrix2x2 {
            elements: [
                [c, Complex64::new(-s, 0.0)],
                [Complex64::new(s, 0.0), c],
            ],
        }
    }
}

/// Porta de rotação em Z
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "Rz"
    }

    fn matrix(&self) -> Matrix2x2 {
        let half = self.theta / 2.0;
        Matrix2x2 {
            elements: [
                [Complex64::from_polar(1.0, -half), ZERO],
                [ZERO, Complex64::from_polar(1.0, half)],
            ],
        }
    }
}

/// Porta de fase genérica: |1⟩ ↦ e^{iφ}|1⟩
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub phi: f64,
}

impl Phase {
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

impl QuantumGate for Phase {
    fn name(&self) -> &'static str {
        "P"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, self.phi)]],
        }
    }
}

// =============================================================================
// Testes
// =============================================================================
