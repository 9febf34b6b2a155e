//! # ⚛️ shor-core — Simulação de Vetor de Estado
//!
//! Substrato de simulação para o algoritmo de Shor: vetor de amplitudes,
//! registradores, motor de portas e medição com colapso estocástico.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2^N):**
//! - N = number of live qubits
//! - Index-wise walk over basis-state pairs, never a full matrix product
//!
//! **Measurement — O(2^N):**
//! - Born-rule marginal + collapse + renormalization, one pass each
//!
//! **Allocate/release — O(2^N):**
//! - Tensor-product growth / truncation of the amplitude vector
//!
//! **Scalability:** o orçamento de qubits (padrão 26) limita o vetor a
//! ~2^26 amplitudes; além disso a simulação densa deixa de ser prática.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          AmplitudeStore                         │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Vec<Complex64> (2^N amplitudes)          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Register Stack (allocate/release)        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Engine (index-walking kernel)       │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement (seeded Born sampling)       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use shor_core::{AmplitudeStore, SimulatorConfig};
//!
//! let mut store = AmplitudeStore::new(SimulatorConfig::with_seed(42));
//! let reg = store.allocate(2)?;
//!
//! store.h(reg.qubit(0))?;
//! store.cnot(reg.qubit(0), reg.qubit(1))?;
//!
//! let outcome = store.measure_register(&reg)?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod gates;
pub mod measure;
pub mod register;
pub mod store;

pub use config::SimulatorConfig;
pub use engine::Control;
pub use error::{CoreError, CoreResult};
pub use gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
pub use register::QuantumRegister;
pub use store::AmplitudeStore;

#[cfg(test)]
mod tests;
