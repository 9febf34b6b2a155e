//! # 🧮 shor-arith — Aritmética Modular Reversível
//!
//! Circuitos de soma, multiplicação e exponenciação modular sobre o
//! vetor de estado de `shor-core`, mais os utilitários clássicos de
//! teoria dos números que os alimentam.
//!
//! ## Computational Complexity
//!
//! | Operação | Portas | Qubits auxiliares |
//! |----------|--------|-------------------|
//! | `add_constant` | O(n²) | 0 |
//! | `modular_add_const` | O(n²) | 2 |
//! | `modular_mul_const` | O(n³) | n + 2 |
//! | `mod_exp` | O(m·n³) | n + 2 |
//!
//! `n` = largura do registrador, `m` = largura do expoente. Os
//! auxiliares são emprestados do armazenamento e devolvidos limpos.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  mod_exp                    │
//! │   (cadeia de multiplicações controladas)    │
//! ├─────────────────────────────────────────────┤
//! │              modular_mul_const              │
//! │        (computa → troca → descomputa)       │
//! ├─────────────────────────────────────────────┤
//! │              modular_add_const              │
//! │      (soma, comparação, correção ± M)       │
//! ├─────────────────────────────────────────────┤
//! │        add_constant / increment             │
//! │         (cascatas de Toffoli MCX)           │
//! ├──────────────────────┬──────────────────────┤
//! │      shor-core       │      classical       │
//! │  (vetor de estado)   │  (gcd, inverso, …)   │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use shor_arith::{mod_exp, modular_mul_const};
//! use shor_core::AmplitudeStore;
//!
//! let mut store = AmplitudeStore::default();
//! let exp = store.allocate(3)?;
//! let out = store.allocate(4)?;
//!
//! // |x⟩|0⟩ → |x⟩|7^x mod 15⟩
//! mod_exp(&mut store, 15, 7, &exp, &out)?;
//! ```

pub mod adder;
pub mod classical;
pub mod error;
pub mod modexp;
pub mod multiplier;

pub use adder::{
    add_constant, modular_add_const, modular_add_const_ctrl, modular_sub_const_ctrl, sub_constant,
};
pub use classical::{bits_for, gcd, mod_inverse, mul_mod, pow_mod};
pub use error::{ArithError, ArithResult};
pub use modexp::mod_exp;
pub use multiplier::{modular_mul_const, modular_mul_const_ctrl};

#[cfg(test)]
mod tests;
