//! # Transformada de Fourier Quântica
//!
//! `|x⟩ → (1/√D) Σ_k e^{2πi·xk/D} |k⟩` com `D = 2^n`, sobre registradores
//! little-endian, pelo circuito padrão de Hadamards e fases controladas:
//!
//! ```text
//! q_{n-1} ──H──●────●──────────╳
//!              │    │          │
//! q_{n-2} ─────R₂───┼──H──●────┼─╳
//!                   │     │    │ │
//! q_0     ──────────R_n───R₂───╳─╳
//! ```
//!
//! `R_k` é a fase `π/2^{k-1}`; as trocas finais revertem a ordem dos
//! bits para que a saída fique no mesmo endianness da entrada.
//!
//! ## Computational Complexity
//!
//! O(n²) portas sobre O(2^n) amplitudes — n(n+1)/2 fases controladas
//! mais ⌊n/2⌋ trocas.

use std::f64::consts::PI;

use shor_core::{AmplitudeStore, QuantumRegister};

use crate::error::{FourierError, FourierResult};

/// Aplica a QFT in place sobre o registrador
pub fn qft(store: &mut AmplitudeStore, register: &QuantumRegister) -> FourierResult<()> {
    let n = register.len();
    if n == 0 {
        return Err(FourierError::EmptyRegister);
    }

    // Do bit mais significativo para o menos: H seguido das fases
    // condicionadas nos bits ainda não transformados
    for j in (0..n).rev() {
        store.h(register.qubit(j))?;
        for i in (0..j).rev() {
            let angle = PI / (1u64 << (j - i)) as f64;
            store.cphase(angle, register.qubit(i), register.qubit(j))?;
        }
    }

    reverse_bits(store, register)?;
    Ok(())
}

/// Aplica a QFT inversa in place (adjunta exata do circuito direto)
pub fn inverse_qft(store: &mut AmplitudeStore, register: &QuantumRegister) -> FourierResult<()> {
    let n = register.len();
    if n == 0 {
        return Err(FourierError::EmptyRegister);
    }

    reverse_bits(store, register)?;

    // Portas na ordem reversa, fases negadas
    for j in 0..n {
        for i in 0..j {
            let angle = -PI / (1u64 << (j - i)) as f64;
            store.cphase(angle, register.qubit(i), register.qubit(j))?;
        }
        store.h(register.qubit(j))?;
    }
    Ok(())
}

/// Reverte a ordem dos bits do registrador
fn reverse_bits(store: &mut AmplitudeStore, register: &QuantumRegister) -> FourierResult<()> {
    let n = register.len();
    for k in 0..n / 2 {
        store.swap(register.qubit(k), register.qubit(n - 1 - k))?;
    }
    Ok(())
}
