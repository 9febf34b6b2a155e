//! # Multiplicação Modular por Constante
//!
//! `(c · y) mod M` in place, com `gcd(c, M) = 1`, pela expansão
//! shift-and-add reversível:
//!
//! ```text
//! 1. rascunho s (n qubits) em |0⟩
//! 2. para cada bit i da entrada: s += (c·2^i) mod M, controlado no bit i
//! 3. troca entrada ↔ rascunho (o produto fica no armazenamento original)
//! 4. desfaz o rascunho (agora contendo y) com a inversa modular de c,
//!    usando as posições originais como controle
//! 5. libera o rascunho limpo
//! ```
//!
//! A estrutura computa-troca-descomputa é o que torna a operação um
//! primitivo sem lixo, reutilizável dentro da exponenciação modular.

use shor_core::{AmplitudeStore, QuantumRegister};

use crate::adder::{modular_add_const_ctrl, modular_sub_const_ctrl, with_reduced_controls};
use crate::classical::{bits_for, gcd, mod_inverse, mul_mod};
use crate::error::{ArithError, ArithResult};

/// Computa `(c · y) mod M` in place no registrador
///
/// Requer `0 < c < M` e `gcd(c, M) = 1`.
pub fn modular_mul_const(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
) -> ArithResult<()> {
    modular_mul_const_ctrl(store, modulus, constant, register, &[])
}

/// Variante controlada de `modular_mul_const`
///
/// Identidade quando qualquer controle está em |0⟩.
pub fn modular_mul_const_ctrl(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
    controls: &[usize],
) -> ArithResult<()> {
    if modulus < 2 {
        return Err(ArithError::InvalidModulus(modulus));
    }
    if constant == 0 || constant >= modulus {
        return Err(ArithError::ConstantOutOfRange { constant, modulus });
    }
    if gcd(constant, modulus) != 1 {
        return Err(ArithError::NotInvertible { constant, modulus });
    }
    if register.len() < bits_for(modulus) {
        return Err(ArithError::RegisterTooSmall {
            len: register.len(),
            modulus,
        });
    }

    let inverse = mod_inverse(constant, modulus).ok_or(ArithError::NotInvertible {
        constant,
        modulus,
    })?;

    with_reduced_controls(store, controls, |store, ctl| {
        mul_body(store, modulus, constant, inverse, register, ctl)
    })
}

/// Corpo computa-troca-descomputa, com os controles já reduzidos
fn mul_body(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    inverse: u64,
    register: &QuantumRegister,
    controls: &[usize],
) -> ArithResult<()> {
    let n = register.len();
    let scratch = store.allocate(n)?;

    // s += c·2^i · y_i, acumulando o produto no rascunho
    for i in 0..n {
        let term = mul_mod(constant, 1u64 << i, modulus);
        if term == 0 {
            continue;
        }
        let mut ctl: Vec<usize> = vec![register.qubit(i)];
        ctl.extend_from_slice(controls);
        modular_add_const_ctrl(store, modulus, term, &scratch, &ctl)?;
    }

    // Troca controlada: o produto passa para o registrador original
    for i in 0..n {
        store.cswap(register.qubit(i), scratch.qubit(i), controls)?;
    }

    // s -= c⁻¹·2^i · p_i zera o rascunho (que agora contém y)
    for i in 0..n {
        let term = mul_mod(inverse, 1u64 << i, modulus);
        if term == 0 {
            continue;
        }
        let mut ctl: Vec<usize> = vec![register.qubit(i)];
        ctl.extend_from_slice(controls);
        modular_sub_const_ctrl(store, modulus, term, &scratch, &ctl)?;
    }

    store.release(&scratch)?;
    Ok(())
}
