//! # Exponenciação Modular Controlada
//!
//! `|x⟩|1⟩ → |x⟩|a^x mod M⟩` — o coração do circuito de fatoração.
//!
//! A decomposição binária do expoente transforma a potência numa cadeia
//! de multiplicações condicionais:
//!
//! ```text
//! a^x = a^(Σ x_j·2^j) = Π (a^(2^j))^(x_j)
//! ```
//!
//! As constantes `a^(2^j) mod M` são elevações ao quadrado sucessivas,
//! calculadas classicamente antes do circuito. Cada bit do expoente
//! controla uma única multiplicação modular; fatores iguais a 1 são
//! omitidos por completo.

use shor_core::{AmplitudeStore, QuantumRegister};

use crate::classical::{bits_for, gcd, mul_mod};
use crate::error::{ArithError, ArithResult};
use crate::multiplier::modular_mul_const_ctrl;

/// Aplica `|x⟩|0⟩ → |x⟩|base^x mod M⟩`
///
/// O registrador de saída deve estar em |0⟩; a rotina o inicializa em
/// |1⟩ antes da cadeia de multiplicações. Requer `gcd(base, M) = 1`.
pub fn mod_exp(
    store: &mut AmplitudeStore,
    modulus: u64,
    base: u64,
    exponent: &QuantumRegister,
    output: &QuantumRegister,
) -> ArithResult<()> {
    if modulus < 2 {
        return Err(ArithError::InvalidModulus(modulus));
    }
    let base = base % modulus;
    if base == 0 || gcd(base, modulus) != 1 {
        return Err(ArithError::NotInvertible {
            constant: base,
            modulus,
        });
    }
    if output.len() < bits_for(modulus) {
        return Err(ArithError::RegisterTooSmall {
            len: output.len(),
            modulus,
        });
    }

    // |0⟩ → |1⟩
    store.x(output.qubit(0))?;

    // Cadeia de quadrados: factor_j = base^(2^j) mod M
    let mut factor = base;
    for j in 0..exponent.len() {
        if factor != 1 {
            modular_mul_const_ctrl(store, modulus, factor, output, &[exponent.qubit(j)])?;
        }
        factor = mul_mod(factor, factor, modulus);
    }
    Ok(())
}
