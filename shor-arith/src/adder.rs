//! # Adição Modular por Constante
//!
//! `(y + c) mod M` in place sobre um registrador que já contém `y < M`,
//! construída a partir de circuitos de incremento/decremento mais uma
//! correção condicional que re-adiciona `M` quando a soma não atinge o
//! módulo. A comparação usa um qubit de carry emprestado (estendendo o
//! registrador) e um qubit de flag emprestado, ambos devolvidos em |0⟩.
//!
//! ## Redução de contagem de controles
//!
//! A variante controlada com k ≥ 2 controles NÃO distribui os k controles
//! por cada porta interna: computa o AND de todos os controles em um único
//! qubit de rascunho e dirige o corpo inteiro com esse controle. Para
//! k = 1 o controle é passado diretamente por toda a sequência de
//! incremento/comparação/correção. O qubit de AND é descomputado em todo
//! caminho de código.

use shor_core::{AmplitudeStore, QuantumRegister};

use crate::classical::bits_for;
use crate::error::{ArithError, ArithResult};

/// Incremento módulo 2^L sobre `qubits` (LSB primeiro), sob `controls`
///
/// O bit i inverte exatamente quando todos os bits abaixo dele estão em 1;
/// aplicado do MSB para o LSB para ler os bits antes da inversão.
pub(crate) fn increment(
    store: &mut AmplitudeStore,
    qubits: &[usize],
    controls: &[usize],
) -> ArithResult<()> {
    for i in (0..qubits.len()).rev() {
        let mut ctl: Vec<usize> = qubits[..i].to_vec();
        ctl.extend_from_slice(controls);
        store.mcx(qubits[i], &ctl)?;
    }
    Ok(())
}

/// Soma a constante `c` módulo 2^L sobre `qubits`, sob `controls`
///
/// Somar 2^j equivale a incrementar o sub-registrador dos bits j..L;
/// as parcelas comutam entre si (todas são adições módulo 2^L).
pub fn add_constant(
    store: &mut AmplitudeStore,
    qubits: &[usize],
    c: u64,
    controls: &[usize],
) -> ArithResult<()> {
    let len = qubits.len();
    let c = if len >= 64 { c } else { c & ((1u64 << len) - 1) };
    for j in 0..len {
        if (c >> j) & 1 == 1 {
            increment(store, &qubits[j..], controls)?;
        }
    }
    Ok(())
}

/// Subtrai a constante `c` módulo 2^L (complemento de dois)
pub fn sub_constant(
    store: &mut AmplitudeStore,
    qubits: &[usize],
    c: u64,
    controls: &[usize],
) -> ArithResult<()> {
    let len = qubits.len();
    let mask = if len >= 64 { u64::MAX } else { (1u64 << len) - 1 };
    add_constant(store, qubits, c.wrapping_neg() & mask, controls)
}

/// Executa `body` sob um conjunto de controles reduzido
///
/// Para k ≥ 2 computa o AND dos controles em um qubit de rascunho e passa
/// apenas esse qubit ao corpo; o AND é descomputado e o rascunho liberado
/// mesmo quando o corpo retorna erro.
pub(crate) fn with_reduced_controls<F>(
    store: &mut AmplitudeStore,
    controls: &[usize],
    body: F,
) -> ArithResult<()>
where
    F: FnOnce(&mut AmplitudeStore, &[usize]) -> ArithResult<()>,
{
    if controls.len() < 2 {
        return body(store, controls);
    }

    let scratch = store.allocate(1)?;
    let and_qubit = scratch.qubit(0);
    store.mcx(and_qubit, controls)?;

    let result = body(store, &[and_qubit]);

    // Descomputa o AND em todo caminho, inclusive no de erro
    store.mcx(and_qubit, controls)?;
    store.release(&scratch)?;
    result
}

/// Valida módulo, constante e largura do registrador
fn check_operands(
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
) -> ArithResult<()> {
    if modulus < 2 {
        return Err(ArithError::InvalidModulus(modulus));
    }
    if constant == 0 || constant >= modulus {
        return Err(ArithError::ConstantOutOfRange { constant, modulus });
    }
    if register.len() < bits_for(modulus) {
        return Err(ArithError::RegisterTooSmall {
            len: register.len(),
            modulus,
        });
    }
    Ok(())
}

/// Corpo da adição modular, com os controles já reduzidos
///
/// Sequência sobre z = registrador ⧺ carry (n+1 bits), flag f:
///
/// ```text
/// 1. z += c                 soma não restrita
/// 2. z -= M                 o carry indica y + c < M
/// 3. f ⊕= carry             captura a comparação
/// 4. se f: z += M           correção condicional
/// 5. z -= c                 compara resultado com c …
/// 6. X carry; f ⊕= carry; X carry   … e descomputa f
/// 7. z += c                 restaura o resultado
/// ```
fn modular_add_body(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
    controls: &[usize],
) -> ArithResult<()> {
    let helpers = store.allocate(2)?;
    let carry = helpers.qubit(0);
    let flag = helpers.qubit(1);

    let mut z: Vec<usize> = register.qubits().to_vec();
    z.push(carry);

    let mut flag_ctl: Vec<usize> = vec![carry];
    flag_ctl.extend_from_slice(controls);
    let mut corr_ctl: Vec<usize> = vec![flag];
    corr_ctl.extend_from_slice(controls);

    add_constant(store, &z, constant, controls)?;
    sub_constant(store, &z, modulus, controls)?;
    store.mcx(flag, &flag_ctl)?;
    add_constant(store, &z, modulus, &corr_ctl)?;
    sub_constant(store, &z, constant, controls)?;
    if controls.is_empty() {
        store.x(carry)?;
    } else {
        store.mcx(carry, controls)?;
    }
    store.mcx(flag, &flag_ctl)?;
    if controls.is_empty() {
        store.x(carry)?;
    } else {
        store.mcx(carry, controls)?;
    }
    add_constant(store, &z, constant, controls)?;

    store.release(&helpers)?;
    Ok(())
}

/// Computa `(y + c) mod M` in place no registrador
///
/// Requer `0 < c < M` e `y < M`.
pub fn modular_add_const(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
) -> ArithResult<()> {
    modular_add_const_ctrl(store, modulus, constant, register, &[])
}

/// Variante controlada de `modular_add_const`
///
/// Identidade quando qualquer controle está em |0⟩.
pub fn modular_add_const_ctrl(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
    controls: &[usize],
) -> ArithResult<()> {
    check_operands(modulus, constant, register)?;
    with_reduced_controls(store, controls, |store, ctl| {
        modular_add_body(store, modulus, constant, register, ctl)
    })
}

/// Computa `(y - c) mod M` in place no registrador
pub fn modular_sub_const_ctrl(
    store: &mut AmplitudeStore,
    modulus: u64,
    constant: u64,
    register: &QuantumRegister,
    controls: &[usize],
) -> ArithResult<()> {
    // (y - c) mod M = (y + (M - c)) mod M
    if constant == 0 || constant >= modulus {
        return Err(ArithError::ConstantOutOfRange { constant, modulus });
    }
    modular_add_const_ctrl(store, modulus, modulus - constant, register, controls)
}
