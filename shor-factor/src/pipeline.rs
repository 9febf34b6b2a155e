//! # Pipeline de Busca de Período
//!
//! Uma tentativa completa do algoritmo de Shor para um palpite fixo:
//!
//! ```text
//! Init → Superposition → Exponentiated → FourierTransformed
//!      → Measured → ClassicalPostProcess → {Factored | Retry}
//! ```
//!
//! O contrato é de um tiro só: estado de entrada, fator-ou-motivo de
//! saída. Laço de palpites, teste de primalidade e o caso `N` par são
//! orquestração do chamador. O palpite deve ser coprimo com `N`.

use shor_arith::classical::{bits_for, gcd, mul_mod, pow_mod};
use shor_arith::modexp::mod_exp;
use shor_core::{AmplitudeStore, SimulatorConfig};
use shor_fourier::inverse_qft;

use crate::error::{PipelineError, PipelineResult};
use crate::fraction::find_period_candidate;
use crate::outcome::FactorResult;

/// Valida o par (N, palpite) compartilhado pelas entradas do pipeline
fn check_inputs(number: u64, guess: u64) -> PipelineResult<()> {
    if number < 2 {
        return Err(PipelineError::InvalidNumber(number));
    }
    let g = gcd(guess % number, number);
    if g != 1 {
        return Err(PipelineError::GuessNotCoprime {
            guess,
            number,
            gcd: g,
        });
    }
    Ok(())
}

/// Uma execução quântica de estimativa de frequência
///
/// Registrador de entrada com 2n qubits em superposição uniforme,
/// exponenciação modular entrelaçando a saída, QFT inversa na entrada e
/// UMA medição. Retorna `(est_freq, 2^(2n))` — a fração medida que o
/// pós-processamento clássico converte em candidato a período. O
/// registrador de saída fica emaranhado mas nunca é lido: ignorá-lo é o
/// traço parcial implícito.
pub fn find_approx_period(
    config: SimulatorConfig,
    number: u64,
    guess: u64,
) -> PipelineResult<(u64, u64)> {
    check_inputs(number, guess)?;

    let n = bits_for(number);
    let mut store = AmplitudeStore::new(config);
    let input = store.allocate(2 * n)?;
    let output = store.allocate(n)?;

    // Superposition
    for k in 0..input.len() {
        store.h(input.qubit(k))?;
    }

    // Exponentiated
    mod_exp(&mut store, number, guess, &input, &output)?;

    // A cadeia de multiplicações é longa; corrige deriva acumulada
    // antes de amostrar
    store.renormalize()?;

    // FourierTransformed
    inverse_qft(&mut store, &input)?;

    // Measured
    let est_freq = store.measure_register(&input)?;
    store.reset_register(&output)?;
    store.release(&output)?;
    store.reset_register(&input)?;
    store.release(&input)?;

    Ok((est_freq, 1u64 << (2 * n)))
}

/// Pós-processamento clássico: de período candidato a desfecho
///
/// Período ímpar e gcd trivial são desfechos ordinários que pedem novo
/// palpite. Um candidato que é divisor par do período verdadeiro ainda
/// pode render fator: a divisão pelo gcd decide, não uma verificação
/// prévia de `guess^r ≡ 1`.
pub fn find_factor(number: u64, guess: u64, period: u64) -> FactorResult {
    if period % 2 == 1 {
        return FactorResult::PeriodOdd;
    }

    let x = pow_mod(guess, period / 2, number);
    let f = gcd(x + number - 1, number);
    if f == 1 || f == number {
        return FactorResult::TrivialGcd;
    }
    FactorResult::Factor(f)
}

/// Uma tentativa completa: circuito, convergentes e pós-processamento
pub fn factor_once(
    config: SimulatorConfig,
    number: u64,
    guess: u64,
) -> PipelineResult<FactorResult> {
    let (est_freq, denominator) = find_approx_period(config, number, guess)?;
    let (_, period) = find_period_candidate(est_freq, denominator, number);
    Ok(find_factor(number, guess, period))
}

/// Oráculo clássico: menor r > 0 com `guess^r ≡ 1 (mod N)`
///
/// Busca linear sobre expoentes, só viável para N pequeno; serve de
/// referência de verdade para testar a saída do circuito.
pub fn find_period(number: u64, guess: u64) -> PipelineResult<u64> {
    check_inputs(number, guess)?;

    let mut acc = 1u64;
    for r in 1..number {
        acc = mul_mod(acc, guess, number);
        if acc == 1 {
            return Ok(r);
        }
    }
    // Inalcançável com gcd(guess, N) = 1: a ordem divide λ(N) < N
    Err(PipelineError::GuessNotCoprime {
        guess,
        number,
        gcd: gcd(guess, number),
    })
}
