//! # Busca de Convergentes por Frações Contínuas
//!
//! Recupera um racional de denominador baixo próximo da fração medida
//! `estFreq / 2^(2n)`. A expansão euclidiana gera os quocientes `a_k`;
//! os convergentes seguem a recorrência padrão
//!
//! ```text
//! n_k = a_k·n_{k-1} + n_{k-2}        n_{-1} = 1, n_{-2} = 0
//! d_k = a_k·d_{k-1} + d_{k-2}        d_{-1} = 0, d_{-2} = 1
//! ```
//!
//! e o resultado é o último convergente cujo denominador não excede o
//! limiar. Termina em O(log den) passos, o limite do algoritmo de
//! Euclides.

/// Último convergente de `numerator/denominator` com denominador ≤ `threshold`
///
/// Retorna `(p, q)` com `q ≥ 1`. Para `numerator = 0` o resultado é
/// `(0, 1)`, o convergente trivial.
pub fn find_period_candidate(numerator: u64, denominator: u64, threshold: u64) -> (u64, u64) {
    let mut num = numerator;
    let mut den = denominator;

    let (mut p_prev, mut p_prev2) = (1u64, 0u64);
    let (mut q_prev, mut q_prev2) = (0u64, 1u64);
    let (mut best_p, mut best_q) = (0u64, 1u64);

    while den != 0 {
        let a = num / den;
        let p = a * p_prev + p_prev2;
        let q = a * q_prev + q_prev2;
        if q > threshold {
            break;
        }
        best_p = p;
        best_q = q;
        (p_prev2, p_prev) = (p_prev, p);
        (q_prev2, q_prev) = (q_prev, q);

        let rem = num % den;
        num = den;
        den = rem;
    }

    (best_p, best_q)
}
