//! Aritmética clássica de apoio à construção de circuitos
//!
//! As constantes dos circuitos (potências de 2 do multiplicador, inversas
//! modulares, `a^(2^j) mod M`) são sempre pré-computadas classicamente e
//! alimentadas na construção das portas — nunca calculadas "dentro" do
//! circuito simulado.

/// Máximo divisor comum (Euclides)
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Produto modular com intermediário de 128 bits
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Exponenciação modular por quadrados sucessivos
pub fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1u64;
    let mut base = base % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Inversa multiplicativa módulo `modulus` (Euclides estendido)
///
/// Retorna `None` quando `gcd(value, modulus) != 1`.
pub fn mod_inverse(value: u64, modulus: u64) -> Option<u64> {
    let (mut r0, mut r1) = (modulus as i128, (value % modulus) as i128);
    let (mut s0, mut s1) = (0i128, 1i128);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
    }

    if r0 != 1 {
        return None;
    }
    Some(s0.rem_euclid(modulus as i128) as u64)
}

/// Número de bits necessários para representar resíduos módulo `m`
pub fn bits_for(m: u64) -> usize {
    (64 - (m - 1).leading_zeros()) as usize
}
