//! Testes de integração da pilha aritmética completa

use shor_core::AmplitudeStore;

use crate::classical::pow_mod;
use crate::modexp::mod_exp;
use crate::multiplier::modular_mul_const;

// ===== Testes =====

#[test]
fn test_full_stack_multiply_chain() {
    // Encadeia multiplicações: 1 · 7 · 7 · 7 mod 15 = 343 mod 15 = 13
    let mut store = AmplitudeStore::default();
    let reg = store.allocate(4).unwrap();
    store.x(reg.qubit(0)).unwrap();

    for _ in 0..3 {
        modular_mul_const(&mut store, 15, 7, &reg).unwrap();
    }

    assert_eq!(store.measure_register(&reg).unwrap(), 13);
    assert_eq!(store.num_qubits(), 4);
}

#[test]
fn test_mod_exp_matches_classical_table() {
    // 4^x mod 15 cicla 1, 4 (período 2)
    for x in 0..4u64 {
        let mut store = AmplitudeStore::default();
        let exp = store.allocate(2).unwrap();
        let out = store.allocate(4).unwrap();
        for k in 0..2 {
            if (x >> k) & 1 == 1 {
                store.x(exp.qubit(k)).unwrap();
            }
        }

        mod_exp(&mut store, 15, 4, &exp, &out).unwrap();

        assert_eq!(store.measure_register(&out).unwrap(), pow_mod(4, x, 15));
    }
}

#[test]
fn test_mod_exp_releases_all_scratch() {
    // Após o circuito inteiro, só os registradores originais permanecem
    let mut store = AmplitudeStore::default();
    let exp = store.allocate(3).unwrap();
    let out = store.allocate(4).unwrap();
    for k in 0..3 {
        store.h(exp.qubit(k)).unwrap();
    }

    mod_exp(&mut store, 15, 7, &exp, &out).unwrap();

    assert_eq!(store.num_qubits(), 7);
    assert!(store.check_norm().is_ok());
}
