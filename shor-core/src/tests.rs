//! Testes integrados para shor-core

use crate::*;
use std::f64::consts::FRAC_1_SQRT_2;

#[test]
fn test_register_lifecycle() {
    let mut store = AmplitudeStore::default();

    let input = store.allocate(4).unwrap();
    let output = store.allocate(2).unwrap();
    assert_eq!(store.num_qubits(), 6);

    // Índices não se sobrepõem
    assert_eq!(input.qubits(), &[0, 1, 2, 3]);
    assert_eq!(output.qubits(), &[4, 5]);

    store.release(&output).unwrap();
    store.release(&input).unwrap();
    assert_eq!(store.num_qubits(), 0);
}

#[test]
fn test_norm_preserved_by_gate_sequence() {
    let mut store = AmplitudeStore::with_seed(5);
    let reg = store.allocate(4).unwrap();

    for k in 0..4 {
        store.h(reg.qubit(k)).unwrap();
    }
    store.cnot(reg.qubit(0), reg.qubit(1)).unwrap();
    store.ccnot(reg.qubit(0), reg.qubit(1), reg.qubit(2)).unwrap();
    store.cphase(0.7, reg.qubit(2), reg.qubit(3)).unwrap();
    store.t(reg.qubit(0)).unwrap();
    store.s(reg.qubit(3)).unwrap();

    assert!(store.check_norm().is_ok());
}

#[test]
fn test_ghz_state_preparation() {
    let mut store = AmplitudeStore::default();
    let reg = store.allocate(3).unwrap();

    // GHZ: (|000⟩ + |111⟩)/√2
    store.h(reg.qubit(0)).unwrap();
    store.cnot(reg.qubit(0), reg.qubit(1)).unwrap();
    store.cnot(reg.qubit(1), reg.qubit(2)).unwrap();

    let dist = store.probabilities(&reg);
    assert!((dist[0b000] - 0.5).abs() < 1e-12);
    assert!((dist[0b111] - 0.5).abs() < 1e-12);
    for v in 1..7 {
        assert!(dist[v].abs() < 1e-12);
    }
}

#[test]
fn test_w_state_preparation() {
    let mut store = AmplitudeStore::default();
    let reg = store.allocate(3).unwrap();

    // W: (|001⟩ + |010⟩ + |100⟩)/√3, via rotações e controles
    let theta = 2.0 * (1.0 / 3.0f64).sqrt().asin();
    store.ry(theta, reg.qubit(0)).unwrap();
    let half = 2.0 * FRAC_1_SQRT_2.asin();
    store
        .apply_controlled(
            &RotationY::new(half),
            reg.qubit(1),
            &[Control::negative(reg.qubit(0))],
        )
        .unwrap();
    store
        .apply_controlled(
            &PauliX,
            reg.qubit(2),
            &[Control::negative(reg.qubit(0)), Control::negative(reg.qubit(1))],
        )
        .unwrap();

    let dist = store.probabilities(&reg);
    assert!((dist[0b001] - 1.0 / 3.0).abs() < 1e-9);
    assert!((dist[0b010] - 1.0 / 3.0).abs() < 1e-9);
    assert!((dist[0b100] - 1.0 / 3.0).abs() < 1e-9);
    assert!(dist[0b000].abs() < 1e-9);
    assert!(dist[0b111].abs() < 1e-9);
}

#[test]
fn test_marginal_ignores_other_registers() {
    let mut store = AmplitudeStore::default();
    let a = store.allocate(2).unwrap();
    let b = store.allocate(2).unwrap();

    // Emaranha a com b; a marginal de b soma sobre a
    store.h(a.qubit(0)).unwrap();
    store.cnot(a.qubit(0), b.qubit(0)).unwrap();

    let dist_b = store.probabilities(&b);
    assert!((dist_b[0b00] - 0.5).abs() < 1e-12);
    assert!((dist_b[0b01] - 0.5).abs() < 1e-12);

    let dist_a = store.probabilities(&a);
    assert!((dist_a[0b00] - 0.5).abs() < 1e-12);
    assert!((dist_a[0b01] - 0.5).abs() < 1e-12);
}

#[test]
fn test_all_gates_are_unitary() {
    let gates: Vec<Box<dyn QuantumGate>> = vec![
        Box::new(Hadamard),
        Box::new(PauliX),
        Box::new(PauliY),
        Box::new(PauliZ),
        Box::new(SGate),
        Box::new(TGate),
        Box::new(RotationX::new(0.3)),
        Box::new(RotationY::new(1.1)),
        Box::new(RotationZ::new(2.9)),
        Box::new(Phase::new(0.77)),
    ];

    for gate in &gates {
        assert!(gate.is_unitary(), "{} não é unitária", gate.name());
    }
}

#[test]
fn test_gate_adjoint_roundtrip_on_superposition() {
    let mut store = AmplitudeStore::default();
    let reg = store.allocate(2).unwrap();

    store.h(reg.qubit(0)).unwrap();
    store.h(reg.qubit(1)).unwrap();

    let before: Vec<_> = store.amplitudes().to_vec();

    let gate = Phase::new(1.234);
    store
        .apply_controlled(&gate, reg.qubit(0), &[Control::positive(reg.qubit(1))])
        .unwrap();
    store
        .apply_controlled_adjoint(&gate, reg.qubit(0), &[Control::positive(reg.qubit(1))])
        .unwrap();

    for (a, b) in store.amplitudes().iter().zip(before.iter()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn test_renormalize_recovers_unit_norm() {
    let mut store = AmplitudeStore::default();
    let reg = store.allocate(3).unwrap();

    for k in 0..3 {
        store.h(reg.qubit(k)).unwrap();
    }
    store.renormalize().unwrap();
    assert!(store.check_norm().is_ok());
}

#[test]
fn test_measurement_statistics_follow_born_rule() {
    // Distribuição enviesada por Ry: p(1) = sin²(θ/2)
    let theta = 1.0f64;
    let expected = (theta / 2.0).sin().powi(2);

    let mut ones = 0u32;
    let trials = 2000;
    let mut store = AmplitudeStore::with_seed(2024);
    let reg = store.allocate(1).unwrap();
    for _ in 0..trials {
        store.ry(theta, reg.qubit(0)).unwrap();
        if store.measure_register(&reg).unwrap() == 1 {
            ones += 1;
            store.x(reg.qubit(0)).unwrap();
        }
    }

    let freq = ones as f64 / trials as f64;
    assert!(
        (freq - expected).abs() < 0.05,
        "freq {freq} vs esperado {expected}"
    );
}
