//! # Measurement Unit — Medição com Colapso
//!
//! Única operação não-determinística do sistema: amostra um resultado
//! clássico pela regra de Born, zera as amplitudes inconsistentes e
//! renormaliza as sobreviventes. O gerador é semeado pela configuração;
//! execuções com a mesma seed são bit-reprodutíveis.

use num_complex::Complex64;
use rand::Rng;

use crate::error::{CoreError, CoreResult};
use crate::register::QuantumRegister;
use crate::store::AmplitudeStore;

impl AmplitudeStore {
    /// Mede o registrador como inteiro little-endian, colapsando o estado
    pub fn measure_register(&mut self, register: &QuantumRegister) -> CoreResult<u64> {
        let dist = self.probabilities(register);

        let draw: f64 = self.rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;
        let mut outcome = None;
        for (value, &p) in dist.iter().enumerate() {
            cumulative += p;
            if draw < cumulative {
                outcome = Some(value);
                break;
            }
        }
        // Borda de ponto flutuante: cai no último resultado com massa
        let outcome = match outcome {
            Some(v) => v,
            None => dist
                .iter()
                .rposition(|&p| p > 0.0)
                .ok_or(CoreError::DegenerateMeasurement(0.0))?,
        };

        self.collapse(register, outcome as u64, dist[outcome])?;
        Ok(outcome as u64)
    }

    /// Mede um único qubit (0 ou 1), colapsando o estado
    pub fn measure_qubit(&mut self, qubit: usize) -> CoreResult<u8> {
        self.check_qubit(qubit)?;
        let reg = QuantumRegister::new(vec![qubit]);
        Ok(self.measure_register(&reg)? as u8)
    }

    /// Mede e, se |1⟩, aplica X: força o qubit de volta a |0⟩
    ///
    /// Usado para limpar ancillas antes da liberação.
    pub fn reset_qubit(&mut self, qubit: usize) -> CoreResult<()> {
        if self.measure_qubit(qubit)? == 1 {
            self.x(qubit)?;
        }
        Ok(())
    }

    /// Reseta todos os qubits do registrador para |0⟩
    pub fn reset_register(&mut self, register: &QuantumRegister) -> CoreResult<()> {
        for &q in register.qubits() {
            self.reset_qubit(q)?;
        }
        Ok(())
    }

    /// Zera amplitudes inconsistentes com o resultado e renormaliza
    fn collapse(
        &mut self,
        register: &QuantumRegister,
        outcome: u64,
        mass: f64,
    ) -> CoreResult<()> {
        if mass <= 0.0 {
            return Err(CoreError::DegenerateMeasurement(mass));
        }
        let inv = 1.0 / mass.sqrt();

        let zero = Complex64::new(0.0, 0.0);
        let amps = self.amplitudes_mut();
        for (i, amp) in amps.iter_mut().enumerate() {
            if register.value_of(i) == outcome {
                *amp *= inv;
            } else {
                *amp = zero;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;

    #[test]
    fn test_measure_basis_state_is_certain() {
        let mut store = AmplitudeStore::default();
        let reg = store.allocate(3).unwrap();

        store.x(reg.qubit(0)).unwrap();
        store.x(reg.qubit(2)).unwrap();

        assert_eq!(store.measure_register(&reg).unwrap(), 0b101);
        // Medição repetida é idempotente
        assert_eq!(store.measure_register(&reg).unwrap(), 0b101);
    }

    #[test]
    fn test_measurement_collapses_superposition() {
        let mut store = AmplitudeStore::with_seed(7);
        let reg = store.allocate(1).unwrap();

        store.h(reg.qubit(0)).unwrap();
        let first = store.measure_register(&reg).unwrap();

        // Após o colapso o estado é de base: re-medição concorda
        assert_eq!(store.measure_register(&reg).unwrap(), first);
        assert!(store.check_norm().is_ok());
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let run = |seed: u64| -> Vec<u64> {
            let mut store = AmplitudeStore::new(SimulatorConfig::with_seed(seed));
            let reg = store.allocate(3).unwrap();
            for k in 0..3 {
                store.h(reg.qubit(k)).unwrap();
            }
            let mut outcomes = vec![store.measure_register(&reg).unwrap()];
            store.reset_register(&reg).unwrap();
            for k in 0..3 {
                store.h(reg.qubit(k)).unwrap();
            }
            outcomes.push(store.measure_register(&reg).unwrap());
            outcomes
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_reset_enables_clean_release() {
        let mut store = AmplitudeStore::with_seed(3);
        let reg = store.allocate(2).unwrap();

        store.h(reg.qubit(0)).unwrap();
        store.cnot(reg.qubit(0), reg.qubit(1)).unwrap();

        store.reset_register(&reg).unwrap();
        store.release(&reg).unwrap();
        assert_eq!(store.num_qubits(), 0);
    }

    #[test]
    fn test_dirty_release_rejected() {
        let mut store = AmplitudeStore::default();
        let reg = store.allocate(1).unwrap();

        store.x(reg.qubit(0)).unwrap();
        let err = store.release(&reg).unwrap_err();
        assert!(matches!(err, CoreError::DirtyRelease(_)));
    }
}
