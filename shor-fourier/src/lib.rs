//! # 🌊 shor-fourier — Transformada de Fourier Quântica
//!
//! A QFT e sua inversa sobre registradores little-endian de
//! `shor-core`. A inversa é o que extrai a informação de período do
//! registrador de expoente no circuito de fatoração: após a
//! exponenciação modular, os picos de probabilidade caem perto dos
//! múltiplos de `D/r`.
//!
//! ## Exemplo
//!
//! ```ignore
//! use shor_core::AmplitudeStore;
//! use shor_fourier::{inverse_qft, qft};
//!
//! let mut store = AmplitudeStore::default();
//! let reg = store.allocate(4)?;
//!
//! qft(&mut store, &reg)?;
//! inverse_qft(&mut store, &reg)?; // identidade, a menos de fase global
//! ```

pub mod error;
pub mod qft;

pub use error::{FourierError, FourierResult};
pub use qft::{inverse_qft, qft};
