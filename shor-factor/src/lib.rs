//! # 🔓 shor-factor — Pipeline de Fatoração
//!
//! Uma tentativa do algoritmo de Shor de ponta a ponta: estimativa
//! quântica de frequência (`shor-core` + `shor-arith` + `shor-fourier`),
//! busca de convergentes por frações contínuas e pós-processamento
//! clássico que converte o período em fator.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   factor_once                    │
//! ├──────────────────────────┬───────────────────────┤
//! │    find_approx_period    │      find_factor      │
//! │  (circuito: H → modexp   │  (período → gcd →     │
//! │   → iQFT → medição)      │   FactorResult)       │
//! ├──────────────────────────┼───────────────────────┤
//! │  shor-core / shor-arith  │ find_period_candidate │
//! │     / shor-fourier       │  (frações contínuas)  │
//! └──────────────────────────┴───────────────────────┘
//! ```
//!
//! O laço de palpites, a primalidade de N e o caso N par ficam com o
//! chamador: o contrato aqui é um tiro por palpite, com os desfechos
//! rotineiros (`PeriodOdd`, `TrivialGcd`, `NotFound`) modelados como
//! variantes, nunca como erros.
//!
//! ## Exemplo
//!
//! ```ignore
//! use shor_core::SimulatorConfig;
//! use shor_factor::{factor_once, FactorResult};
//!
//! match factor_once(SimulatorConfig::default(), 15, 7)? {
//!     FactorResult::Factor(f) => println!("fator: {f}"),
//!     outcome => println!("tentar outro palpite: {outcome}"),
//! }
//! ```

pub mod error;
pub mod fraction;
pub mod outcome;
pub mod pipeline;

pub use error::{PipelineError, PipelineResult};
pub use fraction::find_period_candidate;
pub use outcome::FactorResult;
pub use pipeline::{factor_once, find_approx_period, find_factor, find_period};
