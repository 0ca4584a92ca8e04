pub mod types;
mod ledger;
mod proof;
mod views;

pub use proof::{NonEmptyProof, ProofVerifier};
pub use types::*;
