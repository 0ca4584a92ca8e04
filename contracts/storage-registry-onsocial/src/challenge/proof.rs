use crate::*;

/// Decides whether a submitted proof demonstrates possession of the
/// challenged chunk.
pub trait ProofVerifier {
    fn verify(&self, challenge: &Challenge, proof: &[u8]) -> bool;
}

/// Placeholder scheme: any non-empty payload passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonEmptyProof;

impl ProofVerifier for NonEmptyProof {
    fn verify(&self, _challenge: &Challenge, proof: &[u8]) -> bool {
        !proof.is_empty()
    }
}

impl ProofScheme {
    pub(crate) fn verifier(self) -> Box<dyn ProofVerifier> {
        match self {
            ProofScheme::NonEmpty => Box::new(NonEmptyProof),
        }
    }
}
