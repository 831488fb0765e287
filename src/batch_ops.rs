#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::machine::Enigma;

/// Encrypts a batch of independent messages in parallel, one machine per
/// message. Each machine's rotor state advances as usual; characters within
/// a single message stay strictly sequential.
#[cfg(feature = "batch-ops")]
pub fn encrypt_batch(batch: &mut [(Enigma, &str)]) -> Vec<String> {
    batch
        .par_iter_mut()
        .map(|(machine, text)| machine.encrypt(text))
        .collect()
}

/// Decrypts a batch of independent messages in parallel. Each machine must
/// be at the position its ciphertext was produced from.
#[cfg(feature = "batch-ops")]
pub fn decrypt_batch(batch: &mut [(Enigma, &str)]) -> Vec<String> {
    batch
        .par_iter_mut()
        .map(|(machine, text)| machine.decrypt(text))
        .collect()
}
