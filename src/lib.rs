// src/lib.rs

pub mod alphabet;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod error;
pub mod machine;
pub mod reflector;
pub mod rotor;

// High-level API: most callers only ever need the builder and the machine
pub use builders::EnigmaBuilder;
pub use error::EnigmaError;
pub use machine::Enigma;

// Component types, public so machines can be assembled by hand from
// custom wirings
pub use reflector::Reflector;
pub use rotor::Rotor;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
