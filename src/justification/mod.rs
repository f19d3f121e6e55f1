/// Justification tracking - Pure business logic and domain models
///
/// This layer contains the manifest model, the two key sets the tool
/// synchronizes, and the set operations between them. No I/O and no
/// terminal formatting happens here.
pub mod domain;
pub mod services;
