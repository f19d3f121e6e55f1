/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which the
/// application core reaches the file system and the terminal.
pub mod outbound;
