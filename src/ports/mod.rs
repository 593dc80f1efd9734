/// Ports module - Interfaces for hexagonal architecture
///
/// Inbound ports are driven by the CLI; outbound ports are implemented by
/// the adapters the application core drives.
pub mod inbound;
pub mod outbound;
