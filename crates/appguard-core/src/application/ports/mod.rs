//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `appguard-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DocumentDecoder`: Payload decoding
//!   - `RoleCatalog`: Declared identifier lists and role resolution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `AdmissionService::admit` (called by the CLI and any webhook host)

pub mod output;

pub use output::{DocumentDecoder, RoleCatalog};
