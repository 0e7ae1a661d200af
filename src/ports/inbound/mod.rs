/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod resource_summary_port;

pub use resource_summary_port::ResourceSummaryPort;
