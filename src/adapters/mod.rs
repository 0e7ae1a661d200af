/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// chart rendering, values loading, formatting and output.
pub mod outbound;
