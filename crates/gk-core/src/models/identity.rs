/// External user identifier assigned by the chat transport.
///
/// Opaque to this system: compared for equality, never parsed or reassigned.
pub type Identity = i64;
