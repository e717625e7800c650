//! Chain-agnostic wire types for the swap layer: numeric codecs, the swap message attached to
//! every order, and the governance, fee update and query records.

pub mod messages;
pub mod types;
pub mod wire;

pub use messages::SwapMessageV1;
