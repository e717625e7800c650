mod inbound;
pub use inbound::*;

mod outbound;
pub use outbound::*;
