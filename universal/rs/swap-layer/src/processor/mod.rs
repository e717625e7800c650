mod admin;
pub use admin::*;

mod close_staged_outbound;
pub use close_staged_outbound::*;

mod complete;
pub use complete::*;

mod initiate;
pub use initiate::*;

mod query;
pub use query::*;

mod release_inbound;
pub use release_inbound::*;

mod stage_outbound;
pub use stage_outbound::*;
