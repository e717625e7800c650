mod fee_updates;
pub use fee_updates::*;

mod governance;
pub use governance::*;

mod initialize;
pub use initialize::*;

mod ownership;
pub use ownership::*;

mod peer;
pub use peer::*;

mod update;
pub use update::*;
