mod custodian;
pub use custodian::*;

mod peer;
pub use peer::*;

mod staged;
pub use staged::*;
