mod address;
pub use address::*;

mod gas;
pub use gas::*;

mod output;
pub use output::*;

mod percentage;
pub use percentage::*;

mod redeem_mode;
pub use redeem_mode::*;

mod swap_type;
pub use swap_type::*;

mod uint;
pub use uint::*;
