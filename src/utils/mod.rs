pub mod date;
pub mod mime;
pub mod platform;

pub use date::{now_iso, parse_iso};
pub use mime::guess_type;
pub use platform::{is_target_platform, Platform};
