pub mod error;
pub mod platform;
pub mod seed;
pub mod show;
pub mod status;

pub use error::ParseError;
pub use platform::Platform;
pub use seed::default_shows;
pub use show::{NewShow, ShowId, ShowRecord};
pub use status::WatchStatus;
