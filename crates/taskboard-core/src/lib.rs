pub mod config;
pub mod error;
pub mod id;
pub mod result;

pub use config::{AppConfig, MemberConfig};
pub use error::TaskboardError;
pub use id::{make_id, now_millis, Timestamp};
pub use result::TaskboardResult;
