pub mod collection;
pub mod init;
pub mod repository;
pub mod store;
pub mod traits;

pub use collection::CollectionStore;
pub use init::{initialize, SeedOutcome};
pub use repository::{BoardRepository, RemoveOutcome, BOARDS_COLLECTION};
pub use store::*;
pub use traits::*;
