use crate::collection::CollectionStore;
use crate::repository::BOARDS_COLLECTION;
use crate::traits::KeyValueStorage;
use taskboard_core::TaskboardResult;
use taskboard_domain::{demo_board, Board};

/// What [`initialize`] found or did.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// The collection was missing and has been written with the demo board.
    Seeded(Vec<Board>),
    /// The collection already existed; nothing was written.
    AlreadyInitialized,
}

/// Seeds the board collection with the demo board if the collection has
/// never been written. Presence of the collection is the only marker, so an
/// emptied collection is left alone.
pub async fn initialize<S: KeyValueStorage>(storage: &S) -> TaskboardResult<SeedOutcome> {
    let store = CollectionStore::new(storage);
    if store.exists(BOARDS_COLLECTION).await? {
        return Ok(SeedOutcome::AlreadyInitialized);
    }
    let boards = vec![demo_board()];
    store.write_all(BOARDS_COLLECTION, &boards).await?;
    tracing::info!("Seeded {} with the demo board", BOARDS_COLLECTION);
    Ok(SeedOutcome::Seeded(boards))
}
