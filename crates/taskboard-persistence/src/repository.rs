use crate::collection::CollectionStore;
use crate::traits::KeyValueStorage;
use serde::Serialize;
use taskboard_core::TaskboardResult;
use taskboard_domain::{empty_board, Board, BoardId, BoardQuery, TaskQuery};

/// Storage key holding the board collection.
pub const BOARDS_COLLECTION: &str = "boardDB";

/// Result of removing a board through [`BoardRepository::remove_with_fallback`].
#[derive(Debug, Clone, Serialize)]
pub struct RemoveOutcome {
    pub removed: BoardId,
    /// Board the view should switch to.
    pub next_board_id: BoardId,
    /// Set when the removal emptied the collection and a default board was
    /// created to take its place.
    pub created_default: bool,
}

/// Typed board access over an explicit storage handle.
pub struct BoardRepository<S> {
    store: CollectionStore<S>,
}

impl<S: KeyValueStorage> BoardRepository<S> {
    pub fn new(storage: S) -> Self {
        Self {
            store: CollectionStore::new(storage),
        }
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    /// All boards passing `filter`, in insertion order.
    pub async fn query(&self, filter: &BoardQuery) -> TaskboardResult<Vec<Board>> {
        let boards: Vec<Board> = self.store.list(BOARDS_COLLECTION).await?;
        Ok(filter.apply(boards))
    }

    /// One board, with its groups and tasks narrowed by `filter`.
    pub async fn get_by_id(&self, id: &str, filter: &TaskQuery) -> TaskboardResult<Board> {
        let board: Board = self.store.get(BOARDS_COLLECTION, id).await?;
        Ok(filter.narrow(board))
    }

    /// Updates when the board has an id, creates otherwise. Returns the
    /// stored document, including any newly assigned id.
    pub async fn save(&self, board: Board) -> TaskboardResult<Board> {
        if board.id.is_some() {
            self.store.put(BOARDS_COLLECTION, board).await
        } else {
            self.store.post(BOARDS_COLLECTION, board).await
        }
    }

    pub async fn remove(&self, id: &str) -> TaskboardResult<()> {
        self.store.remove::<Board>(BOARDS_COLLECTION, id).await
    }

    /// Removes `id` and picks the board to show next: the first remaining
    /// board, or a freshly created default board if none remain.
    pub async fn remove_with_fallback(&self, id: &str) -> TaskboardResult<RemoveOutcome> {
        self.remove(id).await?;
        let remaining = self.query(&BoardQuery::default()).await?;

        let (next, created_default) = match remaining.into_iter().next() {
            Some(board) => (board, false),
            None => (self.save(empty_board()).await?, true),
        };
        tracing::debug!(
            "Removed board {}, switching to {}",
            id,
            next.id_str()
        );
        Ok(RemoveOutcome {
            removed: id.to_string(),
            next_board_id: next.id_str().to_string(),
            created_default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::initialize;
    use crate::store::MemoryStorage;
    use taskboard_domain::{demo_board, operations};

    async fn seeded() -> BoardRepository<MemoryStorage> {
        let storage = MemoryStorage::new();
        initialize(&storage).await.unwrap();
        BoardRepository::new(storage)
    }

    #[tokio::test]
    async fn test_save_existing_round_trips() {
        let repo = seeded().await;
        let board = operations::toggle_star(&demo_board());

        let saved = repo.save(board.clone()).await.unwrap();
        assert_eq!(saved.id.as_deref(), Some("b101"));

        let fetched = repo.get_by_id("b101", &TaskQuery::default()).await.unwrap();
        assert_eq!(fetched, board);
        assert_eq!(repo.query(&BoardQuery::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_new_assigns_stable_id() {
        let repo = seeded().await;
        let saved = repo.save(empty_board()).await.unwrap();
        let id = saved.id.clone().unwrap();
        assert_ne!(id, "b101");

        let first = repo.get_by_id(&id, &TaskQuery::default()).await.unwrap();
        let second = repo.get_by_id(&id, &TaskQuery::default()).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first, saved);
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let repo = seeded().await;
        let mut board = empty_board();
        board.id = Some("ghost".to_string());
        assert!(repo.save(board).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_remove_then_get_fails() {
        let repo = seeded().await;
        repo.remove("b101").await.unwrap();
        let err = repo
            .get_by_id("b101", &TaskQuery::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_query_filters_by_title() {
        let repo = seeded().await;
        let mut marketing = empty_board();
        marketing.title = "Marketing".to_string();
        repo.save(marketing).await.unwrap();

        let found = repo
            .query(&BoardQuery::new().with_title("robot"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Robot dev proj");
    }

    #[tokio::test]
    async fn test_get_by_id_narrows_groups() {
        let repo = seeded().await;
        let board = repo
            .get_by_id("b101", &TaskQuery::new().with_title("logo"))
            .await
            .unwrap();
        assert_eq!(board.groups.len(), 1);
        assert_eq!(board.groups[0].title, "Group 1");
        assert_eq!(board.groups[0].tasks.len(), 2);

        // Narrowing is a view; storage keeps every group.
        let full = repo.get_by_id("b101", &TaskQuery::default()).await.unwrap();
        assert_eq!(full.groups.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_with_fallback_picks_first_remaining() {
        let repo = seeded().await;
        let other = repo.save(empty_board()).await.unwrap();

        let outcome = repo.remove_with_fallback("b101").await.unwrap();
        assert_eq!(outcome.next_board_id, other.id.unwrap());
        assert!(!outcome.created_default);
    }

    #[tokio::test]
    async fn test_remove_last_board_creates_default() {
        let repo = seeded().await;
        let outcome = repo.remove_with_fallback("b101").await.unwrap();
        assert!(outcome.created_default);

        let boards = repo.query(&BoardQuery::default()).await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].title, "New Board");
        assert_eq!(boards[0].id.as_deref(), Some(outcome.next_board_id.as_str()));
    }

    #[tokio::test]
    async fn test_stores_are_isolated() {
        let a = seeded().await;
        let b = BoardRepository::new(MemoryStorage::new());
        a.save(empty_board()).await.unwrap();
        assert!(b.query(&BoardQuery::default()).await.unwrap().is_empty());
    }
}
