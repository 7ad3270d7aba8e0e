use std::path::Path;
use taskboard_core::{AppConfig, TaskboardResult};
use taskboard_domain::{Board, Member, TaskQuery};
use taskboard_persistence::{initialize, BoardRepository, JsonFileStorage, SeedOutcome};

/// Everything a subcommand needs: the board repository over the data file,
/// the member edits are stamped with, and where new comments are broadcast.
pub struct CliContext {
    pub repo: BoardRepository<JsonFileStorage>,
    pub member: Member,
    pub server_addr: String,
}

impl CliContext {
    /// Opens the data file, seeding the demo board on first use.
    pub async fn load(file_path: &Path, config: &AppConfig) -> TaskboardResult<Self> {
        let storage = JsonFileStorage::new(file_path);
        if let SeedOutcome::Seeded(boards) = initialize(&storage).await? {
            tracing::info!(
                "Seeded {} with {} board(s)",
                file_path.display(),
                boards.len()
            );
        }

        let member = Member::from(&config.effective_member());
        Ok(Self {
            repo: BoardRepository::new(storage),
            member,
            server_addr: config.effective_server_addr().to_string(),
        })
    }

    pub async fn board(&self, id: &str) -> TaskboardResult<Board> {
        self.repo.get_by_id(id, &TaskQuery::default()).await
    }
}
