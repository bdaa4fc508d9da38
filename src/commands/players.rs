//! Players command implementation

use serde::Serialize;

use crate::{
    cli::types::PlayerId, core::Config, directory::EntityDirectory, shots::ShotService, Result,
};

#[derive(Debug, Serialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
}

/// Handle the players command
pub async fn handle_players(search: Option<String>, limit: usize, as_json: bool) -> Result<()> {
    let config = Config::from_env()?;
    let service = ShotService::from_config(&config)?;
    let directory = service.directory();

    directory.load().await;
    if directory.is_empty() {
        eprintln!("Player directory is empty (stats.nba.com unreachable?)");
        return Ok(());
    }

    let entries = player_entries(directory, search.as_deref(), limit);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.id, entry.name);
        }
        eprintln!(
            "{} of {} players",
            entries.len(),
            directory.player_count()
        );
    }

    Ok(())
}

/// Matches for `search`, or the first `limit` names in the directory.
pub fn player_entries(
    directory: &EntityDirectory,
    search: Option<&str>,
    limit: usize,
) -> Vec<PlayerEntry> {
    match search {
        Some(query) => directory
            .search(query, limit)
            .into_iter()
            .map(|(name, id)| PlayerEntry { id, name })
            .collect(),
        None => directory
            .player_names()
            .into_iter()
            .take(limit)
            .filter_map(|name| {
                let id = directory.player_id(&name)?;
                Some(PlayerEntry { id, name })
            })
            .collect(),
    }
}
