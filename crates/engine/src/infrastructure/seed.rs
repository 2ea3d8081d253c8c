//! Startup seeding of games.

use std::path::Path;

use anyhow::Context;
use maze_domain::{
    CharacterClass, CharacterDefinition, CharacterId, Game, GameDefinition, GameId, Location,
    LocationId, Movement,
};

use crate::infrastructure::ports::GameStore;

/// Read a JSON array of game definitions.
pub fn load_definitions(path: &Path) -> anyhow::Result<Vec<GameDefinition>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}

/// A small maze used when no seed file is configured.
///
/// Location 1 leads to 2 for anyone and to 3 for rogues only. Location 2 is a
/// dead end; 3 leads back to 1.
pub fn demo_definition() -> GameDefinition {
    let start = LocationId::new(1);
    let dead_end = LocationId::new(2);
    let hideout = LocationId::new(3);

    GameDefinition {
        id: GameId::new("g1"),
        locations: vec![
            Location::new(start)
                .with_movement(Movement::to(dead_end))
                .with_movement(Movement::to(hideout).requiring(CharacterClass::Rogue)),
            Location::new(dead_end),
            Location::new(hideout).with_movement(Movement::to(start)),
        ],
        characters: vec![
            CharacterDefinition {
                id: CharacterId::new(7),
                character_class: CharacterClass::Warrior,
                location: start,
            },
            CharacterDefinition {
                id: CharacterId::new(8),
                character_class: CharacterClass::Rogue,
                location: start,
            },
        ],
    }
}

/// Build every definition and save it. Fails on the first invalid layout.
pub async fn seed_store(
    store: &dyn GameStore,
    definitions: Vec<GameDefinition>,
) -> anyhow::Result<usize> {
    let mut seeded = 0;
    for definition in definitions {
        let game_id = definition.id.clone();
        let game = Game::from_definition(definition)
            .with_context(|| format!("invalid layout for game {game_id}"))?;
        store
            .save_game(game)
            .await
            .with_context(|| format!("failed to save game {game_id}"))?;
        tracing::info!(game_id = %game_id, "Seeded game");
        seeded += 1;
    }
    Ok(seeded)
}
