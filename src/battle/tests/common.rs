use crate::battle::state::{BattleCombatant, BattleSession, Side};
use crate::catalog::Catalog;
use crate::crafture::{Crafture, CraftureStats};
use schema::{CraftureType, MoveData, MoveId, StatusInfliction, UtilityEffect};

pub fn catalog() -> &'static Catalog {
    match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => panic!("Failed to load the built-in catalog: {}", err),
    }
}

/// A builder for creating test creatures with common defaults.
///
/// Hunger defaults to 100 so the player's attacks are not weakened unless a
/// test asks for it.
///
/// # Example
/// ```ignore
/// let crafture = TestCraftureBuilder::new("cubelet", 10)
///     .with_stats(75, 40, 20, 30)
///     .with_hp(20)
///     .build();
/// ```
pub struct TestCraftureBuilder {
    species: &'static str,
    level: u32,
    stats: Option<CraftureStats>,
    current_hp: Option<u32>,
    hunger: u8,
}

impl TestCraftureBuilder {
    pub fn new(species: &'static str, level: u32) -> Self {
        Self {
            species,
            level,
            stats: None,
            current_hp: None,
            hunger: 100,
        }
    }

    /// Overrides the level-derived stats.
    pub fn with_stats(mut self, max_hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        self.stats = Some(CraftureStats {
            max_hp,
            attack,
            defense,
            speed,
        });
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_hunger(mut self, hunger: u8) -> Self {
        self.hunger = hunger;
        self
    }

    pub fn build(self) -> Crafture {
        let catalog = catalog();
        let species = match catalog.species(self.species) {
            Ok(data) => data,
            Err(err) => panic!("Failed to load species data for {}: {}", self.species, err),
        };
        let mut crafture = match Crafture::new(format!("test-{}", self.species), species, self.level, catalog) {
            Ok(crafture) => crafture,
            Err(err) => panic!("Failed to create {}: {}", self.species, err),
        };

        if let Some(stats) = self.stats {
            crafture.set_stats(stats);
        }
        crafture.set_hunger(self.hunger);
        match self.current_hp {
            Some(hp) => crafture.set_hp(hp),
            None => crafture.heal_fully(),
        }
        crafture
    }
}

fn combatant(crafture: Crafture) -> BattleCombatant {
    let catalog = catalog();
    let species = catalog
        .species(crafture.species_id.as_str())
        .expect("test species must exist");
    let moves = crafture.known_moves(catalog).expect("test move pool must exist");
    BattleCombatant::new(crafture, species.crafture_type, species.name.clone(), moves)
}

/// A session with the player to move and an empty log.
pub fn create_test_session(player: Crafture, opponent: Crafture) -> BattleSession {
    BattleSession::new(combatant(player), combatant(opponent), Side::Player)
}

/// A damaging move with no secondary effect.
pub fn test_move(move_type: CraftureType, power: u32, accuracy: u32) -> MoveData {
    MoveData {
        id: MoveId::new(format!("test-{}-{}", move_type, power)),
        name: "Test Strike".to_string(),
        move_type,
        power,
        accuracy,
        description: String::new(),
        icon: "✨".to_string(),
        status: None,
        utility: None,
    }
}

pub fn test_status_move(move_type: CraftureType, infliction: StatusInfliction) -> MoveData {
    MoveData {
        name: "Test Hex".to_string(),
        status: Some(infliction),
        ..test_move(move_type, 40, 100)
    }
}

pub fn test_utility_move(utility: Option<UtilityEffect>) -> MoveData {
    MoveData {
        name: "Test Trick".to_string(),
        utility,
        ..test_move(CraftureType::Cube, 0, 100)
    }
}

pub fn catalog_move(id: &str) -> MoveData {
    catalog().move_data(id).expect("catalog move must exist").clone()
}
