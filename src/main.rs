//! Plays one auto-piloted wild encounter in the terminal.
//!
//! Usage: `crafture-battle [config.ron]`. Set `RUST_LOG=debug` to see the
//! engine's decisions.

use crafture_battle::config::DemoConfig;
use crafture_battle::{
    apply_battle_rewards, end_battle, evolution_options, player_attack, roll_wild_encounter,
    start_battle, throw_ball, trigger_opponent_turn, use_potion_in_battle, BattleResult,
    BattleSession, Catalog, Crafture, Inventory, Item, Side, SystemRng,
};
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> BattleResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let catalog = Catalog::builtin()?;
    let mut rng = match config.seed {
        Some(seed) => SystemRng::seeded(seed),
        None => SystemRng::new(),
    };
    let mut inventory = Inventory::default();

    let species = catalog.species(&config.player_species)?;
    let mut crafture = Crafture::new("starter", species, config.player_level, catalog)?;

    let encounter = roll_wild_encounter(catalog, &mut rng)?;
    let mut session = start_battle(
        catalog,
        crafture.clone(),
        encounter.species_id.as_str(),
        encounter.level,
    )?;

    let think_delay = Duration::from_millis(config.think_delay_ms);
    let mut printed = print_new_lines(&session, 0);
    while !session.is_over() {
        let outcome = match session.turn {
            Side::Player => {
                if session.player.hp() * 3 < session.player.max_hp() && inventory.has(Item::Potion, 1) {
                    use_potion_in_battle(&mut session, &mut inventory, Item::Potion)
                } else {
                    let move_index = strongest_move(&session);
                    player_attack(&mut session, move_index, &mut rng)
                }
            }
            Side::Opponent => {
                session.set_turn_lock(true);
                tokio::time::sleep(think_delay).await;
                session.set_turn_lock(false);
                trigger_opponent_turn(&mut session, &mut rng)
            }
        };
        if !outcome.is_resolved() {
            warn!(?outcome, "no action could be taken");
            break;
        }
        printed = print_new_lines(&session, printed);
    }

    let opponent_species = session.opponent.crafture.species_id.clone();
    let rewards = end_battle(session);
    let report = apply_battle_rewards(&mut crafture, &rewards, catalog)?;
    println!(
        "{} has {}/{} HP, hunger {}, level {}.",
        crafture.nickname,
        crafture.hp(),
        crafture.max_hp(),
        crafture.hunger(),
        crafture.level
    );
    if report.leveled_up() {
        println!("{} grew to level {}!", crafture.nickname, report.new_level);
    }

    if rewards.won {
        let target = catalog.species(opponent_species.as_str())?;
        match throw_ball(&mut inventory, config.ball, target, true, &mut rng) {
            Ok(outcome) if outcome.caught => println!("Gotcha! {} was caught!", target.name),
            Ok(_) => println!("Oh no! {} broke free!", target.name),
            Err(err) => println!("Could not throw: {}", err),
        }
    }

    for option in evolution_options(&crafture, catalog)? {
        match option.condition_label() {
            Some(label) => println!("{} can evolve into {} ({}).", crafture.nickname, option.target_name, label),
            None => println!("{} can evolve into {}.", crafture.nickname, option.target_name),
        }
    }
    Ok(())
}

/// Index of the player's highest-power move.
fn strongest_move(session: &BattleSession) -> usize {
    session
        .player
        .moves
        .iter()
        .enumerate()
        .max_by_key(|(_, m)| m.power)
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn print_new_lines(session: &BattleSession, already_printed: usize) -> usize {
    let lines = session.log_lines();
    for line in lines.iter().skip(already_printed) {
        println!("{}", line);
    }
    lines.len()
}
