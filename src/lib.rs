//! Bestiary: a local-first record keeper for tabletop creatures.
//!
//! Creatures (name, type, challenge rating, size, alignment, hit dice) live in
//! a single JSON file together with their attacks, defense profile and special
//! abilities. Creatures are created once and then enriched one sub-entity at a
//! time; every change rewrites the whole file.
//!
//! # Architecture
//!
//! - [`core::store`](crate::core::store): the single-file record store (load-all, find-by-name,
//!   upsert). Missing files are bootstrapped to an empty collection.
//! - [`plugins::creature`](crate::plugins::creature): the typed entity, its mutators, and the
//!   record round-trip.
//! - [`plugins::report`](crate::plugins::report): text tables built from the entity's enumeration
//!   contract.
//!
//! The store is not safe for concurrent writers in different processes: the
//! last whole-file write wins.
//!
//! # Examples
//!
//! ```bash
//! bestiary create Goblin --type Humanoid --challenge-rating 1/4 \
//!     --size Small --alignment "Chaotic Evil" --hit-dice 2d6
//! bestiary attack add Goblin --name Scimitar --bonus +2 --damage 1d6
//! bestiary show Goblin
//! bestiary list --format json
//! ```

mod cli;
pub mod core;
pub mod plugins;

use crate::cli::{Cli, Command};
use crate::core::{config, error, store::Store};
use crate::plugins::creature;
use clap::Parser;
use tracing::debug;

pub fn run() -> Result<(), error::BestiaryError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&creature::schema())?);
            Ok(())
        }
        Command::Creature(command) => {
            let project_root = std::env::current_dir()?;
            let project_config = config::load_config(&project_root)?;
            let env_override = std::env::var(config::DATA_FILE_ENV).ok();
            let store_config = config::resolve_store_config(
                &project_root,
                &project_config,
                cli.data_file.as_deref(),
                env_override.as_deref(),
            );
            debug!(data_file = %store_config.data_file.display(), "resolved creature store");

            let store = Store::new(store_config);
            creature::run_creature_cli(&store, command, cli.format)
        }
    }
}
