//! Creature entities and the commands that create and enrich them.
//!
//! A [`Creature`] is the typed view over a [`CreatureRecord`]. Mutators only
//! touch the in-memory entity; [`Creature::save`] is the single point where
//! anything reaches the store.

use crate::core::error::BestiaryError;
use crate::core::record::{AttackRecord, CreatureRecord, DefenseRecord, SpecialRecord};
use crate::core::store::{SaveOutcome, Store};
use crate::core::envelope::Envelope;
use crate::core::tui::{self, ItemStatus};
use crate::plugins::report;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Row-oriented view used by report renderers.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    pub name: String,
    pub attack_bonus: String,
    pub damage: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defense {
    pub armor_class: String,
    pub hit_points: String,
    pub damage_resistance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Special {
    pub name: String,
    pub description: String,
}

impl Tabular for Attack {
    const HEADERS: &'static [&'static str] = &["Attack", "Attack bonus", "Damage"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.attack_bonus.clone(),
            self.damage.clone(),
        ]
    }
}

impl Tabular for Defense {
    const HEADERS: &'static [&'static str] = &["Armor class", "Hit points", "Damage resistance"];

    fn row(&self) -> Vec<String> {
        vec![
            self.armor_class.clone(),
            self.hit_points.clone(),
            self.damage_resistance.clone(),
        ]
    }
}

impl Tabular for Special {
    const HEADERS: &'static [&'static str] = &["Special", "Description"];

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    creature_type: String,
    challenge_rating: String,
    size: String,
    alignment: String,
    hit_dice: String,
    attacks: Vec<Attack>,
    defense: Option<Defense>,
    specials: Vec<Special>,
}

impl Tabular for Creature {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Type",
        "Challenge rating",
        "Size",
        "Alignment",
        "Hit dice",
    ];

    fn row(&self) -> Vec<String> {
        self.base_attributes()
            .iter()
            .map(|(_, value)| value.to_string())
            .collect()
    }
}

impl Creature {
    pub fn new(
        name: impl Into<String>,
        creature_type: impl Into<String>,
        challenge_rating: impl Into<String>,
        size: impl Into<String>,
        alignment: impl Into<String>,
        hit_dice: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            creature_type: creature_type.into(),
            challenge_rating: challenge_rating.into(),
            size: size.into(),
            alignment: alignment.into(),
            hit_dice: hit_dice.into(),
            attacks: Vec::new(),
            defense: None,
            specials: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Labelled base attributes in declaration order.
    pub fn base_attributes(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("type", self.creature_type.as_str()),
            ("challenge_rating", self.challenge_rating.as_str()),
            ("size", self.size.as_str()),
            ("alignment", self.alignment.as_str()),
            ("hit_dice", self.hit_dice.as_str()),
        ]
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn defense(&self) -> Option<&Defense> {
        self.defense.as_ref()
    }

    pub fn specials(&self) -> &[Special] {
        &self.specials
    }

    pub fn add_attack(
        &mut self,
        name: impl Into<String>,
        attack_bonus: impl Into<String>,
        damage: impl Into<String>,
    ) {
        self.attacks.push(Attack {
            name: name.into(),
            attack_bonus: attack_bonus.into(),
            damage: damage.into(),
        });
    }

    /// Replaces any previous defense.
    pub fn set_defense(
        &mut self,
        armor_class: impl Into<String>,
        hit_points: impl Into<String>,
        damage_resistance: impl Into<String>,
    ) {
        self.defense = Some(Defense {
            armor_class: armor_class.into(),
            hit_points: hit_points.into(),
            damage_resistance: damage_resistance.into(),
        });
    }

    pub fn add_special(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.specials.push(Special {
            name: name.into(),
            description: description.into(),
        });
    }

    pub fn to_record(&self) -> CreatureRecord {
        CreatureRecord {
            name: Some(self.name.clone()),
            creature_type: Some(self.creature_type.clone()),
            challenge_rating: Some(self.challenge_rating.clone()),
            size: Some(self.size.clone()),
            alignment: Some(self.alignment.clone()),
            hit_dice: Some(self.hit_dice.clone()),
            attacks: self
                .attacks
                .iter()
                .map(|a| AttackRecord {
                    name: a.name.clone(),
                    attack_bonus: a.attack_bonus.clone(),
                    damage: a.damage.clone(),
                })
                .collect(),
            defense: self.defense.as_ref().map(|d| DefenseRecord {
                armor_class: d.armor_class.clone(),
                hit_points: d.hit_points.clone(),
                damage_resistance: d.damage_resistance.clone(),
            }),
            specials: self
                .specials
                .iter()
                .map(|s| SpecialRecord {
                    name: s.name.clone(),
                    description: s.description.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild an entity from its stored record.
    ///
    /// Every base field is required; nested collections missing from older
    /// records come back empty.
    pub fn populate_from_record(record: CreatureRecord) -> Result<Self, BestiaryError> {
        let label = record.name.clone().unwrap_or_else(|| "<unnamed>".to_string());
        let require = |value: Option<String>, field: &str| {
            value.ok_or_else(|| {
                BestiaryError::MalformedRecord(format!(
                    "creature '{}' is missing required field '{}'",
                    label, field
                ))
            })
        };

        Ok(Self {
            name: require(record.name, "name")?,
            creature_type: require(record.creature_type, "type")?,
            challenge_rating: require(record.challenge_rating, "challenge_rating")?,
            size: require(record.size, "size")?,
            alignment: require(record.alignment, "alignment")?,
            hit_dice: require(record.hit_dice, "hit_dice")?,
            attacks: record
                .attacks
                .into_iter()
                .map(|a| Attack {
                    name: a.name,
                    attack_bonus: a.attack_bonus,
                    damage: a.damage,
                })
                .collect(),
            defense: record.defense.map(|d| Defense {
                armor_class: d.armor_class,
                hit_points: d.hit_points,
                damage_resistance: d.damage_resistance,
            }),
            specials: record
                .specials
                .into_iter()
                .map(|s| Special {
                    name: s.name,
                    description: s.description,
                })
                .collect(),
        })
    }

    /// Persist the whole entity, replacing any stored creature with this name.
    pub fn save(&self, store: &Store) -> Result<SaveOutcome, BestiaryError> {
        store.save(self.to_record())
    }

    /// Persist a creature that must not exist yet. The existence check and
    /// the write happen under the store's write lock.
    pub fn register(&self, store: &Store) -> Result<SaveOutcome, BestiaryError> {
        if self.name.trim().is_empty() {
            return Err(BestiaryError::ValidationError(
                "creature name cannot be empty".to_string(),
            ));
        }
        store.insert_new(self.to_record())
    }

    pub fn find_by_name(store: &Store, name: &str) -> Result<Option<Self>, BestiaryError> {
        store
            .find_by_name(name)?
            .map(Self::populate_from_record)
            .transpose()
    }

    /// Every stored creature, in stored order.
    pub fn load_all(store: &Store) -> Result<Vec<Self>, BestiaryError> {
        store
            .load_all()?
            .into_iter()
            .map(Self::populate_from_record)
            .collect()
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ===== Command surface =====

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum AttackCommand {
    /// Append an attack to a creature.
    Add {
        /// Creature to enrich.
        #[clap(value_name = "CREATURE")]
        creature: String,
        #[clap(long)]
        name: String,
        #[clap(long, allow_hyphen_values = true)]
        bonus: String,
        #[clap(long, allow_hyphen_values = true)]
        damage: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DefenseCommand {
    /// Define (or replace) a creature's defense.
    Set {
        /// Creature to enrich.
        #[clap(value_name = "CREATURE")]
        creature: String,
        #[clap(long, allow_hyphen_values = true)]
        armor_class: String,
        #[clap(long, allow_hyphen_values = true)]
        hit_points: String,
        #[clap(long, default_value = "", allow_hyphen_values = true)]
        damage_resistance: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SpecialCommand {
    /// Append a special ability to a creature.
    Add {
        /// Creature to enrich.
        #[clap(value_name = "CREATURE")]
        creature: String,
        #[clap(long)]
        name: String,
        #[clap(long)]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreatureCommand {
    /// Record a new creature.
    Create {
        /// Creature name (unique key).
        #[clap(value_name = "NAME")]
        name: String,
        #[clap(long = "type")]
        creature_type: String,
        #[clap(long, allow_hyphen_values = true)]
        challenge_rating: String,
        #[clap(long)]
        size: String,
        #[clap(long)]
        alignment: String,
        #[clap(long, allow_hyphen_values = true)]
        hit_dice: String,
    },
    /// List every recorded creature.
    List,
    /// Show a creature's attacks, defense and special abilities.
    Show {
        #[clap(value_name = "NAME")]
        name: String,
    },
    /// Manage a creature's attacks.
    #[clap(subcommand)]
    Attack(AttackCommand),
    /// Manage a creature's defense.
    #[clap(subcommand)]
    Defense(DefenseCommand),
    /// Manage a creature's special abilities.
    #[clap(subcommand)]
    Special(SpecialCommand),
}

fn require_creature(store: &Store, name: &str) -> Result<Creature, BestiaryError> {
    Creature::find_by_name(store, name)?.ok_or_else(|| {
        BestiaryError::NotFound(format!("creature '{}' has not been recorded yet", name))
    })
}

#[derive(Debug, Serialize)]
struct MutationPayload {
    store: String,
    outcome: &'static str,
    index: usize,
    creature: CreatureRecord,
}

#[derive(Debug, Serialize)]
struct ListPayload {
    store: String,
    items: Vec<CreatureRecord>,
}

#[derive(Debug, Serialize)]
struct ShowPayload {
    store: String,
    creature: CreatureRecord,
}

fn store_label(store: &Store) -> String {
    store.path().to_string_lossy().into_owned()
}

fn mutation_result(
    cmd: &'static str,
    store: &Store,
    creature: &Creature,
    outcome: SaveOutcome,
) -> Result<String, BestiaryError> {
    Envelope::ok(
        cmd,
        MutationPayload {
            store: store_label(store),
            outcome: outcome.as_str(),
            index: outcome.index(),
            creature: creature.to_record(),
        },
    )
    .to_json()
}

/// Execute one creature command against `store` and print its result.
pub fn run_creature_cli(
    store: &Store,
    command: CreatureCommand,
    format: OutputFormat,
) -> Result<(), BestiaryError> {
    let (out, text) = match command {
        CreatureCommand::Create {
            name,
            creature_type,
            challenge_rating,
            size,
            alignment,
            hit_dice,
        } => {
            let creature = Creature::new(
                name,
                creature_type,
                challenge_rating,
                size,
                alignment,
                hit_dice,
            );
            let outcome = creature.register(store)?;
            (
                mutation_result("creature.create", store, &creature, outcome)?,
                TextOutput::Status(
                    format!("Creature {} recorded.", creature),
                    ItemStatus::Created,
                ),
            )
        }
        CreatureCommand::List => {
            let creatures = Creature::load_all(store)?;
            let items: Vec<CreatureRecord> = creatures.iter().map(Creature::to_record).collect();
            (
                Envelope::ok(
                    "creature.list",
                    ListPayload {
                        store: store_label(store),
                        items,
                    },
                )
                .to_json()?,
                TextOutput::Report(vec![report::creature_table(&creatures)]),
            )
        }
        CreatureCommand::Show { name } => {
            let creature = require_creature(store, &name)?;
            let mut sections = vec![report::creature_table(std::slice::from_ref(&creature))];
            sections.extend(report::detail_tables(&creature));
            (
                Envelope::ok(
                    "creature.show",
                    ShowPayload {
                        store: store_label(store),
                        creature: creature.to_record(),
                    },
                )
                .to_json()?,
                TextOutput::Report(sections),
            )
        }
        CreatureCommand::Attack(AttackCommand::Add {
            creature,
            name,
            bonus,
            damage,
        }) => {
            let mut target = require_creature(store, &creature)?;
            target.add_attack(name.as_str(), bonus, damage);
            let outcome = target.save(store)?;
            (
                mutation_result("creature.attack.add", store, &target, outcome)?,
                TextOutput::Status(
                    format!("Attack {} added to {}.", name, target),
                    ItemStatus::Updated,
                ),
            )
        }
        CreatureCommand::Defense(DefenseCommand::Set {
            creature,
            armor_class,
            hit_points,
            damage_resistance,
        }) => {
            let mut target = require_creature(store, &creature)?;
            target.set_defense(armor_class, hit_points, damage_resistance);
            let outcome = target.save(store)?;
            (
                mutation_result("creature.defense.set", store, &target, outcome)?,
                TextOutput::Status(
                    format!("Defense of {} updated.", target),
                    ItemStatus::Updated,
                ),
            )
        }
        CreatureCommand::Special(SpecialCommand::Add {
            creature,
            name,
            description,
        }) => {
            let mut target = require_creature(store, &creature)?;
            target.add_special(name.as_str(), description);
            let outcome = target.save(store)?;
            (
                mutation_result("creature.special.add", store, &target, outcome)?,
                TextOutput::Status(
                    format!("Special {} added to {}.", name, target),
                    ItemStatus::Updated,
                ),
            )
        }
    };

    match format {
        OutputFormat::Json => println!("{}", out),
        OutputFormat::Text => match text {
            TextOutput::Status(message, status) => tui::print_status_line(&message, status),
            TextOutput::Report(sections) => {
                for section in sections {
                    match section {
                        report::Section::Table { title, body } => {
                            tui::print_section(&title);
                            println!("{}", body);
                        }
                        report::Section::Empty { title, notice } => {
                            tui::print_section(&title);
                            tui::print_status_line(&notice, ItemStatus::Warning);
                        }
                    }
                }
            }
        },
    }
    Ok(())
}

enum TextOutput {
    Status(String, ItemStatus),
    Report(Vec<report::Section>),
}

pub fn schema() -> JsonValue {
    serde_json::json!({
        "name": "creature",
        "version": "0.1.0",
        "description": "Creature records with attacks, defense and special abilities",
        "commands": [
            { "name": "create", "parameters": ["name", "type", "challenge_rating", "size", "alignment", "hit_dice"] },
            { "name": "list" },
            { "name": "show", "parameters": ["name"] },
            { "name": "attack add", "parameters": ["creature", "name", "bonus", "damage"] },
            { "name": "defense set", "parameters": ["creature", "armor_class", "hit_points", "damage_resistance"] },
            { "name": "special add", "parameters": ["creature", "name", "description"] }
        ],
        "storage": ["creatures.json"]
    })
}
