//! Text report shaping for creatures.
//!
//! Works only through the enumeration contract exposed by the model
//! ([`Tabular`] rows plus the nested collection accessors).

use crate::core::output::{self, DESCRIPTION_WRAP};
use crate::core::tui;
use crate::plugins::creature::{Attack, Creature, Defense, Special, Tabular};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Table { title: String, body: String },
    Empty { title: String, notice: String },
}

impl Section {
    pub fn title(&self) -> &str {
        match self {
            Section::Table { title, .. } | Section::Empty { title, .. } => title,
        }
    }
}

fn section<T: Tabular>(
    title: &str,
    items: &[T],
    notice: &str,
    shape: fn(Vec<String>) -> Vec<String>,
) -> Section {
    if items.is_empty() {
        return Section::Empty {
            title: title.to_string(),
            notice: notice.to_string(),
        };
    }
    let rows: Vec<Vec<String>> = items.iter().map(|item| shape(item.row())).collect();
    Section::Table {
        title: title.to_string(),
        body: tui::render_table(T::HEADERS, &rows),
    }
}

fn shape_summary(mut row: Vec<String>) -> Vec<String> {
    // name, type, challenge rating, size, alignment, hit dice
    row[0] = output::title_case(&row[0]);
    row[3] = row[3].to_uppercase();
    row[4] = row[4].to_uppercase();
    row
}

fn shape_attack(mut row: Vec<String>) -> Vec<String> {
    row[0] = output::title_case(&row[0]);
    row
}

fn shape_special(mut row: Vec<String>) -> Vec<String> {
    row[0] = output::title_case(&row[0]);
    let description = output::capitalize(&row[1]);
    row[1] = output::wrap_chars(&description, DESCRIPTION_WRAP).join("\n");
    row
}

/// One summary row per creature.
pub fn creature_table(creatures: &[Creature]) -> Section {
    section(
        "Creatures",
        creatures,
        "No creatures recorded yet.",
        shape_summary,
    )
}

/// Attack, defense and special-ability sections for one creature.
pub fn detail_tables(creature: &Creature) -> Vec<Section> {
    let defense: Vec<Defense> = creature.defense().cloned().into_iter().collect();
    vec![
        section::<Attack>(
            "Attacks",
            creature.attacks(),
            "No attacks defined yet.",
            shape_attack,
        ),
        section::<Defense>(
            "Defense",
            &defense,
            "No defense defined yet.",
            |row| row,
        ),
        section::<Special>(
            "Special abilities",
            creature.specials(),
            "No special abilities defined yet.",
            shape_special,
        ),
    ]
}
