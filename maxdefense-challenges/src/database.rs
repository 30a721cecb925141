use crate::armor::{ArmorItem, Catalog};
use anyhow::{anyhow, Context, Result};
use std::{fmt::Write as _, fs, path::Path};
use tracing::{info, warn};

pub const FIELD_SEPARATOR: char = '^';
pub const HEADER: &str = "description^gold^defense";

/// Loads every valid armor item from a `^` separated database file.
///
/// The first line is a header. A row with the wrong number of fields aborts the
/// load; rows with unparseable or invalid numbers are skipped.
pub fn load_armor_database<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot open armor database: {}", path.display()))?;
    let catalog = parse_armor_database(&contents)
        .with_context(|| format!("Failed to load armor database: {}", path.display()))?;
    info!(
        path = %path.display(),
        num_items = catalog.len(),
        "loaded armor database"
    );
    Ok(catalog)
}

pub fn parse_armor_database(contents: &str) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for (i, line) in contents.lines().enumerate() {
        let line_number = i + 1;
        // header row
        if line_number == 1 {
            continue;
        }
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(anyhow!(
                "Invalid field count at line {}; Want 3 but got {}. Line: {}",
                line_number,
                fields.len(),
                line
            ));
        }

        let cost = fields[1].trim().parse::<f64>();
        let defense = fields[2].trim().parse::<f64>();
        let item = match (cost, defense) {
            (Ok(cost), Ok(defense)) => ArmorItem::new(fields[0], cost, defense),
            _ => Err(anyhow!("Unparseable number in '{}'", line)),
        };
        match item {
            Ok(item) => catalog.push(item),
            Err(e) => warn!(line_number, "skipping armor row: {}", e),
        }
    }

    Ok(catalog)
}

/// Writes `catalog` in the format read by [`load_armor_database`].
pub fn save_armor_database<P: AsRef<Path>>(path: P, catalog: &[ArmorItem]) -> Result<()> {
    let path = path.as_ref();
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for armor in catalog {
        if armor.description().contains(FIELD_SEPARATOR) {
            return Err(anyhow!(
                "Armor description '{}' contains the field separator '{}'",
                armor.description(),
                FIELD_SEPARATOR
            ));
        }
        writeln!(
            contents,
            "{}{sep}{}{sep}{}",
            armor.description(),
            armor.cost(),
            armor.defense(),
            sep = FIELD_SEPARATOR
        )?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Cannot write armor database: {}", path.display()))
}
