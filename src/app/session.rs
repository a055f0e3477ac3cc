use std::collections::HashSet;
use std::io::{BufRead, Write};

use crate::core::export::export_to_file;
use crate::core::field::FormField;
use crate::core::grid::build_grid;
use crate::core::{ConfigProvider, Storage, Territory};
use crate::domain::model::next_variant_label;
use crate::utils::error::Result;

/// Interactive line-oriented session: the stand-in for the browser form. All
/// state lives here for the lifetime of the session; nothing is persisted.
pub struct Session<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    territory: Territory,
    territory_field: FormField,
    street_field: FormField,
    count_field: FormField,
    // House labels that already received a variant this session. The add
    // affordance is withheld after one use; the `c` cap itself is enforced
    // by the model.
    varianted: HashSet<(String, String)>,
}

impl<S: Storage, C: ConfigProvider> Session<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let initial_name = config.territory_name().unwrap_or_default().to_string();
        let territory_field = FormField::new(initial_name.clone());
        Self {
            storage,
            config,
            territory: Territory::new(initial_name),
            territory_field,
            street_field: FormField::default(),
            count_field: FormField::default(),
            varianted: HashSet::new(),
        }
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    /// Reads commands until EOF or `quit`. Command errors never end the
    /// session; they print a hint and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "🗺  Territory Helper (type 'help' for commands)")?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let command = parts.next().unwrap_or_default();
            let args: Vec<&str> = parts.collect();

            match command {
                "name" => self.handle_name(&args),
                "street" => self.handle_street(&args, output)?,
                "variant" => self.handle_variant(&args, output)?,
                "remove" => self.handle_remove(&args, output)?,
                "show" => self.render(output)?,
                "export" => self.handle_export(output)?,
                "help" => print_help(output)?,
                "quit" | "exit" => break,
                other => {
                    writeln!(output, "Unknown command '{other}'; type 'help'")?;
                }
            }
        }

        Ok(())
    }

    fn handle_name(&mut self, args: &[&str]) {
        self.territory_field.set_from_input(&args.join(" "));
        self.territory.set_name(self.territory_field.value());
    }

    /// Form submission: last argument is the house count, everything before
    /// it is the street name. Both fields reset afterwards.
    fn handle_street<W: Write>(&mut self, args: &[&str], output: &mut W) -> Result<()> {
        let Some((count_raw, name_parts)) = args.split_last() else {
            writeln!(output, "Usage: street <name> <count>")?;
            return Ok(());
        };
        if name_parts.is_empty() {
            writeln!(output, "Usage: street <name> <count>")?;
            return Ok(());
        }

        self.street_field.set_from_input(&name_parts.join(" "));
        self.count_field.set_from_input(count_raw);

        // A non-numeric draft parses as 0 and therefore yields an empty
        // number list; the form enforces nothing beyond that.
        let count = self.count_field.value().parse::<i64>().unwrap_or(0);
        let name = self.street_field.value().to_string();
        self.territory.add_street(&name, count);

        self.street_field.reset();
        self.count_field.reset();
        Ok(())
    }

    fn handle_variant<W: Write>(&mut self, args: &[&str], output: &mut W) -> Result<()> {
        let Some((street, number)) = split_street_and_number(args) else {
            writeln!(output, "Usage: variant <street> <number>")?;
            return Ok(());
        };

        if !self.variant_available(&street, &number) {
            writeln!(output, "No further variant available for {number}")?;
            return Ok(());
        }

        self.territory.add_variant(&street, &number);
        self.varianted.insert((street, number));
        Ok(())
    }

    fn handle_remove<W: Write>(&mut self, args: &[&str], output: &mut W) -> Result<()> {
        let Some((street, number)) = split_street_and_number(args) else {
            writeln!(output, "Usage: remove <street> <number>")?;
            return Ok(());
        };
        self.territory.remove_number(&street, &number);
        Ok(())
    }

    fn variant_available(&self, street: &str, number: &str) -> bool {
        next_variant_label(number).is_some()
            && !self
                .varianted
                .contains(&(street.to_string(), number.to_string()))
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Territory: {}", self.territory.name())?;
        for street in self.territory.streets() {
            let houses: Vec<String> = street
                .numbers
                .iter()
                .map(|n| {
                    if self.variant_available(&street.name, n) {
                        format!("{n}+")
                    } else {
                        n.clone()
                    }
                })
                .collect();
            writeln!(output, "  {}: {}", street.name, houses.join(" "))?;
        }
        Ok(())
    }

    /// Export is only offered once at least one street exists. A failed
    /// serialization or write is reported and the session keeps running.
    fn handle_export<W: Write>(&mut self, output: &mut W) -> Result<()> {
        if self.territory.streets().is_empty() {
            writeln!(output, "Nothing to export yet; add a street first")?;
            return Ok(());
        }

        let grid = build_grid(self.territory.streets());
        match export_to_file(&self.storage, &grid, self.territory.name()) {
            Ok(filename) => {
                tracing::info!(filename = %filename, "export written");
                writeln!(
                    output,
                    "📁 Exported to {}/{filename}",
                    self.config.output_path()
                )?;
            }
            Err(e) => {
                tracing::error!("Export failed: {e}");
                writeln!(output, "❌ Export failed: {e}")?;
            }
        }
        Ok(())
    }
}

// Street names may contain spaces; the house number is always the last token.
fn split_street_and_number(args: &[&str]) -> Option<(String, String)> {
    let (number, street_parts) = args.split_last()?;
    if street_parts.is_empty() {
        return None;
    }
    Some((street_parts.join(" "), (*number).to_string()))
}

fn print_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  name <text>              set the territory name")?;
    writeln!(output, "  street <name> <count>    add a street with houses 1..count")?;
    writeln!(output, "  variant <street> <nr>    add the next a/b/c variant after <nr>")?;
    writeln!(output, "  remove <street> <nr>     remove a house entry")?;
    writeln!(output, "  show                     list streets ('+' marks houses that can take a variant)")?;
    writeln!(output, "  export                   write the territory to an xlsx file")?;
    writeln!(output, "  quit                     end the session")?;
    Ok(())
}
