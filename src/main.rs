use clap::Parser;
use gal_sort::sort::{SortKey, SortOrder};
use gal_sort::{markup, output, persist, sort};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gal-sort")]
#[command(about = "Reorder photo cards inside a static HTML gallery page")]
#[command(long_about = "\
Reorder photo cards inside a static HTML gallery page

Sorts the cards in the gallery grid by title or by a date found in the card
subtitle. Everything outside the grid is preserved byte-for-byte; in-place
runs keep a .bak copy of the original.

Expected page structure (fixed contract with the gallery generator):

  <section class=\"gallery\">
    <div class=\"grid\">
      <!-- ▶▶ PHOTO CARD START -->
      <article class=\"card\">
        <h3 class=\"title\">Dawn</h3>
        <p class=\"sub\">2024-03-09 — Kyoto</p>
      </article>
      <!-- ◀◀ PHOTO CARD END -->
      ...
    </div>
  </section>

Subtitle date formats (first match wins):
  2024-03-09 | March 9, 2024 | 9 March 2024 | 03/09/2024

Cards without a parseable date sort to the start (asc) or end (desc).")]
#[command(version)]
struct Cli {
    /// Gallery page to read
    #[arg(long, default_value = "index.html")]
    input: PathBuf,

    /// Where to write the sorted page (default: overwrite input, with backup)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Sort key
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    by: SortKey,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
    order: SortOrder,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let html = std::fs::read_to_string(&cli.input)?;

    // The two abort conditions are expected user-facing outcomes, not
    // failures: report and exit cleanly with nothing written.
    let region = match markup::locate_grid(&html) {
        Ok(region) => region,
        Err(err) => {
            println!("{}. Aborting.", capitalize(&err.to_string()));
            return Ok(());
        }
    };
    let mut cards = match markup::extract_cards(region.interior(&html)) {
        Ok(cards) => cards,
        Err(err) => {
            println!("{}. Aborting.", capitalize(&err.to_string()));
            return Ok(());
        }
    };

    sort::sort_cards(&mut cards, cli.by, cli.order);
    let sorted_html = region.rewrite(&html, &cards);

    output::print_sort_output(&cards, cli.by, cli.order);
    let written = persist::write_output(&cli.input, cli.output.as_deref(), &html, &sorted_html)?;
    println!("Wrote sorted HTML to {}", written.display());

    Ok(())
}

/// Upper-case the first character of an error message for display.
fn capitalize(msg: &str) -> String {
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
