use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Table};
use showmark_core::{BookmarkStats, BookmarkStore, KeyValueStorage};

pub fn run_stats<S: KeyValueStorage>(store: &BookmarkStore<S>, output: &Output) -> Result<()> {
    let stats = store.stats();

    if !output.is_human() {
        let value = serde_json::to_value(stats)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize stats: {}", e))?;
        output.json(&value);
        return Ok(());
    }

    output.info(render_stats(&stats));
    Ok(())
}

fn render_stats(stats: &BookmarkStats) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new("To Watch").add_attribute(Attribute::Bold),
        Cell::new("Watching").add_attribute(Attribute::Bold),
        Cell::new("Watched").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(stats.total),
        Cell::new(stats.to_watch),
        Cell::new(stats.watching),
        Cell::new(stats.watched),
    ]);
    table.to_string()
}
