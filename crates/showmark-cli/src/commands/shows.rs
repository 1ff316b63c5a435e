use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use serde_json::json;
use showmark_config::FormDefaults;
use showmark_core::{filter_by_status, BookmarkStore, KeyValueStorage};
use showmark_models::{NewShow, Platform, ShowId, ShowRecord, WatchStatus};

const EMPTY_LIST_MESSAGE: &str = "Nothing here yet. Add your first show with `showmark add <title>`.";

pub fn run_list<S: KeyValueStorage>(store: &BookmarkStore<S>, status: Option<WatchStatus>, output: &Output) -> Result<()> {
    let shows: Vec<&ShowRecord> = match status {
        Some(status) => filter_by_status(store.shows(), status),
        None => store.shows().iter().collect(),
    };

    if !output.is_human() {
        output.json(&json!({
            "shows": shows,
            "stats": store.stats(),
        }));
        return Ok(());
    }

    match (shows.is_empty(), status) {
        (true, Some(status)) if !store.shows().is_empty() => {
            output.info(format!("No shows marked {}", status));
        }
        (true, _) => output.info(EMPTY_LIST_MESSAGE),
        (false, _) => output.info(render_table(&shows)),
    }
    Ok(())
}

pub fn run_add<S: KeyValueStorage>(
    store: &mut BookmarkStore<S>,
    title: String,
    platform: Option<Platform>,
    status: Option<WatchStatus>,
    defaults: &FormDefaults,
    output: &Output,
) -> Result<()> {
    let draft = NewShow::new(
        title,
        platform.unwrap_or_else(|| defaults.platform.clone()),
        status.unwrap_or(defaults.status),
    );

    let added = store
        .add_show(&draft)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to add show: {}", e))?;

    match added {
        Some(show) if output.is_human() => {
            output.success(format!("Added {} on {} as {} (id {})", show.title, show.platform, show.status, show.id));
        }
        Some(show) => output.json(&json!({ "type": "added", "show": show })),
        None => output.warn("Show title cannot be empty, nothing added"),
    }
    Ok(())
}

pub fn run_mark<S: KeyValueStorage>(store: &mut BookmarkStore<S>, id: u64, status: WatchStatus, output: &Output) -> Result<()> {
    let id = ShowId(id);
    let found = store
        .update_status(id, status)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to update show {}: {}", id, e))?;

    match store.get(id) {
        Some(show) if found => output.success(format!("{} is now {}", show.title, status)),
        _ => output.warn(format!("No show with id {}", id)),
    }
    Ok(())
}

/// One-click toggle: unfinished shows become Watched, watched ones go back to the queue
pub fn run_toggle<S: KeyValueStorage>(store: &mut BookmarkStore<S>, id: u64, output: &Output) -> Result<()> {
    let Some(current) = store.get(ShowId(id)).map(|show| show.status) else {
        output.warn(format!("No show with id {}", id));
        return Ok(());
    };
    run_mark(store, id, current.toggled(), output)
}

pub fn run_remove<S: KeyValueStorage>(store: &mut BookmarkStore<S>, id: u64, output: &Output) -> Result<()> {
    let id = ShowId(id);
    let title = store.get(id).map(|show| show.title.clone());
    store
        .remove_show(id)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to remove show {}: {}", id, e))?;

    match title {
        Some(title) => output.success(format!("Removed {}", title)),
        None => output.warn(format!("No show with id {}", id)),
    }
    Ok(())
}

pub fn run_reset<S: KeyValueStorage>(store: &mut BookmarkStore<S>, yes: bool, output: &Output) -> Result<()> {
    if !yes {
        output.warn("This replaces every bookmark with the example shows. Re-run with --yes to confirm.");
        return Ok(());
    }

    store
        .reset()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to reset bookmarks: {}", e))?;
    output.success(format!("Bookmarks reset to {} example shows", store.shows().len()));
    Ok(())
}

fn status_color(status: WatchStatus) -> Color {
    match status {
        WatchStatus::ToWatch => Color::Yellow,
        WatchStatus::Watching => Color::Cyan,
        WatchStatus::Watched => Color::Green,
    }
}

fn render_table(shows: &[&ShowRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Platform").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for show in shows {
        table.add_row(vec![
            Cell::new(show.id),
            Cell::new(&show.title),
            Cell::new(&show.platform),
            Cell::new(show.status).fg(status_color(show.status)),
        ]);
    }

    table.to_string()
}
