use anyhow::{Context, Result};
use hexlog::{BlogEntry, Config, Highlighter, MarkupRenderer};
use std::fs;

/// Builds the href and output filename for an entry's detail page.
///
/// The index prefix keeps filenames unique and in data order even when two
/// entries share a title.
fn entry_filename(index: usize, entry: &BlogEntry) -> String {
    format!("{:02}-{}.html", index, hexlog::slugify(&entry.big_title))
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let entries = hexlog::load_entries(&config.data).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load entry data: {:#}", e);
        eprintln!("Warning: Falling back to built-in demo entry");
        vec![hexlog::fallback_entry()]
    });

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    hexlog::write_static_assets(&assets_dir).context("Failed to write static assets")?;

    let entries_dir = config.output.join("entries");
    fs::create_dir_all(&entries_dir).context("Failed to create entries directory")?;

    let renderer = match &config.host {
        Some(host) => MarkupRenderer::with_site_host(host.clone()),
        None => MarkupRenderer::new(),
    };
    let highlighter = Highlighter::new();

    println!("Generating entry pages...");
    let mut entry_count = 0;
    for (index, entry) in entries.iter().enumerate() {
        let filename = entry_filename(index, entry);
        let page = match hexlog::pages::entry::generate_entry_page(
            &renderer,
            &highlighter,
            &config.name,
            entry,
        ) {
            Ok(page) => page,
            Err(e) => {
                eprintln!("Warning: Skipping entry '{}': {:#}", entry.big_title, e);
                continue;
            }
        };

        let path = entries_dir.join(&filename);
        fs::write(&path, page.into_string())
            .with_context(|| format!("Failed to write entry page: {}", path.display()))?;
        entry_count += 1;
    }
    println!("Generated {} entry pages", entry_count);

    let hrefs: Vec<(String, &BlogEntry)> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (format!("entries/{}", entry_filename(index, entry)), entry))
        .collect();

    let index_page = hexlog::pages::index::generate_index_page(&config.name, &hrefs);
    let index_path = config.output.join("index.html");
    fs::write(&index_path, index_page.into_string())
        .with_context(|| format!("Failed to write index page: {}", index_path.display()))?;
    println!("Generated: {}", index_path.display());

    if let Some(team_path) = &config.team {
        match hexlog::load_team(team_path) {
            Ok(members) => {
                let team_page = hexlog::pages::team::generate_team_page(&config.name, &members);
                let path = config.output.join("team.html");
                fs::write(&path, team_page.into_string())
                    .with_context(|| format!("Failed to write team page: {}", path.display()))?;
                println!("Generated: {}", path.display());
            }
            Err(e) => {
                eprintln!("Warning: Failed to load team data, skipping team page: {:#}", e);
            }
        }
    }

    if config.open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
