mod bundle;
mod db;
mod error;
mod parser;
mod settings;
mod source;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use bundle::Bundle;
use source::SourceFile;

#[derive(Parser)]
#[command(
    name = "pg_docset",
    about = "Build a searchable documentation bundle from PostgreSQL HTML reference pages"
)]
struct Cli {
    /// Directory containing the HTML pages (e.g. doc/src/sgml/html)
    source: Option<PathBuf>,

    /// Bundle directory to write (default: postgresql.docset, or $PGDOCSET_BUNDLE)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let Some(source_dir) = cli.source else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = settings::load()?;
    debug!(?settings, "settings loaded");
    let files = source::list(&source_dir)?;

    let root = cli.output.unwrap_or_else(|| PathBuf::from(&settings.bundle));
    let bundle = Bundle::new(&root);
    bundle.reset()?;
    bundle.write_info_plist(&settings)?;

    let conn = db::connect(&bundle.index_path())?;
    db::init_schema(&conn)?;

    println!("Processing {} files from {:?}...", files.len(), source_dir);
    let counts = build(&conn, &bundle, &files)?;
    counts.print(&root);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

struct BuildCounts {
    pages: usize,
    assets: usize,
    entries: usize,
}

impl BuildCounts {
    fn print(&self, root: &Path) {
        println!(
            "Wrote {} pages, {} assets and {} index entries to {:?}.",
            self.pages, self.assets, self.entries, root,
        );
    }
}

/// Process every source file in order. Index rows are committed only after
/// the last page succeeds.
fn build(
    conn: &rusqlite::Connection,
    bundle: &Bundle,
    files: &[SourceFile],
) -> anyhow::Result<BuildCounts> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BuildCounts {
        pages: 0,
        assets: 0,
        entries: 0,
    };
    let mut writer = db::IndexWriter::begin(conn)?;

    for file in files {
        match file {
            SourceFile::Page {
                path,
                name,
                basename,
            } => {
                let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
                let html = String::from_utf8_lossy(&bytes);
                let page = parser::process_page(name, basename, &html);
                debug!(
                    page = %name,
                    category = ?page.category,
                    entries = page.entries.len(),
                    "processed"
                );
                writer.append(&page.entries)?;
                bundle.write_document(name, &page.html)?;
                counts.pages += 1;
            }
            SourceFile::Asset { path, name } => {
                bundle.copy_asset(path, name)?;
                counts.assets += 1;
            }
        }
        pb.inc(1);
    }

    counts.entries = writer.commit()?;
    pb.finish_and_clear();
    info!(
        "Indexed {} entries from {} pages ({} assets copied)",
        counts.entries, counts.pages, counts.assets
    );
    Ok(counts)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

// ── Tests ──
