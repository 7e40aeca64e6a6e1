use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use crate::settings::Settings;

pub const INDEX_FILE: &str = "docSet.dsidx";

/// Output tree of a documentation bundle:
/// `<root>/Contents/{Info.plist, Resources/{Documents/, docSet.dsidx}}`.
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Bundle { root: root.into() }
    }

    pub fn contents(&self) -> PathBuf {
        self.root.join("Contents")
    }

    pub fn resources(&self) -> PathBuf {
        self.contents().join("Resources")
    }

    pub fn documents(&self) -> PathBuf {
        self.resources().join("Documents")
    }

    pub fn index_path(&self) -> PathBuf {
        self.resources().join(INDEX_FILE)
    }

    /// Remove whatever a previous run left under `Resources` and recreate
    /// an empty `Documents` directory.
    pub fn reset(&self) -> Result<()> {
        let resources = self.resources();
        if resources.exists() {
            fs::remove_dir_all(&resources)
                .with_context(|| format!("Failed to remove {:?}", resources))?;
        }
        let documents = self.documents();
        fs::create_dir_all(&documents)
            .with_context(|| format!("Failed to create {:?}", documents))?;
        Ok(())
    }

    pub fn write_document(&self, name: &str, html: &str) -> Result<()> {
        let path = self.documents().join(name);
        fs::write(&path, html).with_context(|| format!("Failed to write {:?}", path))
    }

    pub fn copy_asset(&self, source: &Path, name: &str) -> Result<()> {
        let path = self.documents().join(name);
        fs::copy(source, &path).with_context(|| format!("Failed to copy {:?}", source))?;
        Ok(())
    }

    pub fn write_info_plist(&self, settings: &Settings) -> Result<()> {
        let path = self.contents().join("Info.plist");
        fs::write(&path, info_plist(settings)?)
            .with_context(|| format!("Failed to write {:?}", path))
    }
}

fn info_plist(settings: &Settings) -> Result<Vec<u8>> {
    let strings = [
        ("CFBundleIdentifier", settings.identifier.as_str()),
        ("CFBundleName", settings.name.as_str()),
        ("DocSetPlatformFamily", settings.platform_family.as_str()),
        ("dashIndexFilePath", settings.index_page.as_str()),
    ];

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(
        r#"plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd""#,
    )))?;
    writer
        .create_element("plist")
        .with_attribute(("version", "1.0"))
        .write_inner_content(|w| {
            w.create_element("dict").write_inner_content(|w| {
                for (key, value) in strings {
                    w.create_element("key").write_text_content(BytesText::new(key))?;
                    w.create_element("string").write_text_content(BytesText::new(value))?;
                }
                w.create_element("key")
                    .write_text_content(BytesText::new("isDashDocset"))?;
                w.create_element("true").write_empty()?;
                Ok(())
            })?;
            Ok(())
        })?;
    Ok(writer.into_inner())
}

// ── Tests ──
