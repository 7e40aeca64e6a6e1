use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, Transaction};

use crate::parser::extract::IndexEntry;

pub fn connect(path: &Path) -> Result<Connection> {
    Connection::open(path).with_context(|| format!("Failed to open {:?}", path))
}

/// Drop any previous index and create an empty one.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        DROP TABLE IF EXISTS searchIndex;
        CREATE TABLE searchIndex (
            id   INTEGER PRIMARY KEY,
            name TEXT,
            type TEXT,
            path TEXT
        );
        ",
    )?;
    Ok(())
}

/// Appends index rows inside one transaction spanning the whole run.
///
/// Rows become visible only on [`IndexWriter::commit`]; dropping the writer
/// rolls everything back.
pub struct IndexWriter<'c> {
    tx: Transaction<'c>,
    rows: usize,
}

impl<'c> IndexWriter<'c> {
    pub fn begin(conn: &'c Connection) -> Result<Self> {
        let tx = conn.unchecked_transaction()?;
        Ok(IndexWriter { tx, rows: 0 })
    }

    pub fn append(&mut self, entries: &[IndexEntry]) -> Result<usize> {
        let mut stmt = self
            .tx
            .prepare_cached("INSERT INTO searchIndex (name, type, path) VALUES (?1, ?2, ?3)")?;
        for e in entries {
            stmt.execute(rusqlite::params![e.name, e.kind.as_str(), e.path])?;
        }
        self.rows += entries.len();
        Ok(entries.len())
    }

    /// Commit and return the number of rows written.
    pub fn commit(self) -> Result<usize> {
        self.tx.commit()?;
        Ok(self.rows)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::category::Kind;

    fn entry(name: &str, kind: Kind, path: &str) -> IndexEntry {
        IndexEntry {
            name: name.into(),
            kind,
            path: path.into(),
        }
    }

    fn count(conn: &Connection) -> usize {
        conn.query_row("SELECT COUNT(*) FROM searchIndex", [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn commit_keeps_order_and_duplicates() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        let mut writer = IndexWriter::begin(&conn).unwrap();
        writer
            .append(&[
                entry("abs", Kind::Function, "functions-math.html"),
                entry("abs", Kind::Function, "functions-math.html"),
                entry("+", Kind::Operator, "functions-math.html#//apple_ref/cpp/Operator/%2B"),
            ])
            .unwrap();
        assert_eq!(writer.commit().unwrap(), 3);

        let mut stmt = conn
            .prepare("SELECT name, type, path FROM searchIndex ORDER BY id")
            .unwrap();
        let rows: Vec<(String, String, String)> = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[2].1, "Operator");
    }

    #[test]
    fn dropped_writer_leaves_index_empty() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        {
            let mut writer = IndexWriter::begin(&conn).unwrap();
            writer
                .append(&[entry("SELECT", Kind::Command, "sql-select.html")])
                .unwrap();
        }
        assert_eq!(count(&conn), 0);
    }

    #[test]
    fn init_schema_drops_previous_rows() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO searchIndex (name, type, path) VALUES ('x', 'Guide', 'x.html')",
            [],
        )
        .unwrap();
        init_schema(&conn).unwrap();
        assert_eq!(count(&conn), 0);
    }
}
