//! CSV export of the utility table.
//!
//! A one-way snapshot of the learned values for plotting or inspection,
//! never read back into a run.

use std::{fs::File, path::Path};

use serde::Serialize;

use crate::{Result, q_learning::QTable};

#[derive(Debug, Serialize)]
struct QValueRow {
    x: i32,
    y: i32,
    direction: &'static str,
    utility: f64,
}

/// Write every stored (position, direction, utility) entry to `writer` as
/// CSV, sorted by position then direction so output is stable across runs.
pub fn write_q_values_csv<W: std::io::Write>(q_table: &QTable, writer: W) -> Result<()> {
    let mut entries: Vec<_> = q_table.iter().collect();
    entries.sort_by_key(|&(position, direction, _)| (position, direction));

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (position, direction, utility) in entries {
        csv_writer.serialize(QValueRow {
            x: position.x,
            y: position.y,
            direction: direction.as_str(),
            utility,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the utility table to a CSV file at `path`.
pub fn write_q_values_csv_file<P: AsRef<Path>>(q_table: &QTable, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_q_values_csv(q_table, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Position};

    #[test]
    fn export_is_sorted_and_headed() {
        let mut q_table = QTable::new(0.5, 0.9, 0.0);
        q_table.set(Position::new(1, 0), Direction::Down, 2.5);
        q_table.set(Position::new(0, 0), Direction::Up, -5.0);

        let mut buf = Vec::new();
        write_q_values_csv(&q_table, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,y,direction,utility");
        assert_eq!(lines[1], "0,0,up,-5.0");
        assert_eq!(lines[2], "1,0,down,2.5");
    }

    #[test]
    fn empty_table_exports_nothing() {
        // The csv writer emits headers lazily, so an empty table produces an
        // empty file.
        let q_table = QTable::new(0.5, 0.9, 0.0);
        let mut buf = Vec::new();
        write_q_values_csv(&q_table, &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
