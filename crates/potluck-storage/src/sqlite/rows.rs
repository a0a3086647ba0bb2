//! Row operations for [`SqliteStore`].

use rusqlite::{Connection, params};
use tracing::debug;

use crate::collection::Collection;
use crate::error::{Result, StoreError};
use crate::record::Record;
use crate::sqlite::store::SqliteStore;

// ---------------------------------------------------------------------------
// Connection-level helpers
// ---------------------------------------------------------------------------

/// Writes (or overwrites) the header row of a collection.
pub(crate) fn write_header(conn: &Connection, collection: Collection) -> Result<()> {
    let header = serde_json::to_string(collection.header())?;
    conn.execute(
        "INSERT OR REPLACE INTO sheets (name, header) VALUES (?1, ?2)",
        params![collection.name(), header],
    )?;
    Ok(())
}

fn read_header_on_conn(conn: &Connection, collection: Collection) -> Result<Vec<String>> {
    let raw: String = conn
        .query_row(
            "SELECT header FROM sheets WHERE name = ?1",
            params![collection.name()],
            |row| row.get(0),
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                StoreError::schema(collection.name(), "header row missing")
            }
            other => StoreError::Query(other),
        })?;
    Ok(serde_json::from_str(&raw)?)
}

fn check_arity(collection: Collection, fields: &[String]) -> Result<()> {
    let expected = collection.header().len();
    if fields.len() != expected {
        return Err(StoreError::schema(
            collection.name(),
            format!("row has {} fields, header has {expected}", fields.len()),
        ));
    }
    Ok(())
}

fn insert_row_on_conn(conn: &Connection, collection: Collection, fields: &[String]) -> Result<()> {
    check_arity(collection, fields)?;
    let encoded = serde_json::to_string(fields)?;
    conn.execute(
        "INSERT INTO rows (sheet, fields) VALUES (?1, ?2)",
        params![collection.name(), encoded],
    )?;
    Ok(())
}

fn row_ids_on_conn(conn: &Connection, collection: Collection) -> Result<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM rows WHERE sheet = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![collection.name()], |row| row.get::<_, i64>(0))?;
    let mut ids = Vec::new();
    for row in rows {
        ids.push(row?);
    }
    Ok(ids)
}

// ---------------------------------------------------------------------------
// SqliteStore methods
// ---------------------------------------------------------------------------

impl SqliteStore {
    /// Appends one data row.
    pub fn append_row_impl(&self, collection: Collection, fields: &[String]) -> Result<()> {
        let conn = self.lock_conn()?;
        insert_row_on_conn(&conn, collection, fields)?;
        debug!(%collection, "appended row");
        Ok(())
    }

    /// Reads every data row, zipped with the stored header.
    pub fn read_rows_impl(&self, collection: Collection) -> Result<Vec<Record>> {
        let conn = self.lock_conn()?;
        let header = read_header_on_conn(&conn, collection)?;

        let mut stmt = conn.prepare("SELECT fields FROM rows WHERE sheet = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![collection.name()], |row| row.get::<_, String>(0))?;
        let mut records = Vec::new();
        for row in rows {
            let values: Vec<String> = serde_json::from_str(&row?)?;
            records.push(Record::from_row(&header, values));
        }
        debug!(%collection, count = records.len(), "read rows");
        Ok(records)
    }

    /// Deletes every data row and re-writes the header.
    pub fn clear_impl(&self, collection: Collection) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        let removed = tx.execute(
            "DELETE FROM rows WHERE sheet = ?1",
            params![collection.name()],
        )?;
        write_header(&tx, collection)?;
        tx.commit()?;
        debug!(%collection, removed, "cleared collection");
        Ok(())
    }

    /// Deletes the data row at a 0-based index in store order.
    pub fn delete_row_impl(&self, collection: Collection, index: usize) -> Result<()> {
        let conn = self.lock_conn()?;
        let ids = row_ids_on_conn(&conn, collection)?;
        let id = ids.get(index).ok_or_else(|| StoreError::RowOutOfRange {
            collection: collection.name().to_string(),
            index,
            len: ids.len(),
        })?;
        conn.execute("DELETE FROM rows WHERE id = ?1", params![id])?;
        debug!(%collection, index, "deleted row");
        Ok(())
    }

    /// Replaces every data row. Runs in one SQLite transaction so readers see
    /// either the old rows or the new ones.
    pub fn rewrite_impl(&self, collection: Collection, rows: &[Vec<String>]) -> Result<()> {
        for fields in rows {
            check_arity(collection, fields)?;
        }

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM rows WHERE sheet = ?1",
            params![collection.name()],
        )?;
        for fields in rows {
            insert_row_on_conn(&tx, collection, fields)?;
        }
        tx.commit()?;
        debug!(%collection, count = rows.len(), "rewrote collection");
        Ok(())
    }

    /// Returns the stored header row.
    pub fn header_impl(&self, collection: Collection) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        read_header_on_conn(&conn, collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Store;
    use pretty_assertions::assert_eq;

    fn test_store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    fn names(store: &SqliteStore) -> Vec<String> {
        store
            .read_rows(Collection::Dishes)
            .unwrap()
            .iter()
            .map(|r| r.get("name").unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn empty_collection_reads_empty() {
        let store = test_store();
        assert!(store.read_rows(Collection::Ingredients).unwrap().is_empty());
    }

    #[test]
    fn append_and_read_in_order() {
        let store = test_store();
        store
            .append_row(Collection::Dishes, &row(&["d1", "Chili", "Carnivore"]))
            .unwrap();
        store
            .append_row(Collection::Dishes, &row(&["d2", "Dal", "Vegan"]))
            .unwrap();

        let records = store.read_rows(Collection::Dishes).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some("d1"));
        assert_eq!(records[1].get("type"), Some("Vegan"));
    }

    #[test]
    fn collections_are_isolated() {
        let store = test_store();
        store
            .append_row(Collection::Votes, &row(&["Chili", "1"]))
            .unwrap();
        assert!(store.read_rows(Collection::Dishes).unwrap().is_empty());
        assert_eq!(store.read_rows(Collection::Votes).unwrap().len(), 1);
    }

    #[test]
    fn append_rejects_wrong_arity() {
        let store = test_store();
        let err = store
            .append_row(Collection::Votes, &row(&["Chili"]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
        assert!(err.to_string().contains("votes"));
    }

    #[test]
    fn clear_keeps_header() {
        let store = test_store();
        store
            .append_row(Collection::Votes, &row(&["Chili", "4"]))
            .unwrap();
        store.clear(Collection::Votes).unwrap();

        assert!(store.read_rows(Collection::Votes).unwrap().is_empty());
        assert_eq!(store.header(Collection::Votes).unwrap(), vec!["dish", "votes"]);
    }

    #[test]
    fn clear_restores_damaged_header() {
        let store = test_store();
        {
            let conn = store.lock_conn().unwrap();
            conn.execute("DELETE FROM sheets WHERE name = 'votes'", [])
                .unwrap();
        }
        assert!(store.header(Collection::Votes).is_err());
        store.clear(Collection::Votes).unwrap();
        assert_eq!(store.header(Collection::Votes).unwrap(), vec!["dish", "votes"]);
    }

    #[test]
    fn delete_row_by_index() {
        let store = test_store();
        for (id, name) in [("d1", "A"), ("d2", "B"), ("d3", "C")] {
            store
                .append_row(Collection::Dishes, &row(&[id, name, "Vegan"]))
                .unwrap();
        }
        store.delete_row(Collection::Dishes, 1).unwrap();
        assert_eq!(names(&store), vec!["A", "C"]);
    }

    #[test]
    fn delete_row_out_of_range() {
        let store = test_store();
        let err = store.delete_row(Collection::Dishes, 0).unwrap_err();
        assert!(matches!(
            err,
            StoreError::RowOutOfRange { index: 0, len: 0, .. }
        ));
    }

    #[test]
    fn rewrite_replaces_rows() {
        let store = test_store();
        store
            .append_row(Collection::Votes, &row(&["Old", "9"]))
            .unwrap();
        store
            .rewrite(
                Collection::Votes,
                &[row(&["Chili", "2"]), row(&["Dal", "1"])],
            )
            .unwrap();

        let records = store.read_rows(Collection::Votes).unwrap();
        let values: Vec<Vec<String>> = records.iter().map(Record::values).collect();
        assert_eq!(values, vec![row(&["Chili", "2"]), row(&["Dal", "1"])]);
    }

    #[test]
    fn rewrite_with_bad_row_changes_nothing() {
        let store = test_store();
        store
            .append_row(Collection::Votes, &row(&["Chili", "2"]))
            .unwrap();
        let err = store
            .rewrite(Collection::Votes, &[row(&["Dal", "1"]), row(&["broken"])])
            .unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
        assert_eq!(store.read_rows(Collection::Votes).unwrap().len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let store = test_store();
        store
            .append_row(Collection::Dishes, &row(&["d1", "Chili", "Carnivore"]))
            .unwrap();
        store
            .append_row(Collection::Votes, &row(&["Chili", "1"]))
            .unwrap();
        store
            .append_row(
                Collection::Ingredients,
                &row(&["Chili", "beans", "2", "cans", ""]),
            )
            .unwrap();
        store
            .append_row(Collection::Ballots, &row(&["alice", "2024-06-01T18:00:00Z"]))
            .unwrap();

        store.reset().unwrap();

        for collection in Collection::all() {
            assert!(store.read_rows(*collection).unwrap().is_empty());
            assert_eq!(store.header(*collection).unwrap(), collection.header());
        }
    }
}
