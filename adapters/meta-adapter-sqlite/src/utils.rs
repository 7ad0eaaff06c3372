//! Shared utilities for the SQLite adapter

use sqlx::sqlite::SqliteRow;
use sqlx::{Column as _, Row as _};

use ecoparam_types::prelude::*;
use ecoparam_types::types::Row;

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a query result, translating SQL errors to `EpResult`
pub(crate) fn map_db<T>(res: Result<T, sqlx::Error>) -> EpResult<T> {
	res.inspect_err(inspect).map_err(|_| Error::DbError)
}

/// Map an optional single-row query result
pub(crate) fn map_opt<T, F>(row: Result<Option<SqliteRow>, sqlx::Error>, f: F) -> EpResult<Option<T>>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match map_db(row)? {
		Some(row) => map_db(f(row)).map(Some),
		None => Ok(None),
	}
}

/// Collect an iterator of row conversions, translating errors
pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>> + Unpin,
) -> EpResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(map_db(item)?);
	}
	Ok(items)
}

/// Convert a row to textual columns. NULL becomes an empty string.
pub(crate) fn text_row(row: &SqliteRow) -> Result<Row, sqlx::Error> {
	let mut cols = Row::new();
	for col in row.columns() {
		// Unchecked: integer columns are rendered as their decimal text
		let value: Option<String> = row.try_get_unchecked(col.ordinal())?;
		cols.insert(col.name().into(), value.unwrap_or_default().into());
	}
	Ok(cols)
}

// vim: ts=4
