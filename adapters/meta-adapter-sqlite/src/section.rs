//! Sections

use sqlx::{Row as _, SqlitePool};

use crate::CreateSection;
use crate::utils::*;
use ecoparam_types::meta_adapter::ListRowOptions;
use ecoparam_types::prelude::*;
use ecoparam_types::types::RowPage;

/// Active sections ordered by id plus the number of all active sections
pub(crate) async fn list(db: &SqlitePool, tn_id: TnId, opts: &ListRowOptions) -> EpResult<RowPage> {
	let mut tx = map_db(db.begin().await)?;

	let res = sqlx::query("SELECT count(*) AS cnt FROM sections WHERE tn_id = ? AND status > 0")
		.bind(tn_id.0)
		.fetch_one(&mut *tx)
		.await;
	let count: i64 = map_db(res.and_then(|row| row.try_get("cnt")))?;

	let rows = sqlx::query(
		"SELECT id, title, urlname, page, roles_access, status FROM sections
		WHERE tn_id = ? AND status > 0 ORDER BY id LIMIT ? OFFSET ?",
	)
	.bind(tn_id.0)
	.bind(opts.limit)
	.bind(opts.offset)
	.fetch_all(&mut *tx)
	.await;
	let rows = collect_res(map_db(rows)?.iter().map(text_row))?;

	map_db(tx.commit().await)?;
	Ok(RowPage { count, rows })
}

pub(crate) async fn create(db: &SqlitePool, tn_id: TnId, section: &CreateSection) -> EpResult<i64> {
	let res = sqlx::query(
		"INSERT INTO sections (tn_id, title, urlname, page, roles_access, status)
		VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
	)
	.bind(tn_id.0)
	.bind(&*section.title)
	.bind(&*section.urlname)
	.bind(&*section.page)
	.bind(&*section.roles_access)
	.bind(section.status)
	.fetch_one(db)
	.await;
	map_db(res.and_then(|row| row.try_get("id")))
}

// vim: ts=4
