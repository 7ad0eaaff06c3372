//! Database schema initialization
//!
//! Every tenant-scoped table carries a `tn_id` column. Parameters of the
//! platform namespace are stored with `tn_id = 0`.

use sqlx::SqlitePool;

pub(crate) const SCHEMA_VERSION: i64 = 1;

/// Create all tables and indexes if they do not exist yet
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS globals (
			key text NOT NULL,
			value text,
			PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Ecosystems
	//************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tenants (
		tn_id integer NOT NULL,
		name text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(tn_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Parameters
	//************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS parameters (
		id integer NOT NULL,
		tn_id integer NOT NULL,
		name text NOT NULL,
		value text,
		conditions text,
		PRIMARY KEY(id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_parameters_tnid_name ON parameters(tn_id, name)",
	)
	.execute(&mut *tx)
	.await?;

	// Sections
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS sections (
		id integer NOT NULL,
		tn_id integer NOT NULL,
		title text,
		urlname text,
		page text,
		roles_access json NOT NULL DEFAULT '[]',
		status integer NOT NULL DEFAULT 0,	-- 0: disabled, 1: active, 2: main page
		PRIMARY KEY(id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_sections_tnid ON sections(tn_id, id)")
		.execute(&mut *tx)
		.await?;

	// Roles
	//*******
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS roles (
		id integer NOT NULL,
		tn_id integer NOT NULL,
		role_name text,
		default_page text,
		PRIMARY KEY(tn_id, id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Language resources
	//********************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS languages (
		id integer NOT NULL,
		tn_id integer NOT NULL,
		name text NOT NULL,
		res json NOT NULL,	-- translations keyed by language code
		PRIMARY KEY(id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_languages_tnid_name ON languages(tn_id, name)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query("INSERT OR IGNORE INTO globals (key, value) VALUES ('schema_version', ?)")
		.bind(SCHEMA_VERSION.to_string())
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
