//! Language resources
//!
//! Each resource is stored as a JSON object of translations keyed by
//! language code.

use std::collections::BTreeMap;

use sqlx::{Row as _, SqlitePool};

use crate::utils::*;
use ecoparam_types::meta_adapter::LanguageResource;
use ecoparam_types::prelude::*;

pub(crate) async fn list(db: &SqlitePool, tn_id: TnId) -> EpResult<Vec<LanguageResource>> {
	let rows = sqlx::query("SELECT name, res FROM languages WHERE tn_id = ? ORDER BY id")
		.bind(tn_id.0)
		.fetch_all(db)
		.await;

	let mut resources = Vec::new();
	for row in map_db(rows)? {
		let name: String = map_db(row.try_get("name"))?;
		let res: String = map_db(row.try_get("res"))?;
		let translations: BTreeMap<Box<str>, Box<str>> =
			serde_json::from_str(&res).map_err(|err| {
				Error::MalformedData(format!("language resource '{}' of ecosystem {}: {}", name, tn_id, err))
			})?;
		resources.push(LanguageResource { name: name.into(), translations });
	}
	Ok(resources)
}

pub(crate) async fn put(db: &SqlitePool, tn_id: TnId, resource: &LanguageResource) -> EpResult<()> {
	let res = serde_json::to_string(&resource.translations)?;
	let res = sqlx::query(
		"INSERT INTO languages (tn_id, name, res) VALUES (?, ?, ?)
		ON CONFLICT(tn_id, name) DO UPDATE SET res = excluded.res",
	)
	.bind(tn_id.0)
	.bind(&*resource.name)
	.bind(res)
	.execute(db)
	.await;
	map_db(res)?;
	Ok(())
}

// vim: ts=4
