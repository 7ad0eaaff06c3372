//! In-memory `MetaAdapter` for service tests

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ecoparam_types::error::{EpResult, Error};
use ecoparam_types::meta_adapter::{LanguageResource, ListRowOptions, MetaAdapter};
use ecoparam_types::types::{Role, Row, RowPage, TnId};

pub fn row(cols: &[(&str, &str)]) -> Row {
	cols.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect()
}

#[derive(Debug, Default)]
pub struct MemoryMeta {
	tenants: Mutex<BTreeMap<TnId, Box<str>>>,
	parameters: Mutex<Vec<(TnId, Row)>>,
	sections: Mutex<Vec<(TnId, Row)>>,
	roles: Mutex<Vec<Role>>,
	languages: Mutex<Vec<(TnId, LanguageResource)>>,
	/// When set, every call fails with `DbError`
	pub failing: AtomicBool,
	/// Number of `read_parameter` calls
	pub parameter_reads: AtomicUsize,
}

impl MemoryMeta {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_tenant(&self, tn_id: i64, name: &str) -> &Self {
		self.tenants.lock().insert(TnId(tn_id), name.into());
		self
	}

	pub fn add_parameter(&self, tn_id: i64, id: i64, name: &str, value: &str) -> &Self {
		let id = id.to_string();
		self.add_parameter_row(
			tn_id,
			row(&[("id", &id), ("name", name), ("value", value), ("conditions", "true")]),
		)
	}

	pub fn add_parameter_row(&self, tn_id: i64, row: Row) -> &Self {
		self.parameters.lock().push((TnId(tn_id), row));
		self
	}

	pub fn set_parameter_value(&self, tn_id: i64, name: &str, value: &str) {
		for (t, row) in self.parameters.lock().iter_mut() {
			if *t == TnId(tn_id) && row.get("name").is_some_and(|n| &**n == name) {
				row.insert("value".into(), value.into());
			}
		}
	}

	pub fn add_section(&self, tn_id: i64, id: i64, status: &str, roles: &str, title: &str) -> &Self {
		let id = id.to_string();
		self.add_section_row(
			tn_id,
			row(&[
				("id", &id),
				("status", status),
				("roles_access", roles),
				("title", title),
				("urlname", "page"),
			]),
		)
	}

	pub fn add_section_row(&self, tn_id: i64, row: Row) -> &Self {
		self.sections.lock().push((TnId(tn_id), row));
		self
	}

	pub fn add_role(&self, tn_id: i64, id: i64, default_page: &str) -> &Self {
		self.roles.lock().push(Role { id, tn_id: TnId(tn_id), default_page: default_page.into() });
		self
	}

	pub fn add_language(&self, tn_id: i64, name: &str, translations: &[(&str, &str)]) -> &Self {
		let resource = LanguageResource {
			name: name.into(),
			translations: translations.iter().map(|(l, t)| ((*l).into(), (*t).into())).collect(),
		};
		self.languages.lock().push((TnId(tn_id), resource));
		self
	}

	pub fn fail(&self, failing: bool) {
		self.failing.store(failing, Ordering::SeqCst);
	}

	fn check(&self) -> EpResult<()> {
		if self.failing.load(Ordering::SeqCst) { Err(Error::DbError) } else { Ok(()) }
	}
}

fn section_id(row: &Row) -> i64 {
	row.get("id").and_then(|id| id.parse().ok()).unwrap_or_default()
}

#[async_trait]
impl MetaAdapter for MemoryMeta {
	async fn tenant_exists(&self, tn_id: TnId) -> EpResult<bool> {
		self.check()?;
		Ok(self.tenants.lock().contains_key(&tn_id))
	}

	async fn read_tenant_name(&self, tn_id: TnId) -> EpResult<Option<Box<str>>> {
		self.check()?;
		Ok(self.tenants.lock().get(&tn_id).cloned())
	}

	async fn read_role(&self, tn_id: TnId, role_id: i64) -> EpResult<Option<Role>> {
		self.check()?;
		Ok(self.roles.lock().iter().find(|r| r.tn_id == tn_id && r.id == role_id).cloned())
	}

	async fn read_parameter(&self, tn_id: TnId, name: &str) -> EpResult<Option<Row>> {
		self.check()?;
		self.parameter_reads.fetch_add(1, Ordering::SeqCst);
		Ok(self
			.parameters
			.lock()
			.iter()
			.find(|(t, row)| *t == tn_id && row.get("name").is_some_and(|n| &**n == name))
			.map(|(_, row)| row.clone()))
	}

	async fn list_parameters(&self, tn_id: TnId) -> EpResult<Vec<Row>> {
		self.check()?;
		Ok(self
			.parameters
			.lock()
			.iter()
			.filter(|(t, _)| *t == tn_id)
			.map(|(_, row)| row.clone())
			.collect())
	}

	async fn list_sections(&self, tn_id: TnId, opts: &ListRowOptions) -> EpResult<RowPage> {
		self.check()?;
		// Unparsable statuses are passed on so the caller can reject them
		let mut rows: Vec<Row> = self
			.sections
			.lock()
			.iter()
			.filter(|(t, row)| {
				*t == tn_id
					&& row.get("status").is_none_or(|s| s.parse::<i64>().map_or(true, |s| s > 0))
			})
			.map(|(_, row)| row.clone())
			.collect();
		rows.sort_by_key(section_id);

		let count = i64::try_from(rows.len()).unwrap_or(i64::MAX);
		let offset = usize::try_from(opts.offset).unwrap_or_default();
		let limit = usize::try_from(opts.limit).unwrap_or_default();
		let rows = rows.into_iter().skip(offset).take(limit).collect();
		Ok(RowPage { count, rows })
	}

	async fn list_language_resources(&self, tn_id: TnId) -> EpResult<Vec<LanguageResource>> {
		self.check()?;
		Ok(self
			.languages
			.lock()
			.iter()
			.filter(|(t, _)| *t == tn_id)
			.map(|(_, res)| res.clone())
			.collect())
	}
}

// vim: ts=4
