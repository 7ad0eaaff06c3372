//! Role-filtered section listing
//!
//! Sections are navigation rows of an ecosystem. Each row carries the list
//! of roles allowed to see it (empty = everybody) and a status; status
//! [`STATUS_MAIN_PAGE`] marks the ecosystem's landing section, whose target
//! page can be overridden per role.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::localize::Localizer;
use crate::paginate::{self, PageConfig};
use crate::prelude::*;
use ecoparam_types::meta_adapter::{ListRowOptions, MetaAdapter};
use ecoparam_types::types::{Role, Row};

/// Status of the ecosystem's main page section
pub const STATUS_MAIN_PAGE: i64 = 2;

const COL_STATUS: &str = "status";
const COL_ROLES_ACCESS: &str = "roles_access";
const COL_TITLE: &str = "title";
const COL_DEFAULT_PAGE: &str = "default_page";

// SectionRow //
//************//
/// A section row with its access-control fields decoded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRow {
	pub status: i64,
	/// Roles allowed to see the section. Empty means every role.
	pub roles_access: Vec<i64>,
	pub title: Box<str>,
	pub default_page: Option<Box<str>>,
	/// Columns without a fixed meaning here (id, urlname, page, ...)
	pub extra: Row,
	roles_access_raw: Box<str>,
}

impl SectionRow {
	/// Decode a storage row. Fails on a missing or unparsable status,
	/// `roles_access` or title.
	pub fn from_row(mut row: Row) -> EpResult<Self> {
		let id = row.get("id").cloned().unwrap_or_default();

		let status_raw = take(&mut row, COL_STATUS, &id)?;
		let status = status_raw.trim().parse::<i64>().map_err(|_| {
			Error::MalformedData(format!("invalid status '{}' of section {}", status_raw, id))
		})?;

		let roles_access_raw = take(&mut row, COL_ROLES_ACCESS, &id)?;
		let roles_access: Vec<i64> = serde_json::from_str(&roles_access_raw).map_err(|err| {
			Error::MalformedData(format!("invalid roles_access of section {}: {}", id, err))
		})?;

		let title = take(&mut row, COL_TITLE, &id)?;
		let default_page = row.remove(COL_DEFAULT_PAGE);

		Ok(Self { status, roles_access, title, default_page, extra: row, roles_access_raw })
	}

	pub fn is_main_page(&self) -> bool {
		self.status == STATUS_MAIN_PAGE
	}

	pub fn is_visible_to(&self, role_id: i64) -> bool {
		self.roles_access.is_empty() || self.roles_access.contains(&role_id)
	}

	pub fn into_view(self) -> SectionView {
		let mut columns = self.extra;
		columns.insert(COL_STATUS.into(), self.status.to_string().into());
		columns.insert(COL_ROLES_ACCESS.into(), self.roles_access_raw);
		columns.insert(COL_TITLE.into(), self.title);
		if let Some(default_page) = self.default_page {
			columns.insert(COL_DEFAULT_PAGE.into(), default_page);
		}
		SectionView(columns)
	}
}

fn take(row: &mut Row, col: &str, id: &str) -> EpResult<Box<str>> {
	row.remove(col)
		.ok_or_else(|| Error::MalformedData(format!("section {} has no '{}' column", id, col)))
}

// SectionView //
//*************//
/// Free-form section columns; `title` is always present and localized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionView(pub Row);

impl SectionView {
	pub fn get(&self, col: &str) -> Option<&str> {
		self.0.get(col).map(|v| &**v)
	}

	pub fn title(&self) -> &str {
		self.get(COL_TITLE).unwrap_or_default()
	}

	pub fn default_page(&self) -> Option<&str> {
		self.get(COL_DEFAULT_PAGE)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionListView {
	/// Number of active sections before role filtering
	pub count: i64,
	pub list: Vec<SectionView>,
}

// SectionVisibility //
//*******************//
/// Computes the sections a caller may see, in input order
#[derive(Debug)]
pub struct SectionVisibility<'a> {
	pub tenant: &'a Tenant,
	pub role_id: i64,
	pub lang: &'a str,
	pub roles: &'a dyn MetaAdapter,
	pub localizer: &'a dyn Localizer,
}

impl SectionVisibility<'_> {
	/// Filter and decorate rows. A single malformed row or a failed role
	/// lookup fails the whole batch.
	pub async fn filter(&self, rows: Vec<Row>) -> EpResult<Vec<SectionView>> {
		let mut role: Option<Role> = None;
		let mut sections = Vec::with_capacity(rows.len());

		for row in rows {
			let mut section = SectionRow::from_row(row)?;
			if !section.is_visible_to(self.role_id) {
				continue;
			}

			if section.is_main_page() {
				if role.is_none() {
					role = Some(self.lookup_role().await?);
				}
				if let Some(role) = &role
					&& !role.default_page.is_empty()
				{
					section.default_page = Some(role.default_page.clone());
				}
			}

			section.title =
				self.localizer.expand(&section.title, self.tenant.tn_id(), self.lang).into();
			sections.push(section.into_view());
		}
		Ok(sections)
	}

	async fn lookup_role(&self) -> EpResult<Role> {
		let tn_id = self.tenant.tn_id();
		match self.roles.read_role(tn_id, self.role_id).await {
			Ok(Some(role)) => Ok(role),
			Ok(None) => {
				warn!("Role {} of ecosystem {} not found", self.role_id, tn_id);
				Err(Error::RoleNotFound(self.role_id))
			}
			Err(err) => {
				error!("Reading role {} of ecosystem {} failed: {}", self.role_id, tn_id, err);
				Err(err)
			}
		}
	}
}

// SectionService //
//****************//
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListSectionsRequest {
	#[serde(default)]
	pub limit: i64,
	#[serde(default)]
	pub offset: i64,
	/// Requested language list; falls back to `accept_language` when empty
	#[serde(default)]
	pub lang: Option<String>,
	#[serde(skip)]
	pub accept_language: Option<String>,
}

impl ListSectionsRequest {
	pub fn language(&self) -> &str {
		match self.lang.as_deref() {
			Some(lang) if !lang.is_empty() => lang,
			_ => self.accept_language.as_deref().unwrap_or_default(),
		}
	}
}

#[derive(Clone, Debug)]
pub struct SectionService {
	meta: Arc<dyn MetaAdapter>,
	localizer: Arc<dyn Localizer>,
	page_config: PageConfig,
}

impl SectionService {
	pub fn new(
		meta: Arc<dyn MetaAdapter>,
		localizer: Arc<dyn Localizer>,
		page_config: PageConfig,
	) -> Self {
		Self { meta, localizer, page_config }
	}

	/// Sections of the caller's ecosystem visible to the caller's role
	pub async fn list_sections(
		&self,
		ctx: &ClientContext,
		req: &ListSectionsRequest,
	) -> EpResult<SectionListView> {
		if ctx.tn_id.0 < 0 {
			return Err(Error::ValidationError(format!("invalid client ecosystem: {}", ctx.tn_id)));
		}
		let page = paginate::normalize(req.limit, req.offset, self.page_config)?;
		let tenant = Tenant::resolved(ctx.tn_id);

		let opts = ListRowOptions { limit: page.limit, offset: page.offset };
		let rows = self.meta.list_sections(tenant.tn_id(), &opts).await.inspect_err(|err| {
			error!("Listing sections of ecosystem {} failed: {}", tenant.tn_id(), err);
		})?;

		let visibility = SectionVisibility {
			tenant: &tenant,
			role_id: ctx.role_id,
			lang: req.language(),
			roles: self.meta.as_ref(),
			localizer: self.localizer.as_ref(),
		};
		let list = visibility.filter(rows.rows).await.inspect_err(|err| {
			error!("Filtering sections of ecosystem {} failed: {}", tenant.tn_id(), err);
		})?;

		debug!(
			"Sections of ecosystem {} for role {}: {} of {}",
			tenant.tn_id(),
			ctx.role_id,
			list.len(),
			rows.count
		);
		Ok(SectionListView { count: rows.count, list })
	}
}


// vim: ts=4
