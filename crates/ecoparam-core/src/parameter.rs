//! Parameter lookup within an ecosystem or the platform namespace

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::sync::Arc;

use crate::cache::ParameterCache;
use crate::name_filter::NameFilter;
use crate::prelude::*;
use crate::tenant::TenantResolver;
use ecoparam_types::meta_adapter::MetaAdapter;
use ecoparam_types::types::{Parameter, PlatformParameter, Row};

// Requests //
//**********//
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GetParameterRequest {
	/// Requested ecosystem, 0 for the caller's own
	#[serde(default)]
	pub ecosystem: i64,
	pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListParametersRequest {
	#[serde(default)]
	pub ecosystem: i64,
	/// Comma-separated allow-list of names
	#[serde(default)]
	pub names: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListPlatformParametersRequest {
	#[serde(default)]
	pub names: Option<String>,
}

// Views //
//*******//
/// Ids are rendered as strings on the wire
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterView {
	#[serde_as(as = "DisplayFromStr")]
	pub id: i64,
	pub name: Box<str>,
	pub value: Box<str>,
	pub conditions: Box<str>,
}

impl From<Parameter> for ParameterView {
	fn from(param: Parameter) -> Self {
		Self {
			id: param.id,
			name: param.name,
			value: param.value,
			conditions: param.conditions,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformParameterView {
	pub name: Box<str>,
	pub value: Box<str>,
	pub conditions: Box<str>,
}

impl From<PlatformParameter> for PlatformParameterView {
	fn from(param: PlatformParameter) -> Self {
		Self { name: param.name, value: param.value, conditions: param.conditions }
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListView<T> {
	pub list: Vec<T>,
}

// ParameterStore //
//****************//
/// Typed parameter reads on top of the storage adapter
#[derive(Clone, Debug)]
pub struct ParameterStore {
	meta: Arc<dyn MetaAdapter>,
	cache: Option<Arc<ParameterCache>>,
}

impl ParameterStore {
	pub fn new(meta: Arc<dyn MetaAdapter>) -> Self {
		Self { meta, cache: None }
	}

	pub fn with_cache(meta: Arc<dyn MetaAdapter>, cache: Arc<ParameterCache>) -> Self {
		Self { meta, cache: Some(cache) }
	}

	/// Exact-name lookup inside the tenant namespace
	pub async fn get_one(&self, tenant: &Tenant, name: &str) -> EpResult<Option<Parameter>> {
		let tn_id = tenant.tn_id();
		match &self.cache {
			Some(cache) => cache.get_or_fill(tn_id, name, || self.read_one(tn_id, name)).await,
			None => self.read_one(tn_id, name).await,
		}
	}

	async fn read_one(&self, tn_id: TnId, name: &str) -> EpResult<Option<Parameter>> {
		match self.meta.read_parameter(tn_id, name).await? {
			Some(row) => parse_parameter(&row, tn_id).map(Some),
			None => Ok(None),
		}
	}

	/// All parameters of the tenant namespace in storage order.
	///
	/// Rows that cannot be read as a parameter are logged and skipped.
	pub async fn get_all(&self, tenant: &Tenant) -> EpResult<Vec<Parameter>> {
		let tn_id = tenant.tn_id();
		let rows = self.meta.list_parameters(tn_id).await?;

		let mut params = Vec::with_capacity(rows.len());
		for row in &rows {
			match parse_parameter(row, tn_id) {
				Ok(param) => params.push(param),
				Err(err) => warn!("Skipping parameter row of ecosystem {}: {}", tn_id, err),
			}
		}
		Ok(params)
	}

	pub async fn get_all_platform(&self) -> EpResult<Vec<PlatformParameter>> {
		let params = self.get_all(&Tenant::platform()).await?;
		Ok(params.into_iter().map(PlatformParameter::from).collect())
	}
}

fn column<'a>(row: &'a Row, name: &str) -> EpResult<&'a str> {
	row.get(name)
		.map(|v| &**v)
		.ok_or_else(|| Error::MalformedData(format!("missing column '{}'", name)))
}

fn parse_parameter(row: &Row, tn_id: TnId) -> EpResult<Parameter> {
	let id = column(row, "id")?;
	let id = id
		.parse::<i64>()
		.map_err(|_| Error::MalformedData(format!("invalid parameter id '{}'", id)))?;

	Ok(Parameter {
		id,
		tn_id,
		name: column(row, "name")?.into(),
		value: column(row, "value")?.into(),
		conditions: column(row, "conditions")?.into(),
	})
}

// ParameterService //
//******************//
/// Parameter operations exposed to the transport layer
#[derive(Clone, Debug)]
pub struct ParameterService {
	store: ParameterStore,
	resolver: TenantResolver,
}

impl ParameterService {
	pub fn new(store: ParameterStore, resolver: TenantResolver) -> Self {
		Self { store, resolver }
	}

	pub async fn get_parameter(
		&self,
		ctx: &ClientContext,
		req: &GetParameterRequest,
	) -> EpResult<ParameterView> {
		let tenant = self.resolver.resolve(req.ecosystem, ctx.tn_id).await?;

		match self.store.get_one(&tenant, &req.name).await {
			Ok(Some(param)) => Ok(param.into()),
			Ok(None) => Err(Error::ParameterNotFound(req.name.as_str().into())),
			Err(err) => {
				error!(
					"Getting parameter '{}' of ecosystem {} failed: {}",
					req.name,
					tenant.tn_id(),
					err
				);
				Err(err)
			}
		}
	}

	/// Parameters of the resolved ecosystem, optionally restricted to a set
	/// of names. Only ecosystem resolution can fail the call: a storage
	/// failure is logged and yields an empty list.
	pub async fn list_parameters(
		&self,
		ctx: &ClientContext,
		req: &ListParametersRequest,
	) -> EpResult<ListView<ParameterView>> {
		let tenant = self.resolver.resolve(req.ecosystem, ctx.tn_id).await?;
		let filter = NameFilter::from(req.names.as_deref());

		let params = match self.store.get_all(&tenant).await {
			Ok(params) => params,
			Err(err) => {
				error!("Listing parameters of ecosystem {} failed: {}", tenant.tn_id(), err);
				Vec::new()
			}
		};
		let list = filter.apply(params, |p| &*p.name).into_iter().map(ParameterView::from).collect();
		Ok(ListView { list })
	}

	pub async fn get_platform_parameter(&self, name: &str) -> EpResult<PlatformParameterView> {
		match self.store.get_one(&Tenant::platform(), name).await {
			Ok(Some(param)) => Ok(PlatformParameter::from(param).into()),
			Ok(None) => Err(Error::ParameterNotFound(name.into())),
			Err(err) => {
				error!("Getting platform parameter '{}' failed: {}", name, err);
				Err(err)
			}
		}
	}

	/// Platform parameters; storage failures yield an empty list
	pub async fn list_platform_parameters(
		&self,
		req: &ListPlatformParametersRequest,
	) -> EpResult<ListView<PlatformParameterView>> {
		let filter = NameFilter::from(req.names.as_deref());

		let params = match self.store.get_all_platform().await {
			Ok(params) => params,
			Err(err) => {
				error!("Listing platform parameters failed: {}", err);
				Vec::new()
			}
		};
		let list =
			filter.apply(params, |p| &*p.name).into_iter().map(PlatformParameterView::from).collect();
		Ok(ListView { list })
	}
}


// vim: ts=4
