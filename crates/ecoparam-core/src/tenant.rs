//! Ecosystem (tenant) resolution
//!
//! Every request names its target ecosystem either explicitly or implicitly
//! (0 = the caller's own). Which explicit targets are acceptable depends on
//! the call site, so each resolver is built with one [`TenantStrategy`].

use serde::Serialize;
use std::sync::Arc;

use crate::prelude::*;
use ecoparam_types::meta_adapter::MetaAdapter;

/// How an explicitly requested ecosystem is validated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TenantStrategy {
	/// Only the caller's own ecosystem may be named
	OwnTenantOnly,
	/// Any ecosystem present in the registry may be named
	AnyExistingTenant,
}

#[derive(Clone, Debug)]
pub struct TenantResolver {
	meta: Arc<dyn MetaAdapter>,
	strategy: TenantStrategy,
}

impl TenantResolver {
	pub fn new(meta: Arc<dyn MetaAdapter>, strategy: TenantStrategy) -> Self {
		Self { meta, strategy }
	}

	/// Resolve a requested ecosystem id against the caller's own ecosystem
	pub async fn resolve(&self, requested: i64, own: TnId) -> EpResult<Tenant> {
		if requested < 0 {
			return Err(Error::ValidationError(format!("invalid ecosystem id: {}", requested)));
		}
		if own.0 < 0 {
			return Err(Error::ValidationError(format!("invalid client ecosystem: {}", own)));
		}
		if requested == 0 {
			return Ok(Tenant::resolved(own));
		}

		let requested = TnId(requested);
		match self.strategy {
			TenantStrategy::OwnTenantOnly => {
				if requested != own {
					debug!("Ecosystem {} requested from ecosystem {}", requested, own);
					return Err(Error::TenantMismatch { requested, own });
				}
			}
			TenantStrategy::AnyExistingTenant => {
				let exists = self.meta.tenant_exists(requested).await.inspect_err(|err| {
					error!("Checking ecosystem {} failed: {}", requested, err);
				})?;
				if !exists {
					warn!("Ecosystem {} does not exist", requested);
					return Err(Error::TenantNotFound(requested));
				}
			}
		}
		Ok(Tenant::resolved(requested))
	}

	/// Resolve the ecosystem and return its display name
	pub async fn get_tenant_name(
		&self,
		ctx: &ClientContext,
		requested: i64,
	) -> EpResult<TenantNameView> {
		let tenant = self.resolve(requested, ctx.tn_id).await?;
		let name = self.meta.read_tenant_name(tenant.tn_id()).await.inspect_err(|err| {
			error!("Reading name of ecosystem {} failed: {}", tenant.tn_id(), err);
		})?;

		match name {
			Some(name) => Ok(TenantNameView { ecosystem_name: name }),
			None => Err(Error::TenantNotFound(tenant.tn_id())),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TenantNameView {
	pub ecosystem_name: Box<str>,
}

// vim: ts=4
