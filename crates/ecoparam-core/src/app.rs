//! Service wiring

use std::sync::Arc;

use crate::cache::ParameterCache;
use crate::config::CoreConfig;
use crate::localize::{Localizer, NoopLocalizer};
use crate::parameter::{ParameterService, ParameterStore};
use crate::prelude::*;
use crate::section::SectionService;
use crate::tenant::{TenantResolver, TenantStrategy};
use ecoparam_types::meta_adapter::MetaAdapter;

/// Shared handle the services are created from. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Core {
	meta: Arc<dyn MetaAdapter>,
	localizer: Arc<dyn Localizer>,
	cache: Option<Arc<ParameterCache>>,
	config: Arc<CoreConfig>,
}

impl Core {
	pub fn config(&self) -> &CoreConfig {
		&self.config
	}

	/// The parameter cache, if enabled. Writers must invalidate through it.
	pub fn parameter_cache(&self) -> Option<&Arc<ParameterCache>> {
		self.cache.as_ref()
	}

	pub fn tenants(&self, strategy: TenantStrategy) -> TenantResolver {
		TenantResolver::new(self.meta.clone(), strategy)
	}

	pub fn parameters(&self, strategy: TenantStrategy) -> ParameterService {
		let store = match &self.cache {
			Some(cache) => ParameterStore::with_cache(self.meta.clone(), cache.clone()),
			None => ParameterStore::new(self.meta.clone()),
		};
		ParameterService::new(store, self.tenants(strategy))
	}

	pub fn sections(&self) -> SectionService {
		SectionService::new(
			self.meta.clone(),
			self.localizer.clone(),
			self.config.sections_page_config(),
		)
	}
}

pub struct CoreBuilder {
	meta: Arc<dyn MetaAdapter>,
	localizer: Option<Arc<dyn Localizer>>,
	config: CoreConfig,
}

impl CoreBuilder {
	pub fn new(meta: Arc<dyn MetaAdapter>) -> Self {
		CoreBuilder { meta, localizer: None, config: CoreConfig::default() }
	}

	pub fn config(&mut self, config: CoreConfig) -> &mut Self {
		self.config = config;
		self
	}

	pub fn localizer(&mut self, localizer: Arc<dyn Localizer>) -> &mut Self {
		self.localizer = Some(localizer);
		self
	}

	pub fn build(&self) -> Core {
		let cache = match self.config.parameter_cache_size {
			0 => None,
			size => {
				info!("Parameter cache enabled, capacity {}", size);
				Some(Arc::new(ParameterCache::new(size)))
			}
		};
		let localizer = self.localizer.clone().unwrap_or_else(|| Arc::new(NoopLocalizer));

		Core { meta: self.meta.clone(), localizer, cache, config: Arc::new(self.config.clone()) }
	}
}

// vim: ts=4
