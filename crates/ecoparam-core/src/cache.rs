//! Read-through cache for single parameter lookups

use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::prelude::*;
use ecoparam_types::types::Parameter;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
	Some(n) => n,
	None => NonZeroUsize::MIN,
};

type Key = (TnId, Box<str>);
type FillSlots = parking_lot::Mutex<HashMap<Key, Arc<tokio::sync::Mutex<()>>>>;

/// LRU cache of parameters keyed by `(ecosystem, name)`.
///
/// Concurrent misses on the same key are collapsed into one fill. Any
/// invalidation bumps the generation under the cache lock, and a fill started
/// under an older generation does not store its result.
pub struct ParameterCache {
	cache: parking_lot::RwLock<LruCache<Key, Parameter>>,
	fills: FillSlots,
	generation: AtomicU64,
}

impl std::fmt::Debug for ParameterCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ParameterCache").field("len", &self.len()).finish_non_exhaustive()
	}
}

impl ParameterCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
		Self {
			cache: parking_lot::RwLock::new(LruCache::new(capacity)),
			fills: parking_lot::Mutex::new(HashMap::new()),
			generation: AtomicU64::new(0),
		}
	}

	pub fn get(&self, tn_id: TnId, name: &str) -> Option<Parameter> {
		let mut cache = self.cache.write();
		cache.get(&(tn_id, Box::from(name))).cloned()
	}

	pub fn put(&self, param: Parameter) {
		let mut cache = self.cache.write();
		cache.put((param.tn_id, param.name.clone()), param);
	}

	pub fn len(&self) -> usize {
		self.cache.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drop one entry. Must run before the corresponding write is acknowledged.
	pub fn invalidate(&self, tn_id: TnId, name: &str) {
		let mut cache = self.cache.write();
		self.generation.fetch_add(1, Ordering::SeqCst);
		cache.pop(&(tn_id, Box::from(name)));
	}

	/// Drop every entry of one ecosystem
	pub fn invalidate_tenant(&self, tn_id: TnId) {
		let mut cache = self.cache.write();
		self.generation.fetch_add(1, Ordering::SeqCst);
		let keys: Vec<Key> =
			cache.iter().filter(|((t, _), _)| *t == tn_id).map(|(k, _)| k.clone()).collect();
		for key in keys {
			cache.pop(&key);
		}
	}

	pub fn clear(&self) {
		let mut cache = self.cache.write();
		self.generation.fetch_add(1, Ordering::SeqCst);
		cache.clear();
	}

	/// Return the cached parameter or run `fill` to load it.
	///
	/// At most one `fill` runs per key at a time; other callers wait for it
	/// and then read the cache. Absent parameters are not cached.
	pub async fn get_or_fill<F, Fut>(
		&self,
		tn_id: TnId,
		name: &str,
		fill: F,
	) -> EpResult<Option<Parameter>>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = EpResult<Option<Parameter>>>,
	{
		if let Some(param) = self.get(tn_id, name) {
			debug!("Parameter cache hit: {}.{}", tn_id, name);
			return Ok(Some(param));
		}

		let slot = FillSlot::acquire(&self.fills, (tn_id, Box::from(name)));
		let _guard = slot.mutex.lock().await;
		if let Some(param) = self.get(tn_id, name) {
			return Ok(Some(param));
		}

		let generation = self.generation.load(Ordering::SeqCst);
		let res = fill().await;
		if let Ok(Some(param)) = &res {
			let mut cache = self.cache.write();
			// Invalidations bump the generation under this lock
			if self.generation.load(Ordering::SeqCst) == generation {
				cache.put((param.tn_id, param.name.clone()), param.clone());
			}
		}
		res
	}
}

/// Per-key fill lock. Removes its map entry on drop once nobody else holds
/// it, including when the owning future is cancelled.
struct FillSlot<'a> {
	fills: &'a FillSlots,
	key: Key,
	mutex: Arc<tokio::sync::Mutex<()>>,
}

impl<'a> FillSlot<'a> {
	fn acquire(fills: &'a FillSlots, key: Key) -> Self {
		let mutex = fills.lock().entry(key.clone()).or_default().clone();
		Self { fills, key, mutex }
	}
}

impl Drop for FillSlot<'_> {
	fn drop(&mut self) {
		let mut fills = self.fills.lock();
		// Held by the map and by this slot only
		if fills.get(&self.key).is_some_and(|mutex| {
			Arc::ptr_eq(mutex, &self.mutex) && Arc::strong_count(&self.mutex) == 2
		}) {
			fills.remove(&self.key);
		}
	}
}


// vim: ts=4
