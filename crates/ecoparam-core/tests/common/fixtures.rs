//! Test fixtures

use std::sync::Arc;

use ecoparam_types::types::{ClientContext, TnId};

use super::memory::MemoryMeta;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn ctx(tn_id: i64, role_id: i64) -> ClientContext {
	ClientContext { tn_id: TnId(tn_id), role_id, key_id: 1000 }
}

/// Two ecosystems with a few parameters each, plus platform parameters
pub fn sample_meta() -> Arc<MemoryMeta> {
	let meta = MemoryMeta::new();
	meta.add_tenant(1, "platform ecosystem")
		.add_tenant(2, "Second")
		.add_parameter(0, 1, "default_ecosystem_page", "page_default")
		.add_parameter(0, 2, "max_block_size", "67108864")
		.add_parameter(1, 10, "founder_account", "-1200")
		.add_parameter(1, 11, "new_table", "ContractConditions(\"MainCondition\")")
		.add_parameter(1, 12, "stylesheet", "body {}")
		.add_parameter(2, 20, "founder_account", "77");
	Arc::new(meta)
}

// vim: ts=4
