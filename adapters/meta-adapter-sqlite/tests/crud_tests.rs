//! Meta adapter write and read-back tests

use ecoparam_meta_adapter_sqlite::{CreateSection, MetaAdapterSqlite};
use ecoparam_types::error::Error;
use ecoparam_types::meta_adapter::{LanguageResource, MetaAdapter};
use ecoparam_types::types::TnId;
use tempfile::TempDir;

async fn create_test_adapter() -> (MetaAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = MetaAdapterSqlite::new(temp_dir.path().join("meta.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_create_and_read_tenant() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_tenant(TnId(1), "First").await.unwrap();

	assert!(adapter.tenant_exists(TnId(1)).await.unwrap());
	assert!(!adapter.tenant_exists(TnId(2)).await.unwrap());
	assert_eq!(adapter.read_tenant_name(TnId(1)).await.unwrap().as_deref(), Some("First"));
	assert!(adapter.read_tenant_name(TnId(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_tenant_rejects_bad_ids() {
	let (adapter, _temp) = create_test_adapter().await;

	let res = adapter.create_tenant(TnId(0), "platform").await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	adapter.create_tenant(TnId(1), "First").await.unwrap();
	let res = adapter.create_tenant(TnId(1), "Again").await;
	assert!(matches!(res, Err(Error::DbError)));
}

#[tokio::test]
async fn test_parameter_write_then_read() {
	let (adapter, _temp) = create_test_adapter().await;

	let id = adapter.put_parameter(TnId(1), "x", "v1", "true").await.unwrap();
	let row = adapter.read_parameter(TnId(1), "x").await.unwrap().unwrap();
	assert_eq!(row.get("id").map(|v| &**v), Some(id.to_string().as_str()));
	assert_eq!(row.get("value").map(|v| &**v), Some("v1"));
	assert_eq!(row.get("conditions").map(|v| &**v), Some("true"));

	// Update keeps the id
	let id2 = adapter.put_parameter(TnId(1), "x", "v2", "false").await.unwrap();
	assert_eq!(id, id2);
	let row = adapter.read_parameter(TnId(1), "x").await.unwrap().unwrap();
	assert_eq!(row.get("value").map(|v| &**v), Some("v2"));

	// Same name in another namespace is a separate parameter
	assert!(adapter.read_parameter(TnId(2), "x").await.unwrap().is_none());
	assert!(adapter.read_parameter(TnId(0), "x").await.unwrap().is_none());

	assert!(adapter.delete_parameter(TnId(1), "x").await.unwrap());
	assert!(!adapter.delete_parameter(TnId(1), "x").await.unwrap());
	assert!(adapter.read_parameter(TnId(1), "x").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_and_read_role() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_role(TnId(1), 2, "Developer", "/home").await.unwrap();
	adapter.create_role(TnId(1), 3, "Guest", "").await.unwrap();

	let role = adapter.read_role(TnId(1), 2).await.unwrap().unwrap();
	assert_eq!(role.id, 2);
	assert_eq!(role.tn_id, TnId(1));
	assert_eq!(&*role.default_page, "/home");

	let role = adapter.read_role(TnId(1), 3).await.unwrap().unwrap();
	assert!(role.default_page.is_empty());

	// Roles are scoped to their ecosystem
	assert!(adapter.read_role(TnId(2), 2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_language_resources() {
	let (adapter, _temp) = create_test_adapter().await;

	let resource = LanguageResource {
		name: "home".into(),
		translations: [("en".into(), "Home".into()), ("de".into(), "Startseite".into())]
			.into_iter()
			.collect(),
	};
	adapter.put_language_resource(TnId(1), &resource).await.unwrap();

	let list = adapter.list_language_resources(TnId(1)).await.unwrap();
	assert_eq!(list, vec![resource]);
	assert!(adapter.list_language_resources(TnId(2)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_section() {
	let (adapter, _temp) = create_test_adapter().await;

	let first = adapter
		.create_section(TnId(1), &CreateSection { title: "A".into(), ..Default::default() })
		.await
		.unwrap();
	let second = adapter
		.create_section(TnId(1), &CreateSection { title: "B".into(), ..Default::default() })
		.await
		.unwrap();
	assert!(second > first);
}

#[tokio::test]
async fn test_reopen_keeps_data() {
	let temp_dir = TempDir::new().unwrap();
	let path = temp_dir.path().join("nested").join("meta.db");

	{
		let adapter = MetaAdapterSqlite::new(&path).await.unwrap();
		adapter.create_tenant(TnId(5), "Five").await.unwrap();
	}

	let adapter = MetaAdapterSqlite::new(&path).await.unwrap();
	assert!(adapter.tenant_exists(TnId(5)).await.unwrap());
}

// vim: ts=4
