//! Ecoparam command line front end
//!
//! ```bash
//! ecoparam --ecosystem 1 param get founder_account
//! ecoparam --ecosystem 1 --any param list --names a,b --of 2
//! ecoparam --ecosystem 1 --role 3 sections --lang de
//! ecoparam platform list
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use ecoparam_core::config::CoreConfig;
use ecoparam_core::localize::ResourceLocalizer;
use ecoparam_core::parameter::{
	GetParameterRequest, ListParametersRequest, ListPlatformParametersRequest,
};
use ecoparam_core::section::ListSectionsRequest;
use ecoparam_core::tenant::TenantStrategy;
use ecoparam_core::{Core, CoreBuilder};
use ecoparam_meta_adapter_sqlite::MetaAdapterSqlite;
use ecoparam_types::prelude::*;

#[derive(Parser)]
#[command(name = "ecoparam", version, about = "Query ecosystem parameters and sections")]
struct Cli {
	/// Meta database file
	#[arg(long, env = "EP_DB_PATH", default_value = "./data/ecoparam.db")]
	db: PathBuf,

	/// Caller's own ecosystem
	#[arg(long, env = "EP_ECOSYSTEM", default_value_t = 1)]
	ecosystem: i64,

	/// Caller's role
	#[arg(long, env = "EP_ROLE", default_value_t = 0)]
	role: i64,

	/// Caller's key id
	#[arg(long, env = "EP_KEY_ID", default_value_t = 0)]
	key_id: i64,

	/// Allow reading any existing ecosystem, not only the caller's own
	#[arg(long)]
	any: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Ecosystem parameters
	Param {
		#[command(subcommand)]
		action: ParamCommands,
	},
	/// Platform parameters
	Platform {
		#[command(subcommand)]
		action: PlatformCommands,
	},
	/// Sections visible to the caller's role
	Sections {
		#[arg(long, default_value_t = 0)]
		limit: i64,
		#[arg(long, default_value_t = 0)]
		offset: i64,
		/// Requested language list, e.g. "de-DE,en;q=0.5"
		#[arg(long)]
		lang: Option<String>,
		/// Used when no language is requested
		#[arg(long, env = "EP_ACCEPT_LANGUAGE")]
		accept_language: Option<String>,
	},
	/// Display name of an ecosystem
	Name {
		/// Ecosystem to look up, 0 for the caller's own
		#[arg(long = "of", default_value_t = 0)]
		of: i64,
	},
}

#[derive(Subcommand)]
enum ParamCommands {
	Get {
		name: String,
		#[arg(long = "of", default_value_t = 0)]
		of: i64,
	},
	List {
		/// Comma-separated names
		#[arg(long)]
		names: Option<String>,
		#[arg(long = "of", default_value_t = 0)]
		of: i64,
	},
}

#[derive(Subcommand)]
enum PlatformCommands {
	Get {
		name: String,
	},
	List {
		#[arg(long)]
		names: Option<String>,
	},
}

fn init_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn print<T: Serialize>(value: &T) -> EpResult<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

async fn open(cli: &Cli) -> EpResult<(Core, ClientContext)> {
	let config = CoreConfig::from_env()?;
	let meta = Arc::new(MetaAdapterSqlite::new(&cli.db).await?);
	let ctx = ClientContext { tn_id: TnId(cli.ecosystem), role_id: cli.role, key_id: cli.key_id };

	let localizer = Arc::new(ResourceLocalizer::new());
	if ctx.tn_id.0 > 0 {
		localizer.load(meta.as_ref(), ctx.tn_id).await?;
	}

	let core = CoreBuilder::new(meta).config(config).localizer(localizer).build();
	Ok((core, ctx))
}

async fn run(cli: Cli) -> EpResult<()> {
	let (core, ctx) = open(&cli).await?;
	let strategy = if cli.any {
		TenantStrategy::AnyExistingTenant
	} else {
		TenantStrategy::OwnTenantOnly
	};

	match cli.command {
		Commands::Param { action } => {
			let params = core.parameters(strategy);
			match action {
				ParamCommands::Get { name, of } => {
					let req = GetParameterRequest { ecosystem: of, name };
					print(&params.get_parameter(&ctx, &req).await?)
				}
				ParamCommands::List { names, of } => {
					let req = ListParametersRequest { ecosystem: of, names };
					print(&params.list_parameters(&ctx, &req).await?)
				}
			}
		}
		Commands::Platform { action } => {
			let params = core.parameters(strategy);
			match action {
				PlatformCommands::Get { name } => print(&params.get_platform_parameter(&name).await?),
				PlatformCommands::List { names } => {
					let req = ListPlatformParametersRequest { names };
					print(&params.list_platform_parameters(&req).await?)
				}
			}
		}
		Commands::Sections { limit, offset, lang, accept_language } => {
			let req = ListSectionsRequest { limit, offset, lang, accept_language };
			print(&core.sections().list_sections(&ctx, &req).await?)
		}
		Commands::Name { of } => print(&core.tenants(strategy).get_tenant_name(&ctx, of).await?),
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	init_tracing();
	let cli = Cli::parse();

	match run(cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			if !err.is_client_error() {
				error!("{}", err);
			}
			eprintln!("error: {}", err.client_message());
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
