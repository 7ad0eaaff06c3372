//! Error type shared by adapters and services

use crate::types::TnId;

pub type EpResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Bad or missing input from the caller (tenant reference, offset, ...)
	ValidationError(String),
	/// Requested tenant differs from the caller's own tenant
	TenantMismatch {
		requested: TnId,
		own: TnId,
	},
	TenantNotFound(TnId),
	ParameterNotFound(Box<str>),
	RoleNotFound(i64),
	NotFound,
	/// Storage backend failure. Details are logged where it happens.
	DbError,
	/// Stored data that cannot be interpreted (e.g. `roles_access`)
	MalformedData(String),
	ConfigError(String),
	Internal(String),
}

impl Error {
	/// Whether the error is caused by the caller's request rather than the server
	pub fn is_client_error(&self) -> bool {
		matches!(
			self,
			Error::ValidationError(_)
				| Error::TenantMismatch { .. }
				| Error::TenantNotFound(_)
				| Error::ParameterNotFound(_)
				| Error::RoleNotFound(_)
				| Error::NotFound
		)
	}

	/// Message safe to hand back to a client. Internal failures are opaque.
	pub fn client_message(&self) -> String {
		if self.is_client_error() { self.to_string() } else { "internal error".to_string() }
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::TenantMismatch { requested, own } => {
				write!(f, "access denied to ecosystem {} from ecosystem {}", requested, own)
			}
			Error::TenantNotFound(tn_id) => write!(f, "ecosystem {} does not exist", tn_id),
			Error::ParameterNotFound(name) => write!(f, "parameter {} has not been found", name),
			Error::RoleNotFound(role_id) => write!(f, "role {} has not been found", role_id),
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::MalformedData(msg) => write!(f, "malformed data: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::MalformedData(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_errors_carry_detail() {
		let err = Error::ParameterNotFound("max_block_size".into());
		assert!(err.is_client_error());
		assert_eq!(err.client_message(), "parameter max_block_size has not been found");

		let err = Error::TenantMismatch { requested: TnId(2), own: TnId(1) };
		assert!(err.is_client_error());
		assert!(err.client_message().contains("ecosystem 2"));
	}

	#[test]
	fn test_internal_errors_are_opaque() {
		for err in [
			Error::DbError,
			Error::MalformedData("roles_access: expected value at line 1".into()),
			Error::Internal("boom".into()),
		] {
			assert!(!err.is_client_error());
			assert_eq!(err.client_message(), "internal error");
		}
	}
}

// vim: ts=4
