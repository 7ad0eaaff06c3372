//! Display text localization
//!
//! Titles may embed `$name$` macros that refer to per-ecosystem language
//! resources. Expansion never fails: anything that cannot be resolved is
//! left in the text as written.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::sync::Arc;

use crate::prelude::*;
use ecoparam_types::meta_adapter::{LanguageResource, MetaAdapter};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Longest macro name that is still looked up
const MAX_MACRO_NAME: usize = 64;

pub trait Localizer: Debug + Send + Sync {
	fn expand(&self, text: &str, tn_id: TnId, lang: &str) -> String;
}

/// Returns text unchanged
#[derive(Debug, Default)]
pub struct NoopLocalizer;

impl Localizer for NoopLocalizer {
	fn expand(&self, text: &str, _tn_id: TnId, _lang: &str) -> String {
		text.to_string()
	}
}

type Translations = BTreeMap<Box<str>, Box<str>>;
type ResourceTable = HashMap<Box<str>, Translations>;

/// Expands `$name$` macros from language resources held in memory.
#[derive(Debug, Default)]
pub struct ResourceLocalizer {
	resources: parking_lot::RwLock<HashMap<TnId, Arc<ResourceTable>>>,
}

impl ResourceLocalizer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the resources of one ecosystem
	pub fn set_resources(&self, tn_id: TnId, resources: impl IntoIterator<Item = LanguageResource>) {
		let table: ResourceTable = resources
			.into_iter()
			.map(|res| (res.name, res.translations))
			.collect();
		self.resources.write().insert(tn_id, Arc::new(table));
	}

	/// Load (or reload) the resources of one ecosystem from storage
	pub async fn load(&self, meta: &dyn MetaAdapter, tn_id: TnId) -> EpResult<usize> {
		let resources = meta.list_language_resources(tn_id).await?;
		let count = resources.len();
		self.set_resources(tn_id, resources);
		info!("Loaded {} language resources for ecosystem {}", count, tn_id);
		Ok(count)
	}

	/// Translation of a single resource for an Accept-Language style list
	pub fn lang_text(&self, name: &str, tn_id: TnId, accept: &str) -> Option<String> {
		if tn_id.is_platform() || name.contains(' ') {
			return None;
		}
		let table = self.resources.read().get(&tn_id).cloned()?;
		let translations = table.get(name)?;
		select_translation(translations, accept).map(ToString::to_string)
	}
}

impl Localizer for ResourceLocalizer {
	fn expand(&self, text: &str, tn_id: TnId, lang: &str) -> String {
		expand_macros(text, |name| self.lang_text(name, tn_id, lang))
	}
}

/// Pick the first listed language the resource has, then the default
/// language, then whatever comes first.
fn select_translation<'a>(translations: &'a Translations, accept: &str) -> Option<&'a str> {
	for item in accept.split(',') {
		let lang = item.split(';').next().unwrap_or_default().trim().to_lowercase();
		if lang.len() < 2 {
			break;
		}
		if let Some(text) = translations.get(lang.as_str()) {
			return Some(&**text);
		}
		let primary = lang.split(['-', '_']).next().unwrap_or_default();
		if let Some(text) = translations.get(primary) {
			return Some(&**text);
		}
	}
	translations.get(DEFAULT_LANGUAGE).or_else(|| translations.values().next()).map(|text| &**text)
}

/// Replace every `$name$` for which `lookup` has a value.
///
/// A `$` that closes an unresolved name opens the next one, so a stray `$`
/// does not swallow a following macro.
fn expand_macros<F>(text: &str, lookup: F) -> String
where
	F: Fn(&str) -> Option<String>,
{
	if !text.contains('$') {
		return text.to_string();
	}

	let mut result = String::with_capacity(text.len());
	let mut name = String::new();
	let mut in_name = false;

	for c in text.chars() {
		if c != '$' {
			if in_name {
				name.push(c);
				if name.chars().count() > MAX_MACRO_NAME || c < ' ' {
					result.push('$');
					result.push_str(&name);
					name.clear();
					in_name = false;
				}
			} else {
				result.push(c);
			}
			continue;
		}

		if in_name {
			if let Some(value) = lookup(&name) {
				result.push_str(&value);
				in_name = false;
			} else {
				result.push('$');
				result.push_str(&name);
			}
			name.clear();
		} else {
			in_name = true;
		}
	}
	if in_name {
		result.push('$');
		result.push_str(&name);
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	fn resource(name: &str, translations: &[(&str, &str)]) -> LanguageResource {
		LanguageResource {
			name: name.into(),
			translations: translations.iter().map(|(l, t)| ((*l).into(), (*t).into())).collect(),
		}
	}

	fn localizer() -> ResourceLocalizer {
		let loc = ResourceLocalizer::new();
		loc.set_resources(
			TnId(1),
			[
				resource("home", &[("en", "Home"), ("de", "Startseite")]),
				resource("news", &[("fr", "Actualités")]),
				resource("empty", &[]),
			],
		);
		loc
	}

	#[test]
	fn test_expand_known_macro() {
		let loc = localizer();
		assert_eq!(loc.expand("$home$", TnId(1), "en"), "Home");
		assert_eq!(loc.expand("Go $home$!", TnId(1), "de-DE,en;q=0.5"), "Go Startseite!");
	}

	#[test]
	fn test_language_fallbacks() {
		let loc = localizer();
		// Unknown language falls back to the default language
		assert_eq!(loc.expand("$home$", TnId(1), "ru"), "Home");
		// No default language translation: first available
		assert_eq!(loc.expand("$news$", TnId(1), "en"), "Actualités");
		// Empty language list
		assert_eq!(loc.expand("$home$", TnId(1), ""), "Home");
	}

	#[test]
	fn test_unresolved_stays_literal() {
		let loc = localizer();
		assert_eq!(loc.expand("$missing$", TnId(1), "en"), "$missing$");
		assert_eq!(loc.expand("$empty$", TnId(1), "en"), "$empty$");
		assert_eq!(loc.expand("$home$", TnId(2), "en"), "$home$");
		assert_eq!(loc.expand("$home$", TnId(0), "en"), "$home$");
		assert_eq!(loc.expand("costs 5$", TnId(1), "en"), "costs 5$");
		assert_eq!(loc.expand("$$", TnId(1), "en"), "$$");
	}

	#[test]
	fn test_stray_dollar_does_not_swallow_macro() {
		let loc = localizer();
		assert_eq!(loc.expand("Price $ 5 $home$", TnId(1), "en"), "Price $ 5 Home");
	}

	#[test]
	fn test_long_or_control_names_abort() {
		let loc = localizer();
		let long = format!("${}$", "x".repeat(70));
		assert_eq!(loc.expand(&long, TnId(1), "en"), long);
		assert_eq!(loc.expand("$ho\nme$home$", TnId(1), "en"), "$ho\nmeHome");
	}

	#[test]
	fn test_noop_localizer() {
		assert_eq!(NoopLocalizer.expand("$home$", TnId(1), "en"), "$home$");
	}
}

// vim: ts=4
