// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort();

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI argument
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_cli_locale_is_ignored() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available);
        // Falls through to config/OS resolution; never an unavailable locale.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n
            .available_locales
            .contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn tr_returns_translation_for_known_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("window-title"), "QRS-Me");
    }

    #[test]
    fn tr_flags_missing_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_rejects_unavailable() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("xx-YY".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn set_locale_switches_translations() {
        let mut i18n = I18n::default();
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_ne!(i18n.tr("nav-company"), "MISSING: nav-company");
    }
}
