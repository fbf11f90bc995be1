// crates/countries-core/src/model.rs

//! The country record as it appears in the dataset, and the five regions the
//! list view filters on.

use crate::error::DirectoryError;
use crate::text::{equals_folded, join_names};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A country entry.
///
/// Read-only: records are deserialized from the dataset and never mutated.
/// Field names follow the camelCase layout of the JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub population: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub top_level_domain: Vec<String>,
    /// `None` when the record has no currencies field at all.
    #[serde(default, deserialize_with = "keyed")]
    pub currencies: Option<Vec<Currency>>,
    /// `None` when the record has no languages field at all.
    #[serde(default, deserialize_with = "keyed")]
    pub languages: Option<Vec<Language>>,
    /// Alpha-3 codes of neighbouring countries, in dataset order.
    #[serde(default, deserialize_with = "null_default")]
    pub borders: Vec<String>,
    #[serde(default)]
    pub alpha2_code: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub alpha3_code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub flags: Flags,
    #[serde(default)]
    pub flag: Option<String>,
}

/// A currency descriptor. `code` is taken from the map key when the dataset
/// keys currencies by code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A language descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(default, alias = "iso639_1")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
}

/// Flag image references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3_code
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn native_name(&self) -> Option<&str> {
        self.native_name.as_deref()
    }

    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    /// The flag image URL: `flags.svg`, then `flags.png`, then `flag`.
    pub fn flag_url(&self) -> Option<&str> {
        self.flags
            .svg
            .as_deref()
            .or(self.flags.png.as_deref())
            .or(self.flag.as_deref())
    }

    /// Currency names joined with `", "`; `None` if the field is absent.
    ///
    /// A present but empty field yields `Some("")`.
    pub fn currency_names(&self) -> Option<String> {
        self.currencies.as_ref().map(|list| {
            join_names(list.iter().map(|c| c.name.as_str())).unwrap_or_default()
        })
    }

    /// Language names joined with `", "`; `None` if the field is absent.
    pub fn language_names(&self) -> Option<String> {
        self.languages.as_ref().map(|list| {
            join_names(list.iter().map(|l| l.name.as_str())).unwrap_or_default()
        })
    }

    /// Top-level domains joined with `", "`.
    pub fn top_level_domain(&self) -> String {
        self.top_level_domain.join(", ")
    }
}

// -----------------------------------------------------------------------------
// Region
// -----------------------------------------------------------------------------

/// The five regions offered by the list view's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    /// All regions, in the order the filter menu lists them.
    pub const ALL: [Region; 5] = [
        Region::Africa,
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }

    /// Case-insensitive comparison against a record's region string.
    pub fn matches(self, region: &str) -> bool {
        equals_folded(self.as_str(), region)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.matches(s))
            .ok_or_else(|| DirectoryError::UnknownRegion(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
// Lenient field shapes
// -----------------------------------------------------------------------------

/// Descriptors that can take their code from an enclosing map key.
trait Coded {
    fn fill_code(&mut self, code: String);
}

impl Coded for Currency {
    fn fill_code(&mut self, code: String) {
        self.code.get_or_insert(code);
    }
}

impl Coded for Language {
    fn fill_code(&mut self, code: String) {
        self.code.get_or_insert(code);
    }
}

/// Map entries kept in document order.
struct OrderedEntries<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedEntries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = OrderedEntries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of code to descriptor")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    out.push((key, value));
                }
                Ok(OrderedEntries(out))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Keyed<T> {
    List(Vec<T>),
    Map(OrderedEntries<T>),
}

/// Accepts `{"EUR": {...}}` or `[{"code": "EUR", ...}]`; `null` is absent.
fn keyed<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Coded,
{
    let value = Option::<Keyed<T>>::deserialize(deserializer)?;
    Ok(value.map(|keyed| match keyed {
        Keyed::List(list) => list,
        Keyed::Map(OrderedEntries(entries)) => entries
            .into_iter()
            .map(|(code, mut item)| {
                item.fill_code(code);
                item
            })
            .collect(),
    }))
}

/// Reads `null` as the field's default, like an absent field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Country {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn currencies_keyed_by_code_keep_document_order() {
        let c = parse(
            r#"{"name": "Panama", "currencies": {
                "PAB": {"name": "Panamanian balboa", "symbol": "B/."},
                "USD": {"name": "United States dollar", "symbol": "$"}
            }}"#,
        );
        let currencies = c.currencies.as_ref().unwrap();
        assert_eq!(currencies[0].code.as_deref(), Some("PAB"));
        assert_eq!(currencies[1].code.as_deref(), Some("USD"));
        assert_eq!(
            c.currency_names().as_deref(),
            Some("Panamanian balboa, United States dollar")
        );
    }

    #[test]
    fn currencies_as_array() {
        let c = parse(
            r#"{"name": "France", "currencies": [{"code": "EUR", "name": "Euro", "symbol": "€"}],
                "languages": [{"iso639_1": "fr", "iso639_2": "fra", "name": "French", "nativeName": "français"}]}"#,
        );
        assert_eq!(c.currency_names().as_deref(), Some("Euro"));
        assert_eq!(c.language_names().as_deref(), Some("French"));
        assert_eq!(c.languages.unwrap()[0].code.as_deref(), Some("fr"));
    }

    #[test]
    fn absent_fields_are_distinguished_from_empty() {
        let c = parse(r#"{"name": "Antarctica", "currencies": null}"#);
        assert_eq!(c.currency_names(), None);
        assert_eq!(c.language_names(), None);

        let c = parse(r#"{"name": "Nowhere", "languages": []}"#);
        assert_eq!(c.language_names().as_deref(), Some(""));
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let c = parse(
            r#"{"name": "Bouvet Island", "population": null, "region": null, "borders": null,
                "alpha3Code": null, "flags": null, "topLevelDomain": null}"#,
        );
        assert_eq!(c.population, 0);
        assert_eq!(c.region, "");
        assert!(c.borders.is_empty());
        assert_eq!(c.alpha3_code, "");
        assert_eq!(c.flags, Flags::default());
        assert_eq!(c.flag_url(), None);
    }

    #[test]
    fn null_names_inside_currencies_and_languages() {
        let c = parse(
            r#"{"name": "A", "currencies": [{"code": "(none)", "name": null, "symbol": null}],
                "languages": {"xx": {"name": null}}}"#,
        );
        let currencies = c.currencies.as_ref().unwrap();
        assert_eq!(currencies[0].code.as_deref(), Some("(none)"));
        assert_eq!(currencies[0].name, "");
        assert_eq!(currencies[0].symbol, None);
        assert_eq!(c.languages.as_ref().unwrap()[0].name, "");
    }

    #[test]
    fn top_level_domain_accepts_string_or_list() {
        assert_eq!(parse(r#"{"name": "A", "topLevelDomain": ".a"}"#).top_level_domain(), ".a");
        assert_eq!(
            parse(r#"{"name": "B", "topLevelDomain": [".b", ".bb"]}"#).top_level_domain(),
            ".b, .bb"
        );
        assert_eq!(parse(r#"{"name": "C"}"#).top_level_domain(), "");
    }

    #[test]
    fn flag_url_falls_back() {
        let c = parse(r#"{"name": "A", "flags": {"png": "a.png"}, "flag": "a.svg"}"#);
        assert_eq!(c.flag_url(), Some("a.png"));
        let c = parse(r#"{"name": "B", "flag": "b.svg"}"#);
        assert_eq!(c.flag_url(), Some("b.svg"));
    }

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!(" AMERICAS ".parse::<Region>().unwrap(), Region::Americas);
        assert!(matches!(
            "Polar".parse::<Region>(),
            Err(DirectoryError::UnknownRegion(_))
        ));
        assert!(Region::Asia.matches("ASIA"));
    }
}
