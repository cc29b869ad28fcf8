use serde::{de, Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

/// Deserializes an optional query value, treating an empty value as absent.
///
/// `?sea=` then behaves exactly like omitting `sea`. Any other value, whitespace
/// included, is kept exactly as sent so string filters stay literal.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserializes an optional number, ignoring surrounding whitespace.
fn number_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Deserializes an optional flag, accepting the usual query-string spellings.
///
/// `true`, `1`, `yes`, `on`, `t` and `y` are true; `false`, `0`, `no`, `off`, `f`
/// and `n` are false, all case-insensitive.
fn flag_or_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_flag(s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{}` is not a boolean", s))),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParam {
    #[serde(default, deserialize_with = "number_or_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CrewListParam {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sea: Option<String>,
    #[serde(default, deserialize_with = "flag_or_none")]
    pub crew_of_month: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberListParam {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub crew_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventListParam {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedParam {
    #[serde(default, deserialize_with = "flag_or_none")]
    pub force: Option<bool>,
}
