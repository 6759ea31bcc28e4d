pub fn remove_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Serde adapter for optional numbers that travel as decimal strings.
///
/// `None` must be paired with `skip_serializing_if = "Option::is_none"` and
/// `default` so the field is omitted rather than sent as `null`. Both
/// `"50"` and `50` are accepted when reading.
pub mod opt_string_number {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum N {
            Str(String),
            Int(i64),
            Uint(u64),
        }
        let raw = Option::<N>::deserialize(deserializer)?;
        let text = match raw {
            None => return Ok(None),
            Some(N::Str(s)) if s.is_empty() => return Ok(None),
            Some(N::Str(s)) => s,
            Some(N::Int(n)) => n.to_string(),
            Some(N::Uint(n)) => n.to_string(),
        };
        text.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
