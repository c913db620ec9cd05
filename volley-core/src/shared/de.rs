/// Deserialize a `String` as the desired type.
///
/// Binance encodes most numeric fields as strings, e.g. `"price": "0.1"`,
/// so responses lean on this for each numeric field.
pub fn de_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::de::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let data: &str = serde::de::Deserialize::deserialize(deserializer)?;
    data.parse::<T>().map_err(serde::de::Error::custom)
}
