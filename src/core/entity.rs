//! Closed value sets shared by all dataset records
//!
//! Every enumerated field in the dataset (status, priority, risk level, ...)
//! takes its value from a fixed set. Values outside that set never fail a
//! load: they deserialize to the `Unknown` variant, which renders with the
//! neutral fallback descriptor.

/// Display descriptor for one member of a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Descriptor {
    /// Human readable label
    pub label: &'static str,
    /// Color token used by the presentation layer
    pub color: &'static str,
}

impl Descriptor {
    /// Descriptor used for unrecognized values
    pub const FALLBACK: Descriptor = Descriptor::new("N/A", "gray");

    pub const fn new(label: &'static str, color: &'static str) -> Self {
        Self { label, color }
    }
}

/// A closed, ordered set of values with a display descriptor per member
///
/// `ALL` fixes the display order used by tallies. The fallback `Unknown`
/// member is always last.
pub trait Category: Copy + Eq + std::fmt::Debug + 'static {
    /// Every member, in display order
    const ALL: &'static [Self];

    /// Wire name of this member (e.g. "on-track")
    fn key(&self) -> &'static str;

    /// Label and color for this member
    fn descriptor(&self) -> Descriptor;
}

/// Normalize a raw wire value before matching it against a closed set
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['_', ' '], "-")
}

/// Parse a raw value, falling back to `Unknown` and logging the anomaly
pub(crate) fn parse_or_fallback<T>(raw: &str, fallback: T, what: &str) -> T
where
    T: std::str::FromStr,
{
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(value = raw, field = what, "unrecognized value, using fallback");
            fallback
        }
    }
}

/// A raw enumerated value as found in a document, before matching
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawValue {
    /// Explicit null (`~` in YAML)
    Null,
    Text(String),
    /// A number, boolean or collection, rendered for logging
    Other(String),
}

impl RawValue {
    /// Resolve against a closed set; anything but a recognized string is `fallback`
    pub(crate) fn resolve<T: std::str::FromStr>(self, fallback: T, what: &str) -> T {
        match self {
            RawValue::Null => fallback,
            RawValue::Text(raw) => parse_or_fallback(&raw, fallback, what),
            RawValue::Other(raw) => {
                tracing::warn!(value = %raw, field = what, "unrecognized value, using fallback");
                fallback
            }
        }
    }
}

struct RawValueVisitor;

impl<'de> serde::de::Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string value")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::Text(v))
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Other(v.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Other(v.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::Other(v.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Other(v.to_string()))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_some<D: serde::Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(RawValue::Other("[sequence]".to_string()))
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        while map
            .next_entry::<serde::de::IgnoredAny, serde::de::IgnoredAny>()?
            .is_some()
        {}
        Ok(RawValue::Other("{mapping}".to_string()))
    }
}

impl<'de> serde::Deserialize<'de> for RawValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

#[doc(hidden)]
pub(crate) fn matches_wire(raw: &str, wire: &str) -> bool {
    normalize(raw) == wire
}

/// Declare a closed value set.
///
/// Generates the enum (plus an `Unknown` fallback member), `Display`,
/// `FromStr`, serde support through the wire names, and the [`Category`]
/// descriptor table.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($wire:literal, $label:literal, $color:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Value outside the recognized set
            #[default]
            Unknown,
        }

        impl $name {
            /// Wire name of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown => "unknown",
                }
            }

            /// Whether this value belongs to the recognized set
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }
        }

        impl $crate::core::entity::Category for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+ $name::Unknown];

            fn key(&self) -> &'static str {
                self.as_str()
            }

            fn descriptor(&self) -> $crate::core::entity::Descriptor {
                match self {
                    $($name::$variant => $crate::core::entity::Descriptor::new($label, $color),)+
                    $name::Unknown => $crate::core::entity::Descriptor::FALLBACK,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if $crate::core::entity::matches_wire(s, $wire) {
                        return Ok($name::$variant);
                    }
                )+
                Err(format!("Unknown {}: {}", $what, s))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $crate::core::entity::parse_or_fallback(raw, $name::Unknown, $what)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <$crate::core::entity::RawValue as serde::Deserialize>::deserialize(deserializer)?;
                Ok(raw.resolve($name::Unknown, $what))
            }
        }
    };
}

pub(crate) use closed_set;

closed_set! {
    /// Three-level classification used for risk impact/probability,
    /// decision option risk and coordination priority
    pub enum Level ("level") {
        High => ("high", "High", "red"),
        Medium => ("medium", "Medium", "yellow"),
        Low => ("low", "Low", "green"),
    }
}

closed_set! {
    /// Issue priority
    pub enum Priority ("priority") {
        Critical => ("critical", "Critical", "purple"),
        High => ("high", "High", "red"),
        Medium => ("medium", "Medium", "yellow"),
        Low => ("low", "Low", "green"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("high".parse::<Level>(), Ok(Level::High));
        assert_eq!(" Medium ".parse::<Level>(), Ok(Level::Medium));
        assert!("urgent".parse::<Level>().is_err());
    }

    #[test]
    fn test_unknown_value_falls_back() {
        assert_eq!(Level::from("urgent"), Level::Unknown);
        assert_eq!(Priority::from("blocker"), Priority::Unknown);
        assert_eq!(Level::Unknown.descriptor(), Descriptor::FALLBACK);
    }

    #[test]
    fn test_category_order_ends_with_unknown() {
        assert_eq!(Level::ALL.last(), Some(&Level::Unknown));
        assert_eq!(Priority::ALL.first(), Some(&Priority::Critical));
        assert_eq!(Priority::ALL.len(), 5);
    }

    #[test]
    fn test_serde_roundtrip_through_wire_names() {
        let json = serde_json::to_string(&Priority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let parsed: Level = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(parsed, Level::Unknown);
    }

    #[test]
    fn test_null_value_falls_back() {
        let parsed: Level = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Level::Unknown);
        let parsed: Priority = serde_yml::from_str("~").unwrap();
        assert_eq!(parsed, Priority::Unknown);
    }

    #[test]
    fn test_non_string_scalars_fall_back() {
        assert_eq!(serde_json::from_str::<Level>("3").unwrap(), Level::Unknown);
        assert_eq!(serde_json::from_str::<Level>("-1.5").unwrap(), Level::Unknown);
        assert_eq!(serde_json::from_str::<Priority>("true").unwrap(), Priority::Unknown);
        assert_eq!(serde_yml::from_str::<Level>("true").unwrap(), Level::Unknown);
        assert_eq!(serde_yml::from_str::<Level>("42").unwrap(), Level::Unknown);
    }

    #[test]
    fn test_collection_value_falls_back() {
        assert_eq!(serde_json::from_str::<Level>("[\"high\"]").unwrap(), Level::Unknown);
        assert_eq!(serde_json::from_str::<Level>("{\"a\": 1}").unwrap(), Level::Unknown);
    }

    #[test]
    fn test_string_values_still_match_inside_records() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default)]
            level: Level,
        }
        let row: Row = serde_json::from_str(r#"{"level": "High"}"#).unwrap();
        assert_eq!(row.level, Level::High);
        let row: Row = serde_json::from_str(r#"{"level": null}"#).unwrap();
        assert_eq!(row.level, Level::Unknown);
        let row: Row = serde_yml::from_str("level: low\n").unwrap();
        assert_eq!(row.level, Level::Low);
    }

    #[test]
    fn test_display_matches_wire() {
        assert_eq!(Level::Low.to_string(), "low");
        assert_eq!(Priority::Unknown.to_string(), "unknown");
    }
}
