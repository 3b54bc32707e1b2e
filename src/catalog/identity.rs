use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which logical set of builtin scripts a catalog belongs to.
///
/// The set is closed: categories select registry slots and are never stored
/// in blob data, so there is no forward-compatible `Other` variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NativeCategory {
    Core,
    Experimental,
    /// Natives bundled with a host shell rather than the runtime itself.
    HostTool,
    Test,
}

impl NativeCategory {
    /// Every category, in registry slot order.
    pub const ALL: [NativeCategory; 4] = [
        NativeCategory::Core,
        NativeCategory::Experimental,
        NativeCategory::HostTool,
        NativeCategory::Test,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub(crate) fn slot(self) -> usize {
        match self {
            NativeCategory::Core => 0,
            NativeCategory::Experimental => 1,
            NativeCategory::HostTool => 2,
            NativeCategory::Test => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NativeCategory::Core => "core",
            NativeCategory::Experimental => "experimental",
            NativeCategory::HostTool => "host_tool",
            NativeCategory::Test => "test",
        }
    }
}

impl fmt::Display for NativeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NativeCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NativeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| {
                format!("unknown natives category '{value}' (expected core|experimental|host_tool|test)")
            })
    }
}

impl Serialize for NativeCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NativeCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Partition an entry belongs to within its catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    Debugger,
    Library,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_all_order() {
        for (idx, category) in NativeCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.slot(), idx);
        }
        assert_eq!(NativeCategory::COUNT, 4);
    }

    #[test]
    fn category_round_trips_through_json() {
        let json = serde_json::to_string(&NativeCategory::HostTool).unwrap();
        assert_eq!(json, "\"host_tool\"");
        let back: NativeCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NativeCategory::HostTool);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = serde_json::from_str::<NativeCategory>("\"d8\"").unwrap_err();
        assert!(err.to_string().contains("unknown natives category 'd8'"));
        assert!("Core".parse::<NativeCategory>().is_err());
        assert_eq!(
            "experimental".parse::<NativeCategory>().unwrap(),
            NativeCategory::Experimental
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ScriptKind::Debugger).unwrap(),
            "\"debugger\""
        );
    }
}
