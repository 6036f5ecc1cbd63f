//! Service model and icon mapping

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Icon rendered next to a service card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceIcon {
    Smartphone,
    #[default]
    Wrench,
    Cpu,
    Code,
    Tablet,
    Package,
}

/// Key <-> icon lookup table. Unknown keys fall back to `ServiceIcon::default()`.
const ICON_TABLE: &[(&str, ServiceIcon)] = &[
    ("smartphone", ServiceIcon::Smartphone),
    ("wrench", ServiceIcon::Wrench),
    ("cpu", ServiceIcon::Cpu),
    ("code", ServiceIcon::Code),
    ("tablet", ServiceIcon::Tablet),
    ("package", ServiceIcon::Package),
];

impl ServiceIcon {
    /// Resolve an icon key, case-insensitively
    pub fn from_key(key: &str) -> Self {
        let key = key.trim();
        ICON_TABLE
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        ICON_TABLE
            .iter()
            .find(|(_, icon)| *icon == self)
            .map(|(k, _)| *k)
            .unwrap_or("wrench")
    }
}

impl std::fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for ServiceIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ServiceIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}

/// A repair offering shown on the marketing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: ServiceIcon,
    #[serde(default)]
    pub featured: bool,
}
