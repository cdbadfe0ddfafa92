use std::fmt;

/// Configuration of the `@isoDate` directive.
///
/// ```toml
/// local_offset = "current"
/// logger = "my_app::timestamps"
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IsoDateConfig {
    /// Which offset is attached to local timestamps (`utc: false`).
    /// `standard` by default.
    pub local_offset: LocalOffset,
    /// Name recorded as the `logger` field of every event the directive emits.
    pub logger: Option<String>,
}

impl IsoDateConfig {
    pub fn from_toml(input: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(input)?)
    }
}

/// The offset suffix of a local timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalOffset {
    /// The timezone's standard-time offset, whatever the date. Timestamps taken while daylight
    /// saving is in effect carry the DST wall-clock time with the standard offset.
    #[default]
    Standard,
    /// The timezone's daylight-saving offset, whatever the date. Timestamps taken in winter
    /// carry the standard wall-clock time with the daylight offset.
    Daylight,
    /// The offset in effect at the moment the timestamp is taken.
    Current,
}

impl LocalOffset {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocalOffset::Standard => "standard",
            LocalOffset::Daylight => "daylight",
            LocalOffset::Current => "current",
        }
    }
}

impl fmt::Display for LocalOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
