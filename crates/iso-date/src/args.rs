use async_graphql::Value;
use async_graphql_parser::types::ConstDirective;

use crate::Error;

/// The arguments of one `@isoDate` usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDateArgs {
    /// Keep the six-digit fraction of a second.
    pub microseconds: bool,
    /// Append the `±HH:MM` offset.
    pub timezone: bool,
    /// Read UTC instead of local wall-clock time.
    pub utc: bool,
}

impl Default for IsoDateArgs {
    fn default() -> Self {
        Self {
            microseconds: true,
            timezone: true,
            utc: true,
        }
    }
}

impl IsoDateArgs {
    /// Reads the arguments of an `@isoDate` directive found in SDL. Missing arguments keep their
    /// declared default.
    pub fn from_directive(field: &str, directive: &ConstDirective) -> Result<Self, Error> {
        let mut args = Self::default();

        for (name, value) in &directive.arguments {
            let slot = match name.node.as_str() {
                "microseconds" => &mut args.microseconds,
                "timezone" => &mut args.timezone,
                "utc" => &mut args.utc,
                other => {
                    return Err(Error::UnknownArgument {
                        field: field.to_string(),
                        argument: other.to_string(),
                    })
                }
            };

            match &value.node {
                Value::Boolean(flag) => *slot = *flag,
                other => {
                    return Err(Error::InvalidArgument {
                        field: field.to_string(),
                        argument: name.node.to_string(),
                        value: other.to_string(),
                    })
                }
            }
        }

        Ok(args)
    }
}
