//! The `@isoDate` directive replaces the value of a field with the current time as an ISO-8601
//! string, such as `2019-09-04T13:49:12.585158+00:00`.
//!
//! On a field selection it runs as an async-graphql executable directive, see [`iso_date`].
//! On a field definition it runs through [`IsoDateExtension`].

mod args;
pub mod clock;
mod config;
mod directive;
mod error;
mod extension;
mod format;

use async_graphql::{ObjectType, SchemaBuilder, SubscriptionType};

pub use args::IsoDateArgs;
pub use config::{IsoDateConfig, LocalOffset};
pub use directive::iso_date;
pub use error::Error;
pub use extension::IsoDateExtension;
pub use format::{Instant, TimestampFormatter};

pub const ISO_DATE_DIRECTIVE: &str = "isoDate";

/// The definition of the directive, for SDL-first schemas.
pub const ISO_DATE_SDL: &str = "directive @isoDate(microseconds: Boolean! = true, timezone: Boolean! = true, utc: Boolean! = true) on FIELD_DEFINITION | FIELD\n";

/// Registers `@isoDate` for field selections, reading the system clock as configured.
pub fn bake<Query, Mutation, Subscription>(
    builder: SchemaBuilder<Query, Mutation, Subscription>,
    config: &IsoDateConfig,
) -> SchemaBuilder<Query, Mutation, Subscription>
where
    Query: ObjectType + 'static,
    Mutation: ObjectType + 'static,
    Subscription: SubscriptionType + 'static,
{
    tracing::debug!(
        logger = config.logger.as_deref(),
        local_offset = %config.local_offset,
        "registering @isoDate"
    );

    builder
        .directive(iso_date)
        .data(TimestampFormatter::system(config))
}
