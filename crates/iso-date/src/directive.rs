use async_graphql::{Context, CustomDirective, Directive, ResolveFut, ServerResult, Value};

use crate::{IsoDateArgs, TimestampFormatter};

struct IsoDateDirective {
    args: IsoDateArgs,
}

#[async_trait::async_trait]
impl CustomDirective for IsoDateDirective {
    async fn resolve_field(&self, ctx: &Context<'_>, resolve: ResolveFut<'_>) -> ServerResult<Option<Value>> {
        // The field still resolves, so its errors surface, but its value is dropped.
        resolve.await?;

        let formatter = TimestampFormatter::from_data(ctx.data_opt());
        let timestamp = formatter.format(self.args);

        tracing::trace!(
            logger = formatter.logger(),
            field = ctx.field().name(),
            %timestamp,
            "@isoDate replaced field value"
        );

        Ok(Some(Value::String(timestamp)))
    }
}

/// `@isoDate` on a field selection. Register it with
/// [`SchemaBuilder::directive`](async_graphql::SchemaBuilder::directive), or use [`crate::bake`].
#[Directive(name = "isoDate", location = "Field")]
pub fn iso_date(
    #[graphql(default = true, desc = "Keep the six-digit fraction of a second.")] microseconds: bool,
    #[graphql(default = true, desc = "Append the UTC offset.")] timezone: bool,
    #[graphql(default = true, desc = "Use UTC instead of local time.")] utc: bool,
) -> impl CustomDirective {
    IsoDateDirective {
        args: IsoDateArgs {
            microseconds,
            timezone,
            utc,
        },
    }
}
