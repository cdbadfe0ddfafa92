use std::{collections::HashMap, sync::Arc};

use async_graphql::{
    extensions::{Extension, ExtensionContext, ExtensionFactory, NextResolve, ResolveInfo},
    ServerResult, Value,
};
use async_graphql_parser::types::{TypeKind, TypeSystemDefinition};

use crate::{Error, IsoDateArgs, TimestampFormatter, ISO_DATE_DIRECTIVE};

type Sites = HashMap<String, HashMap<String, IsoDateArgs>>;

/// `@isoDate` on field definitions.
///
/// async-graphql does not run type-system directives, so the annotated fields are registered
/// here, one by one with [`IsoDateExtension::field`] or all at once from SDL with
/// [`IsoDateExtension::from_sdl`].
#[derive(Debug, Clone, Default)]
pub struct IsoDateExtension {
    sites: Arc<Sites>,
    formatter: Option<TimestampFormatter>,
}

impl IsoDateExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every object field carrying `@isoDate`, `extend type` included.
    pub fn from_sdl(sdl: &str) -> Result<Self, Error> {
        let document = async_graphql_parser::parse_schema(sdl)?;
        let mut extension = Self::new();

        for definition in &document.definitions {
            let TypeSystemDefinition::Type(definition) = definition else {
                continue;
            };

            let TypeKind::Object(ref object) = definition.node.kind else {
                continue;
            };

            let type_name = definition.node.name.node.as_str();

            for field in &object.fields {
                let Some(directive) = field
                    .node
                    .directives
                    .iter()
                    .find(|directive| directive.node.name.node.as_str() == ISO_DATE_DIRECTIVE)
                else {
                    continue;
                };

                let field_name = field.node.name.node.as_str();
                let args = IsoDateArgs::from_directive(&format!("{type_name}.{field_name}"), &directive.node)?;

                extension = extension.field(type_name, field_name, args);
            }
        }

        tracing::debug!(sites = extension.len(), "collected @isoDate fields from SDL");

        Ok(extension)
    }

    pub fn field(mut self, type_name: impl Into<String>, field_name: impl Into<String>, args: IsoDateArgs) -> Self {
        Arc::make_mut(&mut self.sites)
            .entry(type_name.into())
            .or_default()
            .insert(field_name.into(), args);

        self
    }

    /// Formats with `formatter` instead of the one found in schema data.
    pub fn with_formatter(mut self, formatter: TimestampFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn args(&self, type_name: &str, field_name: &str) -> Option<IsoDateArgs> {
        self.sites.get(type_name)?.get(field_name).copied()
    }

    /// The number of annotated fields.
    pub fn len(&self) -> usize {
        self.sites.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExtensionFactory for IsoDateExtension {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(IsoDateResolve {
            sites: self.sites.clone(),
            formatter: self.formatter.clone(),
        })
    }
}

struct IsoDateResolve {
    sites: Arc<Sites>,
    formatter: Option<TimestampFormatter>,
}

#[async_trait::async_trait]
impl Extension for IsoDateResolve {
    async fn resolve(
        &self,
        ctx: &ExtensionContext<'_>,
        info: ResolveInfo<'_>,
        next: NextResolve<'_>,
    ) -> ServerResult<Option<Value>> {
        let (parent_type, field_name) = (info.parent_type, info.name);

        let Some(args) = self
            .sites
            .get(parent_type)
            .and_then(|fields| fields.get(field_name))
            .copied()
        else {
            return next.run(ctx, info).await;
        };

        next.run(ctx, info).await?;

        let formatter = TimestampFormatter::from_data(self.formatter.as_ref().or_else(|| ctx.data_opt()));
        let timestamp = formatter.format(args);

        tracing::trace!(
            logger = formatter.logger(),
            parent_type,
            field = field_name,
            %timestamp,
            "@isoDate replaced field value"
        );

        Ok(Some(Value::String(timestamp)))
    }
}
