/// Errors raised while setting up the directive. Formatting itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The SDL handed to [`crate::IsoDateExtension::from_sdl`] does not parse.
    #[error("could not parse SDL: {0}")]
    Sdl(#[from] async_graphql_parser::Error),
    #[error("@isoDate on `{field}` has an unknown argument `{argument}`")]
    UnknownArgument { field: String, argument: String },
    #[error("@isoDate on `{field}` expects a boolean for `{argument}`, got `{value}`")]
    InvalidArgument {
        field: String,
        argument: String,
        value: String,
    },
    #[error("invalid @isoDate configuration: {0}")]
    Config(#[from] toml::de::Error),
}
