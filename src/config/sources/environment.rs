//! Environment source: `CMS_CONTENT__SECTION__KEY` (e.g. `CMS_CONTENT__API__TOKEN`).

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub const ENV_PREFIX: &str = "CMS_CONTENT";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("locales.supported"),
    )
}
