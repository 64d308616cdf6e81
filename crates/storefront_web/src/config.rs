//! Reads page tunables from the optional inline JSON block.

use leptos::logging;
use storefront_core::StorefrontConfig;
use web_sys::Document;

use crate::markup::CONFIG_ELEMENT_ID;

/// Loads [`StorefrontConfig`] from `<script type="application/json" id="storefront-config">`.
///
/// A missing or empty block means defaults. An invalid block is logged and ignored.
pub fn load_config(document: &Document) -> StorefrontConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    parse_config_block(raw.as_deref())
}

pub(crate) fn parse_config_block(raw: Option<&str>) -> StorefrontConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return StorefrontConfig::default();
    };
    match StorefrontConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("ignoring storefront config block: {err}");
            StorefrontConfig::default()
        }
    }
}
