//! Renders product cards and pages through the catalog with the load-more control.

use std::time::Duration;

use leptos::{html::Article, *};
use storefront_core::{default_catalog, DisplayMode, Product, ProductLoader, StorefrontConfig};
use web_sys::{Document, Element, MouseEvent};

use crate::{
    dom::{listen, set_class, DomError},
    markup::{
        ALL_PRODUCTS_ID, LOAD_MORE_EXHAUSTED_LABEL, LOAD_MORE_ID, PRODUCT_GRID_ID, VISIBLE_CLASS,
    },
};

fn product_card(product: &Product) -> HtmlElement<Article> {
    view! {
        <article class="product-card" data-product-id=product.id.to_string()>
            <img src=product.image_url.clone() alt=product.title.clone() loading="lazy" />
            <h3 class="product-title">{product.title.clone()}</h3>
            <p class="product-price">{product.price.clone()}</p>
            <button
                type="button"
                class="btn open-modal"
                data-modal-src=product.quick_view_image_url()
            >
                "Quick view"
            </button>
        </article>
    }
}

fn render_products(container: &Element, products: &[Product], reveal_delay: Duration) {
    for product in products {
        let card = product_card(product);
        let card: &Element = &card;
        if container.append_child(card).is_err() {
            continue;
        }
        let card = card.clone();
        set_timeout(move || set_class(&card, VISIBLE_CLASS, true), reveal_delay);
    }
}

fn mark_exhausted(control: &Element) {
    control.set_text_content(Some(LOAD_MORE_EXHAUSTED_LABEL));
    let _ = control.set_attribute("disabled", "");
    let _ = control.set_attribute("aria-disabled", "true");
}

/// Renders the product listing and wires `#load-more`. Returns `false` without a container.
pub(crate) fn attach_product_listing(
    document: &Document,
    config: &StorefrontConfig,
) -> Result<bool, DomError> {
    let all_products = document.get_element_by_id(ALL_PRODUCTS_ID);
    let grid = document.get_element_by_id(PRODUCT_GRID_ID);
    let Some(mode) = DisplayMode::detect(all_products.is_some(), grid.is_some()) else {
        return Ok(false);
    };
    let Some(container) = all_products.or(grid) else {
        return Ok(false);
    };

    let reveal_delay = config.card_reveal_delay();
    let loader = ProductLoader::new(default_catalog(), config.page_size);
    render_products(&container, loader.initial_page(mode), reveal_delay);

    let Some(control) = document.get_element_by_id(LOAD_MORE_ID) else {
        return Ok(true);
    };
    let loader = store_value(loader);
    listen::<MouseEvent>(&control.clone(), "click", move |ev| {
        ev.prevent_default();
        let Some((products, exhausted)) = loader.try_update_value(|loader| {
            let outcome = loader.load_more();
            (outcome.products.to_vec(), outcome.exhausted)
        }) else {
            return;
        };
        render_products(&container, &products, reveal_delay);
        if exhausted {
            mark_exhausted(&control);
        }
    })?;
    Ok(true)
}
