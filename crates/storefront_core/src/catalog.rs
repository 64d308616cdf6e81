//! In-memory product catalog and the "load more" cursor.

use serde::{Deserialize, Serialize};

/// Image width requested for quick-view (modal) images.
pub const QUICK_VIEW_IMAGE_WIDTH: u32 = 1600;

const IMAGE_BASE: &str = "https://images.unsplash.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One catalog entry.
pub struct Product {
    /// Stable product id.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Pre-formatted price label.
    pub price: String,
    /// Card-sized image URL.
    pub image_url: String,
}

impl Product {
    fn new(id: u32, title: &str, price: &str, photo: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            price: price.to_string(),
            image_url: format!("{IMAGE_BASE}/{photo}?auto=format&fit=crop&w=600&q=80"),
        }
    }

    /// Higher-resolution variant of the card image for the quick-view modal.
    pub fn quick_view_image_url(&self) -> String {
        quick_view_image_url(&self.image_url)
    }
}

/// Rewrites the `w=` query parameter of `url` to [`QUICK_VIEW_IMAGE_WIDTH`].
///
/// URLs without a width parameter are returned unchanged.
pub fn quick_view_image_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let params = query
        .split('&')
        .map(|param| {
            if param.starts_with("w=") {
                format!("w={QUICK_VIEW_IMAGE_WIDTH}")
            } else {
                param.to_string()
            }
        })
        .collect::<Vec<_>>();
    format!("{base}?{}", params.join("&"))
}

/// The fixed product list shown on the page.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Linen Throw Pillow", "$34.00", "photo-1584100936595-c0654b55a2e2"),
        Product::new(2, "Stoneware Mug Set", "$28.00", "photo-1514228742587-6b1558fcca3d"),
        Product::new(3, "Walnut Serving Board", "$52.00", "photo-1590794056226-79ef3a8147e1"),
        Product::new(4, "Woven Storage Basket", "$41.00", "photo-1595514535415-dae8580c416c"),
        Product::new(5, "Ceramic Table Lamp", "$89.00", "photo-1507473885765-e6ed057f782c"),
        Product::new(6, "Cotton Waffle Towel", "$22.00", "photo-1600369671236-e74521d4b6ad"),
        Product::new(7, "Glass Carafe", "$31.00", "photo-1544148103-0773bf10d330"),
        Product::new(8, "Brass Candle Holder", "$26.00", "photo-1602874801007-bd458bb1b8b6"),
        Product::new(9, "Wool Blend Blanket", "$118.00", "photo-1580301762395-21ce84d00bc6"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which product container the page provides.
pub enum DisplayMode {
    /// Empty "all products" container; the first page is rendered at load.
    All,
    /// Pre-rendered grid; the first page is already in the markup.
    Grid,
}

impl DisplayMode {
    /// Picks the mode from the containers present. The "all products" container wins.
    pub fn detect(has_all_products: bool, has_grid: bool) -> Option<Self> {
        match (has_all_products, has_grid) {
            (true, _) => Some(Self::All),
            (false, true) => Some(Self::Grid),
            (false, false) => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Result of one "load more" request.
pub struct LoadMoreOutcome<'a> {
    /// Products to append, possibly none.
    pub products: &'a [Product],
    /// The catalog has nothing left to show.
    pub exhausted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Paging cursor over a fixed catalog.
///
/// The offset starts one page in, because the first page is either rendered at load or already
/// part of the markup.
pub struct ProductLoader {
    catalog: Vec<Product>,
    page_size: usize,
    offset: usize,
}

impl ProductLoader {
    /// Creates a loader positioned after the first page. `page_size` is clamped to at least 1.
    pub fn new(catalog: Vec<Product>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            catalog,
            page_size,
            offset: page_size,
        }
    }

    /// Current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether every product has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.catalog.len()
    }

    /// Products to render when the component attaches.
    pub fn initial_page(&self, mode: DisplayMode) -> &[Product] {
        match mode {
            DisplayMode::All => &self.catalog[..self.page_size.min(self.catalog.len())],
            DisplayMode::Grid => &[],
        }
    }

    /// Hands out the next page and advances the cursor by the number of products returned.
    pub fn load_more(&mut self) -> LoadMoreOutcome<'_> {
        let start = self.offset.min(self.catalog.len());
        let end = (start + self.page_size).min(self.catalog.len());
        self.offset += end - start;
        LoadMoreOutcome {
            products: &self.catalog[start..end],
            exhausted: self.offset >= self.catalog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|product| product.id).collect()
    }

    fn six_products() -> Vec<Product> {
        default_catalog().into_iter().take(6).collect()
    }

    #[test]
    fn all_mode_renders_first_page_and_grid_renders_nothing() {
        let loader = ProductLoader::new(default_catalog(), 3);
        assert_eq!(ids(loader.initial_page(DisplayMode::All)), vec![1, 2, 3]);
        assert!(loader.initial_page(DisplayMode::Grid).is_empty());
    }

    #[test]
    fn display_mode_prefers_all_products_container() {
        assert_eq!(DisplayMode::detect(true, true), Some(DisplayMode::All));
        assert_eq!(DisplayMode::detect(false, true), Some(DisplayMode::Grid));
        assert_eq!(DisplayMode::detect(false, false), None);
    }

    #[test]
    fn six_records_exhaust_after_one_click_and_stay_exhausted() {
        let mut loader = ProductLoader::new(six_products(), 3);
        assert_eq!(loader.offset(), 3);

        let first = loader.load_more();
        assert_eq!(ids(first.products), vec![4, 5, 6]);
        assert!(first.exhausted);

        let second = loader.load_more();
        assert!(second.products.is_empty());
        assert!(second.exhausted);
        assert_eq!(loader.offset(), 6);
    }

    #[test]
    fn partial_last_page_advances_by_rendered_count() {
        let mut loader = ProductLoader::new(default_catalog().into_iter().take(7).collect(), 3);

        let first = loader.load_more();
        assert_eq!(ids(first.products), vec![4, 5, 6]);
        assert!(!first.exhausted);

        let second = loader.load_more();
        assert_eq!(ids(second.products), vec![7]);
        assert!(second.exhausted);
        assert_eq!(loader.offset(), 7);
    }

    #[test]
    fn short_catalog_is_exhausted_from_the_start() {
        let mut loader = ProductLoader::new(default_catalog().into_iter().take(2).collect(), 3);
        assert_eq!(ids(loader.initial_page(DisplayMode::All)), vec![1, 2]);
        assert!(loader.is_exhausted());
        assert_eq!(
            loader.load_more(),
            LoadMoreOutcome {
                products: &[],
                exhausted: true,
            }
        );
    }

    #[test]
    fn quick_view_url_rewrites_width_only() {
        let product = &default_catalog()[0];
        let hi_res = product.quick_view_image_url();
        assert!(hi_res.contains("w=1600"));
        assert!(!hi_res.contains("w=600"));
        assert!(hi_res.contains("q=80"));

        assert_eq!(quick_view_image_url("/img/a.jpg"), "/img/a.jpg");
        assert_eq!(quick_view_image_url("/img/a.jpg?v=2"), "/img/a.jpg?v=2");
    }
}
