//! Product catalog: footprint dimensions, categories, finishes and colors.
//!
//! Footprint data is advisory. Lookups never fail; unknown variants resolve to
//! the fallback footprint so the placement engine can keep working with
//! objects the catalog has not heard of.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

use crate::consts::{FALLBACK_DEPTH, FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::doc::Category;

/// Physical extent of an object's bounding box, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    /// Extent along the object's local X axis.
    pub width: f64,
    /// Extent along the object's local Z axis.
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    pub const FALLBACK: Self = Self { width: FALLBACK_WIDTH, depth: FALLBACK_DEPTH, height: FALLBACK_HEIGHT };

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[must_use]
    pub fn half_depth(&self) -> f64 {
        self.depth / 2.0
    }
}

/// A registered product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    pub variant: &'static str,
    pub label: &'static str,
    pub dimensions: Dimensions,
    pub category: Category,
}

const fn product(variant: &'static str, label: &'static str, w: f64, d: f64, h: f64, category: Category) -> Product {
    Product { variant, label, dimensions: Dimensions { width: w, depth: d, height: h }, category }
}

/// Every product the catalog knows about.
pub const PRODUCTS: &[Product] = &[
    product("standard", "Betonbank Standaard", 1.5, 0.5, 0.45, Category::Seating),
    product("backrest", "Met Rugleuning", 1.5, 0.5, 0.45, Category::Seating),
    product("planter", "Met Plantenbak", 1.5, 0.5, 0.45, Category::Seating),
    product("solar", "Met Zonnepaneel", 1.5, 0.5, 0.45, Category::Seating),
    product("SF-S1", "Model SF-S1", 0.6, 0.5, 0.45, Category::Seating),
    product("SF-S2", "Model SF-S2", 1.2, 0.5, 0.45, Category::Seating),
    product("tree", "Boom", 0.8, 0.8, 2.0, Category::Environment),
    product("human", "Persoon", 0.5, 0.5, 1.8, Category::Environment),
];

/// Surface finishes available for seating objects.
pub const FINISHES: &[&str] = &["glad", "gezuurd", "uitgewassen"];

/// Colors available for seating objects.
pub const COLORS: &[&str] = &["Groen", "Rood", "Grijs", "Zwart", "Wit", "Lichtgrijs", "Beige"];

/// Look up a registered product by variant tag.
#[must_use]
pub fn product_for(variant: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.variant == variant)
}

/// Footprint of `variant`, or [`Dimensions::FALLBACK`] when it isn't registered.
#[must_use]
pub fn dimensions_of(variant: &str) -> Dimensions {
    product_for(variant).map_or(Dimensions::FALLBACK, |p| p.dimensions)
}

/// Category of `variant`. Unregistered variants are treated as seating.
#[must_use]
pub fn category_of(variant: &str) -> Category {
    product_for(variant).map_or(Category::Seating, |p| p.category)
}

/// Display label of `variant`, if registered.
#[must_use]
pub fn label_of(variant: &str) -> Option<&'static str> {
    product_for(variant).map(|p| p.label)
}

#[must_use]
pub fn is_known_finish(finish: &str) -> bool {
    FINISHES.contains(&finish)
}

#[must_use]
pub fn is_known_color(color: &str) -> bool {
    COLORS.contains(&color)
}
