//! Seed catalog rendered by the browsing pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Product storage belongs to the backend; this module carries the season's
//! merchandising data that ships with the storefront build. Lookups are by
//! URL slug and return `None` for unknown slugs so pages can render a 404.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A top-level shop section, e.g. outerwear.
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub slug: &'static str,
    pub name: &'static str,
    /// Slug of the owning [`Category`].
    pub category: &'static str,
    pub price_cents: u32,
    /// Price shown to signed-in members.
    pub member_price_cents: u32,
    pub colors: &'static [&'static str],
    pub sizes: &'static [&'static str],
    pub description: &'static str,
    /// Shown on the home page.
    pub featured: bool,
    pub image: &'static str,
}

impl Product {
    /// Whole-percent member saving, rounded down.
    pub fn member_discount_percent(&self) -> u32 {
        if self.price_cents == 0 || self.member_price_cents >= self.price_cents {
            return 0;
        }
        (self.price_cents - self.member_price_cents) * 100 / self.price_cents
    }
}

const APPAREL_SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
const ONE_SIZE: &[&str] = &["One size"];

static CATEGORIES: &[Category] = &[
    Category {
        slug: "outerwear",
        name: "Outerwear",
        tagline: "Shells and insulation built for ridge weather.",
        image: "/images/categories/outerwear.jpg",
    },
    Category {
        slug: "knitwear",
        name: "Knitwear",
        tagline: "Merino and wool layers for cold mornings.",
        image: "/images/categories/knitwear.jpg",
    },
    Category {
        slug: "essentials",
        name: "Essentials",
        tagline: "Everyday tees, bases and trail pants.",
        image: "/images/categories/essentials.jpg",
    },
    Category {
        slug: "accessories",
        name: "Accessories",
        tagline: "Caps, beanies and packs to finish the kit.",
        image: "/images/categories/accessories.jpg",
    },
];

static PRODUCTS: &[Product] = &[
    Product {
        slug: "alpine-shell",
        name: "Alpine Shell Jacket",
        category: "outerwear",
        price_cents: 28_800,
        member_price_cents: 25_900,
        colors: &["Slate", "Ember", "Moss"],
        sizes: APPAREL_SIZES,
        description: "Three-layer waterproof shell with pit zips and a helmet-compatible hood.",
        featured: true,
        image: "/images/products/alpine-shell.jpg",
    },
    Product {
        slug: "summit-down-parka",
        name: "Summit Down Parka",
        category: "outerwear",
        price_cents: 39_500,
        member_price_cents: 35_500,
        colors: &["Black", "Glacier"],
        sizes: APPAREL_SIZES,
        description: "800-fill responsibly sourced down under a wind-proof face fabric.",
        featured: false,
        image: "/images/products/summit-down-parka.jpg",
    },
    Product {
        slug: "fieldhouse-fleece",
        name: "Fieldhouse Fleece",
        category: "outerwear",
        price_cents: 12_800,
        member_price_cents: 11_500,
        colors: &["Oat", "Forest"],
        sizes: APPAREL_SIZES,
        description: "High-loft recycled fleece with a stand collar and zip hand pockets.",
        featured: false,
        image: "/images/products/fieldhouse-fleece.jpg",
    },
    Product {
        slug: "merino-crew",
        name: "Merino Crew Sweater",
        category: "knitwear",
        price_cents: 14_800,
        member_price_cents: 13_300,
        colors: &["Charcoal", "Rust", "Cream"],
        sizes: APPAREL_SIZES,
        description: "Fine-gauge 18.5 micron merino that regulates warmth on the move.",
        featured: true,
        image: "/images/products/merino-crew.jpg",
    },
    Product {
        slug: "cable-cardigan",
        name: "Cable Knit Cardigan",
        category: "knitwear",
        price_cents: 17_800,
        member_price_cents: 16_000,
        colors: &["Heather Grey"],
        sizes: APPAREL_SIZES,
        description: "Chunky lambswool cable knit with horn buttons.",
        featured: false,
        image: "/images/products/cable-cardigan.jpg",
    },
    Product {
        slug: "trail-tee",
        name: "Trail Tee",
        category: "essentials",
        price_cents: 4_200,
        member_price_cents: 3_800,
        colors: &["White", "Black", "Sage"],
        sizes: APPAREL_SIZES,
        description: "Lightweight tencel blend tee that dries fast.",
        featured: true,
        image: "/images/products/trail-tee.jpg",
    },
    Product {
        slug: "ridge-pant",
        name: "Ridge Pant",
        category: "essentials",
        price_cents: 11_000,
        member_price_cents: 9_900,
        colors: &["Khaki", "Graphite"],
        sizes: APPAREL_SIZES,
        description: "Four-way stretch hiking pant with a gusseted crotch.",
        featured: false,
        image: "/images/products/ridge-pant.jpg",
    },
    Product {
        slug: "waxed-cap",
        name: "Waxed Canvas Cap",
        category: "accessories",
        price_cents: 3_800,
        member_price_cents: 3_400,
        colors: &["Tan", "Navy"],
        sizes: ONE_SIZE,
        description: "Six-panel cap in waxed cotton canvas with a leather strap.",
        featured: false,
        image: "/images/products/waxed-cap.jpg",
    },
    Product {
        slug: "ridge-beanie",
        name: "Ridge Beanie",
        category: "accessories",
        price_cents: 3_200,
        member_price_cents: 2_900,
        colors: &["Ember", "Charcoal", "Moss"],
        sizes: ONE_SIZE,
        description: "Ribbed merino beanie with a turned cuff.",
        featured: true,
        image: "/images/products/ridge-beanie.jpg",
    },
];

pub fn categories() -> &'static [Category] {
    CATEGORIES
}

pub fn products() -> &'static [Product] {
    PRODUCTS
}

pub fn find_category(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

pub fn find_product(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.slug == slug)
}

/// Products of one category in merchandising order.
pub fn products_in(category: &str) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.category == category).collect()
}

pub fn featured() -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.featured).collect()
}

/// Format a USD amount in cents, e.g. `28800` -> `$288.00`.
pub fn format_price(cents: u32) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{rest:02}")
}
