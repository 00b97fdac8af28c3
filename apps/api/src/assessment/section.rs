//! Product section classification — maps a product name to its manufacturing
//! section, which decides the document-series variants the model is told to
//! prefer (e.g. PMTSEMD for a Stapler vs plain PMTS).

use std::fmt;

/// Products manufactured in Section C. Matching is by case-insensitive
/// containment so "Endo Linear Stapler 60mm" still lands in Section C.
const SECTION_C_PRODUCTS: &[&str] = &[
    "stapler",
    "trocar",
    "iud",
    "sfe",
    "bulk suture",
    "gelatin sponge",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSection {
    SectionC,
    AbSection,
}

impl fmt::Display for ProductSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSection::SectionC => write!(f, "Section C"),
            ProductSection::AbSection => write!(f, "AB Section"),
        }
    }
}

/// Classifies a product name. Anything not recognized as a Section C product
/// falls back to the AB Section (sutures, meshes, adhesives, bonewax).
pub fn classify_product(product_name: &str) -> ProductSection {
    let product_lower = product_name.to_lowercase();
    if SECTION_C_PRODUCTS.iter().any(|p| product_lower.contains(p)) {
        ProductSection::SectionC
    } else {
        ProductSection::AbSection
    }
}
