//! Design generation: deterministic RNG, fixed catalogs and the seed-driven
//! selector that turns a 32-bit seed into a [`Design`].

mod catalog;
mod rng;
mod selector;

pub use catalog::{
    palettes_of, FontFamily, Mode, Palette, Template, CANONICAL_PAPER, CATALOG_VERSION, FONTS,
    PALETTES, TEMPLATES,
};
pub use rng::{random_seed, StoryRng};
pub use selector::{
    create_design, create_design_with, create_designs, derive_seed, Decorations, Design,
    DesignOverrides,
};
