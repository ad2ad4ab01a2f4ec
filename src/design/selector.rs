//! Seed-driven design selection.

use super::catalog::{
    palettes_of, FontFamily, Mode, Palette, Template, CANONICAL_PAPER, FONTS, PALETTES, TEMPLATES,
};
use super::rng::StoryRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A pattern overlay is drawn when the draw exceeds this value.
const PATTERN_THRESHOLD: f64 = 0.35;

/// An inner glow is drawn when the draw exceeds this value.
const GLOW_THRESHOLD: f64 = 0.4;

/// Odd constant mixed into a seed to derive an independent one.
const DERIVE_MASK: u32 = 0x85EB_CA6B;

/// Decorative layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Decorations {
    pub show_pattern: bool,
    pub show_glow: bool,
}

/// The visual configuration of one generated story image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Design {
    /// Arrangement strategy
    pub template: Template,
    /// Background palette
    pub background: Palette,
    /// Main text font family
    pub font: FontFamily,
    /// Decorative layers
    pub decorations: Decorations,
}

impl Design {
    /// Rendering mode of the background.
    pub fn mode(&self) -> Mode {
        self.background.mode
    }
}

/// Caller-forced parts of a design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignOverrides {
    /// Replace the drawn template
    pub template: Option<Template>,
    /// Force a light or dark palette
    pub mode: Option<Mode>,
}

impl DesignOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// Force a palette mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Whether nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.template.is_none() && self.mode.is_none()
    }
}

/// Select a design from the catalog for `seed`.
///
/// Draw order is template, palette, font, pattern flag, glow flag. A paper
/// template never keeps a dark palette.
pub fn create_design(seed: u32) -> Design {
    let design = draw_design(&mut StoryRng::new(seed), &TEMPLATES, &PALETTES);
    log::debug!(
        "seed {:x}: template={} mode={} font={}",
        seed,
        design.template,
        design.background.mode,
        design.font
    );
    design
}

/// Derive a second seed from `seed`.
pub fn derive_seed(seed: u32) -> u32 {
    seed ^ DERIVE_MASK
}

/// Select a design for `seed`, then apply `overrides`.
///
/// A forced mode re-runs the full selection on [`derive_seed`], drawing the
/// palette from that mode's palettes only. Forced dark also leaves `paper`
/// out of the template draw. A template override then replaces the
/// template, and the paper rule is applied last, so an explicit paper
/// template always ends up light.
pub fn create_design_with(seed: u32, overrides: &DesignOverrides) -> Design {
    let mut design = match overrides.mode {
        None => create_design(seed),
        Some(mode) => {
            let templates: Vec<Template> = TEMPLATES
                .iter()
                .copied()
                .filter(|t| mode == Mode::Light || *t != Template::Paper)
                .collect();
            let palettes = palettes_of(mode);
            let design = draw_design(
                &mut StoryRng::new(derive_seed(seed)),
                &templates,
                &palettes,
            );
            log::debug!(
                "seed {:x} forced {}: template={} font={}",
                seed,
                mode,
                design.template,
                design.font
            );
            design
        }
    };

    if let Some(template) = overrides.template {
        design.template = template;
    }

    design.background = coherent_palette(design.template, design.background);
    design
}

fn draw_design(rng: &mut StoryRng, templates: &[Template], palettes: &[Palette]) -> Design {
    let template = templates[rng.index(templates.len())];
    let picked = palettes[rng.index(palettes.len())];
    let font = FONTS[rng.index(FONTS.len())];
    let decorations = Decorations {
        show_pattern: rng.next() > PATTERN_THRESHOLD,
        show_glow: rng.next() > GLOW_THRESHOLD,
    };

    Design {
        template,
        background: coherent_palette(template, picked),
        font,
        decorations,
    }
}

/// Designs for many seeds, computed in parallel.
pub fn create_designs(seeds: &[u32]) -> Vec<Design> {
    seeds.par_iter().map(|seed| create_design(*seed)).collect()
}

fn coherent_palette(template: Template, palette: Palette) -> Palette {
    if template == Template::Paper && !palette.is_light() {
        CANONICAL_PAPER
    } else {
        palette
    }
}
