//! Color demand across a set of plates.

use std::collections::{btree_map, BTreeMap};

use crate::models::{ColorId, Plate};

/// Number of plates requiring each color. Colors never seen count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFrequency(BTreeMap<ColorId, usize>);

impl ColorFrequency {
    pub fn get(&self, color: ColorId) -> usize {
        self.0.get(&color).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ColorId, usize> {
        self.0.iter()
    }
}

/// Tallies how many of the given plates require each color.
pub fn color_frequency<'a, I>(plates: I) -> ColorFrequency
where
    I: IntoIterator<Item = &'a Plate>,
{
    let mut counts = BTreeMap::new();
    for plate in plates {
        for color in &plate.colors {
            *counts.entry(*color).or_insert(0) += 1;
        }
    }
    ColorFrequency(counts)
}
