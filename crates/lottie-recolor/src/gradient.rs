//! Repeat-avoiding random picks for card gradients and quote texts.
//!
//! The caller owns the [`PickCursor`]; nothing here keeps state between
//! calls, so two screens can rotate through the same palette independently.

use crate::color::Rgb;
use crate::scheme::{ColorScheme, Role};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

/// Remembers which indices of a list have already been handed out.
#[derive(Debug, Clone, Default)]
pub struct PickCursor {
    used: BTreeSet<usize>,
}

impl PickCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn used(&self) -> usize {
        self.used.len()
    }

    pub fn reset(&mut self) {
        self.used.clear();
    }
}

/// Picks an item not yet handed out through `cursor`. Once every item has
/// been used the cursor starts over. Returns `None` only for an empty list.
pub fn next_unused<'a, T, R>(items: &'a [T], cursor: &mut PickCursor, rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    // The list may have shrunk since the cursor was last used.
    cursor.used.retain(|&i| i < items.len());
    if cursor.used.len() == items.len() {
        cursor.reset();
    }

    let available: Vec<usize> = (0..items.len())
        .filter(|i| !cursor.used.contains(i))
        .collect();
    let index = *available.choose(rng)?;
    cursor.used.insert(index);
    items.get(index)
}

pub fn next_gradient<'a, R>(
    palette: &'a [Gradient],
    cursor: &mut PickCursor,
    rng: &mut R,
) -> Option<&'a Gradient>
where
    R: Rng + ?Sized,
{
    next_unused(palette, cursor, rng)
}

/// Two-stop gradients built from a scheme's roles.
pub fn scheme_gradients(scheme: &ColorScheme) -> Vec<Gradient> {
    [
        (Role::Primary, Role::Secondary),
        (Role::Gradient1, Role::Gradient2),
        (Role::Accent, Role::Primary),
    ]
    .into_iter()
    .map(|(from, to)| Gradient {
        from: scheme.role(from),
        to: scheme.role(to),
    })
    .collect()
}
