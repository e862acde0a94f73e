use crate::rules::RuleTable;
use crate::scheme::{ColorScheme, Role};
use lottie_data::Document;
use std::collections::BTreeMap;
use tracing::debug;

/// How many colors were mapped onto each role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapReport {
    pub replaced: BTreeMap<Role, usize>,
}

impl RemapReport {
    pub fn total(&self) -> usize {
        self.replaced.values().sum()
    }

    pub fn count(&self, role: Role) -> usize {
        self.replaced.get(&role).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct Remapped {
    pub document: Document,
    pub report: RemapReport,
}

/// Applies one scheme through one rule table.
#[derive(Debug, Clone, Copy)]
pub struct Recolorer<'a> {
    scheme: &'a ColorScheme,
    rules: &'a RuleTable,
}

impl<'a> Recolorer<'a> {
    pub fn new(scheme: &'a ColorScheme, rules: &'a RuleTable) -> Self {
        Self { scheme, rules }
    }

    /// Returns a recolored copy; `source` is never modified.
    ///
    /// Each static color is classified on its original channels and replaced
    /// by its role's color. The source alpha is carried over unchanged.
    pub fn apply(&self, source: &Document) -> Remapped {
        let mut document = source.clone();
        let mut report = RemapReport::default();

        document.root_mut().for_each_color_mut(&mut |quad| {
            let role = self.rules.classify(quad.rgb());
            quad.set_rgb(self.scheme.role(role).normalized());
            *report.replaced.entry(role).or_default() += 1;
        });

        debug!(
            scheme = %self.scheme.name,
            replaced = report.total(),
            "remapped animation colors"
        );
        Remapped { document, report }
    }
}

/// Recolors `document` with `scheme` using the default rule table.
pub fn remap_colors(document: &Document, scheme: &ColorScheme) -> Document {
    let rules = RuleTable::default();
    Recolorer::new(scheme, &rules).apply(document).document
}
