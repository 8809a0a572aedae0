//! Generation-keyed layout cache.
//!
//! A cached [`TreeLayout`] is valid only while the tree revision and the
//! [`LayoutParams`] it was computed from are unchanged. Anything else (a
//! structural edit, an expansion toggle, a rename, a width or style change)
//! makes the next [`LayoutCache::ensure`] run a fresh pass.

use super::layout::{compute_layout, TreeLayout};
use super::layout_params::LayoutParams;
use super::surface::TextMeasure;
use crate::model::Tree;

/// Holds the most recent layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    layout: Option<TreeLayout>,
    passes: u64,
}

impl LayoutCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a layout valid for `tree` and `params`, recomputing if stale.
    pub fn ensure<M: TextMeasure + ?Sized>(
        &mut self,
        tree: &Tree,
        params: &LayoutParams,
        measure: &M,
    ) -> &TreeLayout {
        let stale = match &self.layout {
            Some(layout) => layout.revision() != tree.revision() || layout.params() != params,
            None => true,
        };
        if stale {
            self.passes += 1;
            self.layout = None;
        }
        self.layout
            .get_or_insert_with(|| compute_layout(tree, params, measure))
    }

    /// Cached layout, if valid for `tree` and `params`.
    pub fn get(&self, tree: &Tree, params: &LayoutParams) -> Option<&TreeLayout> {
        self.layout
            .as_ref()
            .filter(|l| l.revision() == tree.revision() && l.params() == params)
    }

    /// Last computed layout regardless of validity.
    pub fn last(&self) -> Option<&TreeLayout> {
        self.layout.as_ref()
    }

    /// Drop the cached layout.
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    /// Number of layout passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeIndex, NodeInit, NodeKind};
    use crate::view_state::style::TreeStyle;
    use crate::view_state::surface::MonospaceMeasure;

    const CELL: MonospaceMeasure = MonospaceMeasure::new(1, 1);

    fn tree() -> (Tree, NodeIndex) {
        let mut tree = Tree::new();
        let r = tree
            .add_node("r", NodeIndex::ROOT, NodeKind::Leaf, NodeInit::default())
            .unwrap();
        tree.add_node("c", r, NodeKind::Leaf, NodeInit::default())
            .unwrap();
        (tree, r)
    }

    #[test]
    fn second_ensure_reuses_layout() {
        let (tree, _) = tree();
        let params = LayoutParams::new(80, TreeStyle::default());
        let mut cache = LayoutCache::new();
        cache.ensure(&tree, &params, &CELL);
        cache.ensure(&tree, &params, &CELL);
        assert_eq!(cache.passes(), 1);
    }

    #[test]
    fn mutation_triggers_relayout() {
        let (mut tree, r) = tree();
        let params = LayoutParams::new(80, TreeStyle::default());
        let mut cache = LayoutCache::new();
        assert_eq!(cache.ensure(&tree, &params, &CELL).total_height(), 2);
        tree.toggle_expansion(r).unwrap();
        assert!(cache.get(&tree, &params).is_none());
        assert_eq!(cache.ensure(&tree, &params, &CELL).total_height(), 1);
        assert_eq!(cache.passes(), 2);
    }

    #[test]
    fn width_change_triggers_relayout() {
        let (tree, _) = tree();
        let mut cache = LayoutCache::new();
        cache.ensure(&tree, &LayoutParams::new(80, TreeStyle::default()), &CELL);
        cache.ensure(&tree, &LayoutParams::new(40, TreeStyle::default()), &CELL);
        assert_eq!(cache.passes(), 2);
    }

    #[test]
    fn invalidate_forces_relayout() {
        let (tree, _) = tree();
        let params = LayoutParams::new(80, TreeStyle::default());
        let mut cache = LayoutCache::new();
        cache.ensure(&tree, &params, &CELL);
        cache.invalidate();
        assert!(cache.last().is_none());
        cache.ensure(&tree, &params, &CELL);
        assert_eq!(cache.passes(), 2);
    }
}
