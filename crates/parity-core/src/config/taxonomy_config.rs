//! Taxonomy configuration.

use serde::{Deserialize, Serialize};

/// Child-count thresholds separating atoms, molecules, and organisms.
///
/// The split exists for comparability between the two trees; it is not a
/// perceptual rule, so both bounds are tunable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Maximum children for a node to count as an atom. Default: 1.
    pub atom_max_children: Option<usize>,
    /// Maximum children for a node to count as a molecule. Default: 10.
    pub molecule_max_children: Option<usize>,
}

impl TaxonomyConfig {
    pub fn effective_atom_max_children(&self) -> usize {
        self.atom_max_children.unwrap_or(1)
    }

    pub fn effective_molecule_max_children(&self) -> usize {
        self.molecule_max_children.unwrap_or(10)
    }
}
