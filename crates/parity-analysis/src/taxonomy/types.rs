//! Fixed taxonomy: atomic-design levels × subcategories.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use parity_core::types::TreeOrigin;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Top level of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLevel {
    Atoms,
    Molecules,
    Organisms,
    Layout,
}

impl CategoryLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Atoms => "atoms",
            Self::Molecules => "molecules",
            Self::Organisms => "organisms",
            Self::Layout => "layout",
        }
    }
}

/// Structural size class derived from child count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Atom,
    Molecule,
    Organism,
}

impl NodeShape {
    /// Classify a child count against the atom/molecule thresholds.
    pub fn from_child_count(count: usize, atom_max: usize, molecule_max: usize) -> Self {
        if count <= atom_max {
            Self::Atom
        } else if count <= molecule_max {
            Self::Molecule
        } else {
            Self::Organism
        }
    }

    /// Bucket a node falls into when no rule matches.
    pub fn default_category(&self) -> CategoryPath {
        match self {
            Self::Atom => CategoryPath::AtomsOther,
            Self::Molecule => CategoryPath::MoleculesOther,
            Self::Organism => CategoryPath::OrganismsOther,
        }
    }
}

macro_rules! category_paths {
    ($($variant:ident => ($level:ident, $path:literal)),+ $(,)?) => {
        /// One cell of the fixed taxonomy, written `{level}.{subcategory}`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum CategoryPath {
            $($variant),+
        }

        impl CategoryPath {
            /// Every bucket, in report order.
            pub const ALL: &'static [CategoryPath] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $path),+
                }
            }

            pub fn level(&self) -> CategoryLevel {
                match self {
                    $(Self::$variant => CategoryLevel::$level),+
                }
            }
        }

        impl FromStr for CategoryPath {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($path => Ok(Self::$variant),)+
                    other => Err(format!("unknown taxonomy category `{other}`")),
                }
            }
        }
    };
}

category_paths! {
    AtomsButtons => (Atoms, "atoms.buttons"),
    AtomsInputs => (Atoms, "atoms.inputs"),
    AtomsLinks => (Atoms, "atoms.links"),
    AtomsIcons => (Atoms, "atoms.icons"),
    AtomsImages => (Atoms, "atoms.images"),
    AtomsTypography => (Atoms, "atoms.typography"),
    AtomsBadges => (Atoms, "atoms.badges"),
    AtomsDividers => (Atoms, "atoms.dividers"),
    AtomsOther => (Atoms, "atoms.other"),
    MoleculesCards => (Molecules, "molecules.cards"),
    MoleculesListItems => (Molecules, "molecules.list_items"),
    MoleculesMenus => (Molecules, "molecules.menus"),
    MoleculesSearch => (Molecules, "molecules.search"),
    MoleculesFormFields => (Molecules, "molecules.form_fields"),
    MoleculesMedia => (Molecules, "molecules.media"),
    MoleculesTabs => (Molecules, "molecules.tabs"),
    MoleculesOther => (Molecules, "molecules.other"),
    OrganismsHeaders => (Organisms, "organisms.headers"),
    OrganismsFooters => (Organisms, "organisms.footers"),
    OrganismsNavigation => (Organisms, "organisms.navigation"),
    OrganismsTables => (Organisms, "organisms.tables"),
    OrganismsForms => (Organisms, "organisms.forms"),
    OrganismsSidebars => (Organisms, "organisms.sidebars"),
    OrganismsModals => (Organisms, "organisms.modals"),
    OrganismsSections => (Organisms, "organisms.sections"),
    OrganismsOther => (Organisms, "organisms.other"),
    LayoutFlexbox => (Layout, "layout.flexbox"),
    LayoutGrid => (Layout, "layout.grid"),
    LayoutStack => (Layout, "layout.stack"),
    LayoutContainers => (Layout, "layout.containers"),
    LayoutSpacers => (Layout, "layout.spacers"),
    LayoutOther => (Layout, "layout.other"),
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A node reference placed in a bucket column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub node_ref: String,
    pub name: String,
    pub kind: String,
    pub child_count: usize,
}

/// One taxonomy cell with independent design and implementation columns.
/// Empty buckets are kept and reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub path: CategoryPath,
    pub design_column: Vec<TaxonomyEntry>,
    pub implementation_column: Vec<TaxonomyEntry>,
}

impl CategoryBucket {
    pub fn new(path: CategoryPath) -> Self {
        Self {
            path,
            design_column: Vec::new(),
            implementation_column: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.design_column.is_empty() && self.implementation_column.is_empty()
    }

    pub fn column(&self, origin: TreeOrigin) -> &[TaxonomyEntry] {
        match origin {
            TreeOrigin::Design => &self.design_column,
            TreeOrigin::Implementation => &self.implementation_column,
        }
    }

    fn column_mut(&mut self, origin: TreeOrigin) -> &mut Vec<TaxonomyEntry> {
        match origin {
            TreeOrigin::Design => &mut self.design_column,
            TreeOrigin::Implementation => &mut self.implementation_column,
        }
    }
}

/// The populated taxonomy: every bucket of `CategoryPath::ALL`, always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub buckets: BTreeMap<CategoryPath, CategoryBucket>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new()
    }
}

impl Taxonomy {
    pub fn new() -> Self {
        Self {
            buckets: CategoryPath::ALL
                .iter()
                .map(|p| (*p, CategoryBucket::new(*p)))
                .collect(),
        }
    }

    pub fn insert(&mut self, path: CategoryPath, origin: TreeOrigin, entry: TaxonomyEntry) {
        self.buckets
            .entry(path)
            .or_insert_with(|| CategoryBucket::new(path))
            .column_mut(origin)
            .push(entry);
    }

    pub fn bucket(&self, path: CategoryPath) -> Option<&CategoryBucket> {
        self.buckets.get(&path)
    }

    /// Paths with no node in either column.
    pub fn empty_buckets(&self) -> Vec<CategoryPath> {
        self.buckets
            .values()
            .filter(|b| b.is_empty())
            .map(|b| b.path)
            .collect()
    }

    /// Total entries in one column across all buckets.
    pub fn node_count(&self, origin: TreeOrigin) -> usize {
        self.buckets.values().map(|b| b.column(origin).len()).sum()
    }
}
