//! Which input tree a node came from.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeOrigin {
    Design,
    Implementation,
}

impl TreeOrigin {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Implementation => "implementation",
        }
    }
}

impl fmt::Display for TreeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
