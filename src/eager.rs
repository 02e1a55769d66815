use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Combinable selection of derived-value categories to eager-load.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EagerLoadSelection: u8 {
        const CELESTIAL = 1 << 0;
        const UTM_MGRS = 1 << 1;
        const CARTESIAN = 1 << 2;
        const ECEF = 1 << 3;
    }
}

/// Per-category switches: compute the derived value at construction time
/// when `true`, defer until requested when `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EagerLoad {
    pub celestial: bool,
    pub utm_mgrs: bool,
    pub cartesian: bool,
    pub ecef: bool,
}

impl Default for EagerLoad {
    fn default() -> Self {
        Self::uniform(true)
    }
}

impl EagerLoad {
    /// All four categories set to `enabled`.
    pub fn uniform(enabled: bool) -> Self {
        Self {
            celestial: enabled,
            utm_mgrs: enabled,
            cartesian: enabled,
            ecef: enabled,
        }
    }

    /// Each category enabled iff its bit is present in `selection`.
    pub fn from_selection(selection: EagerLoadSelection) -> Self {
        Self {
            celestial: selection.contains(EagerLoadSelection::CELESTIAL),
            utm_mgrs: selection.contains(EagerLoadSelection::UTM_MGRS),
            cartesian: selection.contains(EagerLoadSelection::CARTESIAN),
            ecef: selection.contains(EagerLoadSelection::ECEF),
        }
    }

    /// Factory form of [`EagerLoad::from_selection`].
    pub fn create(selection: EagerLoadSelection) -> Self {
        Self::from_selection(selection)
    }
}
