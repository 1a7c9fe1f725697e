// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which presentation of the catalog is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// The pannable, zoomable canvas.
    #[default]
    Experience,
    /// The conventional list.
    List,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Experience => Self::List,
            Self::List => Self::Experience,
        }
    }

    /// Returns `true` for [`ViewMode::Experience`].
    #[must_use]
    pub fn is_experience(self) -> bool {
        self == Self::Experience
    }
}

#[cfg(test)]
mod tests {
    use super::ViewMode;

    #[test]
    fn toggles_between_modes() {
        let mode = ViewMode::default();
        assert!(mode.is_experience());
        assert_eq!(mode.toggled(), ViewMode::List);
        assert_eq!(mode.toggled().toggled(), ViewMode::Experience);
    }
}
