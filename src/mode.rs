use serde::{Deserialize, Serialize};

/// Whether the layout accepts interactive edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Editable,
    #[default]
    ReadOnly,
}

impl Mode {
    #[must_use]
    pub fn edit(self) -> Mode {
        Mode::Editable
    }

    #[must_use]
    pub fn read(self) -> Mode {
        Mode::ReadOnly
    }

    /// Whether resize and restructure gestures should be applied.
    pub fn allows_input(self) -> bool {
        self == Mode::Editable
    }
}
