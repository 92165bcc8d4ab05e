use std::fmt;

/// One item in the "recyclable or not" game.
///
/// Static data defined in [`crate::catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecyclingItem {
    pub id: u32,
    pub name: &'static str,
    pub recyclable: bool,
    pub info: &'static str,
}

impl fmt::Display for RecyclingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
