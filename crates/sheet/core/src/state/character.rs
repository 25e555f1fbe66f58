/// Identity of the character: who they are and how experienced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterInfo {
    pub name: String,
    pub class: String,
    pub level: u32,
}

impl CharacterInfo {
    pub fn new(name: impl Into<String>, class: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            level,
        }
    }
}

impl Default for CharacterInfo {
    fn default() -> Self {
        Self::new("", "", 1)
    }
}
