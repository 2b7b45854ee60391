use std::collections::BTreeMap;

/// Attribute key -> value map for one block notation instance.
/// Ordered so serialized output is deterministic; textual order in the
/// source line carries no meaning.
pub type StateMap = BTreeMap<String, String>;

/// One parsed block notation: base identifier plus attribute state.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub base: String,
    pub state: StateMap,
}

/// One prefix-stripped record of three role lines (input, universal, output).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordLines {
    pub input: String,
    pub universal: String,
    pub output: String,
}
