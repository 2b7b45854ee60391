mod blockstate;
mod records;
mod types;

pub use blockstate::parse_block_state;
pub use records::{group_records, INPUT_PREFIX_LEN, OUTPUT_PREFIX_LEN, UNIVERSAL_PREFIX_LEN};
pub use types::{BlockState, RecordLines, StateMap};
