//! Default configuration values.

use super::EntailmentMode;

pub const ENTAILMENT: EntailmentMode = EntailmentMode::LastRow;

pub const RANDOM_BRANCHING: bool = false;

pub const SEED: u64 = 0;

pub const FAIL_ON_CYCLE: bool = false;
