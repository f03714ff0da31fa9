/// Number of dice in a hand under the reference ruleset.
pub const DEFAULT_DICE: usize = 5;

/// Number of faces per die under the reference ruleset.
pub const DEFAULT_SIDES: u8 = 8;

/// Lowest face value of any die.
pub const MIN_FACE: i32 = 1;

/// Minimum dice per hand.
pub const MIN_DICE: usize = 5;
/// Maximum dice per hand.
pub const MAX_DICE: usize = 32;

/// Minimum faces per die.
pub const MIN_SIDES: u8 = 2;
/// Maximum faces per die.
pub const MAX_SIDES: u8 = 32;

// Fixed bonuses. These do not scale with the ruleset.
pub const ALL_OF_A_KIND_BONUS: u32 = 50;
pub const NONE_OF_A_KIND_BONUS: u32 = 40;
pub const FULL_HOUSE_BONUS: u32 = 25;
pub const SMALL_STRAIGHT_BONUS: u32 = 30;
pub const LARGE_STRAIGHT_BONUS: u32 = 40;
