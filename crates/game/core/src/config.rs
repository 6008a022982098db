/// Rule constants for champion progression and combat.
///
/// These are the literal values of the game rules; nothing tunes them at
/// runtime. They live together so the leveling, death, and naming code
/// read from one place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== identity =====
    /// Maximum champion name length, in characters.
    pub const MAX_NAME_LEN: usize = 10;

    // ===== progression =====
    /// Highest reachable level.
    pub const MAX_LEVEL: u32 = 100;
    /// Experience required for the first level-up.
    pub const INITIAL_EXP_NEEDED: f64 = 100.0;
    /// Multiplier applied to the threshold after every level-up.
    pub const EXP_GROWTH: f64 = 1.2;
    /// Stat points granted per level-up.
    pub const STAT_POINTS_PER_LEVEL: u32 = 3;

    // ===== combat =====
    /// Fraction of current experience kept when a champion dies.
    pub const DEATH_EXP_FACTOR: f64 = 0.5;
    /// Experience granted to the attacker when the defender dies.
    pub const KILL_REWARD: u32 = 15;
}
