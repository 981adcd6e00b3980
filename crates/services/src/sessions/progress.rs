/// Aggregated view of game progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProgress {
    pub score: i32,
    pub turns_played: u32,
    pub turns_remaining: u32,
    pub is_over: bool,
}
