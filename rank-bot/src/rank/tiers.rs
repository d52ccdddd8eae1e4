//! Competitive tier labels.

/// Label used for tiers outside the table.
pub const UNKNOWN_TIER: &str = "Unknown";

/// Tier code to display label. Codes 1 and 2 are unused by the game.
static TIER_LABELS: &[(i64, &str)] = &[
    (0, "Unranked"),
    (3, "Iron 1"),
    (4, "Iron 2"),
    (5, "Iron 3"),
    (6, "Bronze 1"),
    (7, "Bronze 2"),
    (8, "Bronze 3"),
    (9, "Silver 1"),
    (10, "Silver 2"),
    (11, "Silver 3"),
    (12, "Gold 1"),
    (13, "Gold 2"),
    (14, "Gold 3"),
    (15, "Platinum 1"),
    (16, "Platinum 2"),
    (17, "Platinum 3"),
    (18, "Diamond 1"),
    (19, "Diamond 2"),
    (20, "Diamond 3"),
    (21, "Ascendent 1"),
    (22, "Ascendent 2"),
    (23, "Ascendent 3"),
    (24, "Immortal 1"),
    (25, "Immortal 2"),
    (26, "Immortal 3"),
    (27, "Radiant"),
];

/// Look up the label for a tier code.
pub fn tier_label(tier: i64) -> &'static str {
    TIER_LABELS
        .iter()
        .find(|(code, _)| *code == tier)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_TIER)
}
