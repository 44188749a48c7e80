/// Hard cap on tokens ever issued, across both channels.
pub const MAX_TOKENS: u32 = 100;

/// Per-call limit for both public mints and giveaways.
pub const MAX_TOKENS_PER_TX: u32 = 2;

/// Reserved quota for the owner giveaway channel.
pub const MAX_TOKENS_GIVEAWAYS: u32 = 10;
