pub const MAX_GUESS_LENGTH: usize = 120;
