pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
pub const DEFAULT_PREFIX_LENGTH: usize = 7;
pub const DEFAULT_COUNT_THRESHOLD: u64 = 1;

/// Words per staging buffer when delete keys are generated in parallel.
pub const STAGE_CHUNK_SIZE: usize = 4096;

/// Separator placed between the two words of a bigram key and between the
/// parts of a corrected sentence.
pub const SEPARATOR: char = ' ';

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn test_DEFAULT_PREFIX_LENGTH() {
        assert!(DEFAULT_PREFIX_LENGTH > 1);
        assert!(DEFAULT_PREFIX_LENGTH > DEFAULT_MAX_EDIT_DISTANCE);
    }
}
