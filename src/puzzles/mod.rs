//! Standalone algorithm exercises: in-place array compaction, substring
//! search, and a numeric palindrome check

/// Compact `nums` in place so every element not equal to `val` sits at the
/// front, returning how many elements were kept
///
/// The order of kept elements is preserved; the tail beyond the returned
/// length is unspecified.
pub fn remove_element(nums: &mut [i32], val: i32) -> usize {
    let mut writer = 0;

    for reader in 0..nums.len() {
        if nums[reader] != val {
            nums[writer] = nums[reader];
            writer += 1;
        }
    }

    writer
}

/// Byte offset of the first occurrence of `needle` in `haystack`, if any
pub fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len()).find(|&i| &haystack[i..i + needle.len()] == needle)
}

/// Whether a base-10 integer reads the same forwards and backwards
///
/// Works without string conversion by reversing the lower half of the digits
/// and comparing it against the upper half. Negative numbers and non-zero
/// multiples of ten are never palindromes.
pub fn is_palindrome_number(x: i64) -> bool {
    if x < 0 || (x % 10 == 0 && x != 0) {
        return false;
    }

    let mut upper = x;
    let mut reversed = 0;

    while upper > reversed {
        reversed = reversed * 10 + upper % 10;
        upper /= 10;
    }

    // Equal digit counts, or reversed carries the middle digit of an odd count
    upper == reversed || upper == reversed / 10
}
