#![no_main]

use libfuzzer_sys::fuzz_target;

use hoare_sort::quicksort as test_sort;
use hoare_sort::validation::is_sorted;

fuzz_target!(|data: &[u8]| {
    let original = fuzz_util::u8_as_i32(data);

    let mut v = original.clone();
    test_sort::sort(&mut v);
    assert!(is_sorted(&v));

    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(v, expected);
});
