#![no_main]

use libfuzzer_sys::fuzz_target;

use hoare_sort::quicksort as test_sort;
use hoare_sort::validation::is_sorted_range;

fuzz_target!(|data: &[u8]| {
    // The first two bytes pick the range, the rest is the list.
    if data.len() < 2 {
        return;
    }

    let original = fuzz_util::u8_as_i32(&data[2..]);
    if original.is_empty() {
        return;
    }

    let a = data[0] as usize % original.len();
    let b = data[1] as usize % original.len();
    let (low, high) = (a.min(b), a.max(b));

    let mut v = original.clone();
    test_sort::quick_sort(&mut v, low, high);

    assert!(is_sorted_range(&v, low, high));
    assert_eq!(v[..low], original[..low]);
    assert_eq!(v[(high + 1)..], original[(high + 1)..]);
});
