#![no_main]

use libfuzzer_sys::fuzz_target;
use pullgen::prelude::*;

// Split the input into its maximal runs of ASCII digits, the slow way.
fn digit_runs(data: &[u8]) -> Vec<&[u8]> {
    data.split(|b| !b.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

fn run_value(run: &[u8]) -> Option<u128> {
    run.iter()
        .try_fold(0u128, |acc, d| acc.checked_mul(10)?.checked_add(u128::from(d - b'0')))
}

fuzz_target!(|data: &[u8]| {
    let mut numbers = Generator::new(pullgen::DecimalNumbers::<u128>::from_bytes(data));

    for run in digit_runs(data) {
        match (numbers.next(), run_value(run)) {
            (Ok(value), Some(expected)) => assert_eq!(value, expected),
            (Err(GeneratorError::Producer(DigitsError::Overflow { offset, len })), None) => {
                assert_eq!(&data[offset..offset + len], run);
                // A faulted generator is done.
                assert_eq!(numbers.has_next(), Ok(false));
                return;
            }
            (got, expected) => panic!("got {:?}, expected {:?}", got, expected),
        }
    }

    assert_eq!(numbers.has_next(), Ok(false));
    assert_eq!(numbers.next(), Err(GeneratorError::Exhausted));
    assert_eq!(numbers.as_ref().remaining(), b"");
});
