#![no_main]

use libfuzzer_sys::fuzz_target;
use pullgen::prelude::*;

// Restarting after each overflow must visit every digit run exactly once, no matter how narrow the number type.
fuzz_target!(|data: &[u8]| {
    let expected: Vec<(usize, usize)> = {
        let mut runs = Vec::new();
        let mut start = None;
        for (i, b) in data.iter().chain(core::iter::once(&b' ')).enumerate() {
            match (start, b.is_ascii_digit()) {
                (None, true) => start = Some(i),
                (Some(s), false) => {
                    runs.push((s, i - s));
                    start = None;
                }
                _ => {}
            }
        }
        runs
    };

    let mut seen = Vec::new();
    let mut consumed = 0;

    loop {
        let mut numbers = Generator::new(pullgen::DecimalNumbers::<u8>::from_bytes(&data[consumed..]));

        loop {
            let before = consumed + numbers.as_ref().offset();
            match numbers.next() {
                Ok(value) => {
                    let after = consumed + numbers.as_ref().offset();
                    let run = data[before..after]
                        .iter()
                        .position(u8::is_ascii_digit)
                        .map(|skip| before + skip)
                        .unwrap();
                    seen.push((run, after - run));
                    assert_eq!(
                        core::str::from_utf8(&data[run..after]).unwrap().parse::<u16>().ok(),
                        Some(u16::from(value))
                    );
                }
                Err(GeneratorError::Producer(DigitsError::Overflow { offset, len })) => {
                    seen.push((consumed + offset, len));
                    break;
                }
                Err(GeneratorError::Exhausted) => {
                    assert_eq!(seen, expected);
                    return;
                }
            }
        }

        consumed += numbers.as_ref().offset();
    }
});
