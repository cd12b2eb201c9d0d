#![no_main]

use libfuzzer_sys::fuzz_target;
use pullgen::sentence::{validate_sentence, SentenceError, SMALLEST_NUMERAL};

fuzz_target!(|sentence: &str| {
    match validate_sentence(sentence) {
        Ok(()) => {
            let bytes = sentence.as_bytes();
            assert!(matches!(bytes.last(), Some(b'.' | b'?' | b'!')));
            assert!(!bytes[..bytes.len() - 1].contains(&b'.'));

            for run in bytes.split(|b| !b.is_ascii_digit()).filter(|run| !run.is_empty()) {
                let small = core::str::from_utf8(run)
                    .unwrap()
                    .parse::<u64>()
                    .is_ok_and(|value| value < SMALLEST_NUMERAL);
                assert!(!small);
            }
        }
        Err(SentenceError::NumberBelowThirteen { value }) => assert!(value < SMALLEST_NUMERAL),
        Err(SentenceError::InteriorPeriod { offset }) => {
            assert_eq!(sentence.as_bytes()[offset], b'.');
        }
        Err(_) => {}
    }
});
