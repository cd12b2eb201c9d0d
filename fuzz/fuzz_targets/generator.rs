#![no_main]

use libfuzzer_sys::fuzz_target;
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use pullgen::prelude::*;
use wrapper::Wrapper;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Pull {
    HasNext,
    Peek,
    Next,
}

fuzz_target!(|data: (TestProducer<u16, u8, i8>, Vec<Pull>)| {
    let (pro, pulls) = data;
    let (items, last) = pro.into_data();
    let last = last.unwrap();

    let mut gen = Generator::new(TestProducerBuilder::new(items.clone(), last).build());

    // The model: how many items were pulled, and whether the error was already reported.
    let mut pulled = 0;
    let mut reported = false;

    for pull in pulls {
        let ended = pulled == items.len();
        let fault = ended && !reported && last.is_err();

        match pull {
            Pull::HasNext => match gen.has_next() {
                Ok(has) => {
                    assert!(!fault);
                    assert_eq!(has, !ended);
                }
                Err(err) => {
                    assert!(fault);
                    assert_eq!(Err(err), last.map(|_| ()).map_err(GeneratorError::Producer));
                    reported = true;
                }
            },
            Pull::Peek => match gen.peek() {
                Ok(item) => {
                    assert!(!fault);
                    assert_eq!(item, items.get(pulled));
                }
                Err(_) => {
                    assert!(fault);
                    reported = true;
                }
            },
            Pull::Next => match gen.next() {
                Ok(item) => {
                    assert_eq!(item, items[pulled]);
                    pulled += 1;
                }
                Err(GeneratorError::Exhausted) => assert!(ended && !fault),
                Err(GeneratorError::Producer(_)) => {
                    assert!(fault);
                    reported = true;
                }
            },
        }
    }

    if let Ok(fin) = last {
        if gen.is_done() {
            assert_eq!(gen.final_value(), Some(&fin));
        }
    }

    let pro = gen.into_inner();
    assert!(pro.produced().len() <= pulled + 1);
});
