#![no_main]
use libfuzzer_sys::{fuzz_target, Corpus};
use week_attribution::fuzzing::{run_fuzz_weeks, Data};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_weeks(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
