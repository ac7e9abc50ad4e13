//! Fuzz target for the mutator.
//!
//! Applies arbitrary edit scripts to a run sequence. Out-of-range edits must
//! be rejected with an error and accepted edits must keep the sequence
//! normalized.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use richrun::text::is_normalized;
use richrun::{FontSize, Format, Mutator, Run, RunStyle, Sequence, TextRange};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { start: u8, end: u8, text: String },
    Remove { start: u8, end: u8 },
    Bold { start: u8, end: u8 },
    Italic { start: u8, end: u8 },
    ClearFormat,
    Color { start: u8, end: u8, red: bool },
}

#[derive(Arbitrary, Debug)]
struct Script {
    with_link: bool,
    ops: Vec<Op>,
}

fn range(start: u8, end: u8) -> TextRange {
    TextRange::new(usize::from(start), usize::from(end))
}

fuzz_target!(|script: Script| {
    let style = RunStyle::new("#000000", "Arial", FontSize::Pt16);
    let mut runs = vec![Run::text("hello ", style.clone())];
    if script.with_link {
        runs.push(Run::link("link", "https://example.com", style.clone()));
    }
    runs.push(Run::text(" world", style));

    let mut mutator = Mutator::new();
    let mut seq = Sequence::from_runs(runs);

    for op in script.ops.into_iter().take(64) {
        let len = seq.flattened_len();
        let result = match op {
            Op::Insert { start, end, text } => {
                let units: Vec<char> = text.chars().collect();
                let r = range(start, end);
                let out = mutator.insert_content(&seq, r, &units);
                // Atomic runs are removed whole, so only plain text conserves length.
                if let (Ok(out), false) = (&out, script.with_link) {
                    assert_eq!(out.flattened_len() + r.len(), len + units.len());
                }
                out
            }
            Op::Remove { start, end } => mutator.remove_range(&seq, range(start, end)),
            Op::Bold { start, end } => mutator.set_format(&seq, Some(range(start, end)), Format::BOLD),
            Op::Italic { start, end } => {
                mutator.set_format(&seq, Some(range(start, end)), Format::ITALIC)
            }
            Op::ClearFormat => mutator.set_format(&seq, None, Format::NONE),
            Op::Color { start, end, red } => {
                let color = if red { "red" } else { "blue" };
                let out = mutator.set_color(&seq, Some(range(start, end)), color);
                if let Ok(out) = &out {
                    assert_eq!(out.flattened_len(), len);
                }
                out
            }
        };

        if let Ok(next) = result {
            assert!(is_normalized(next.runs()));
            mutator.update_last_actual_run(&seq, &next);
            seq = next;
        }
    }
});
