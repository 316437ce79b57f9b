//! Stray-quote detection on raw row text.
//!
//! The `csv` tokenizer accepts a quote in the middle of an unquoted field
//! and keeps it literally. Those rows are usually an unescaped `"` in the
//! source, so they are reported back to the caller as malformed.
//!
//! A field is malformed when:
//! - it does not start with a quote but contains one, or
//! - text follows its closing quote before the next delimiter

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// Return the raw text of every malformed field in `raw`.
///
/// `raw` may span several physical lines when a quoted field contains
/// newlines; line terminators outside quotes end a field.
pub fn malformed_fields(raw: &str, delimiter: u8, quote: u8) -> Vec<String> {
    let bytes = raw.as_bytes();
    let mut found = Vec::new();
    let mut state = State::Start;
    let mut start = 0usize;
    let mut bad = false;

    for (idx, &byte) in bytes.iter().enumerate() {
        let is_terminator = byte == b'\n' || byte == b'\r';
        match state {
            State::Quoted => {
                if byte == quote {
                    state = State::AfterQuote;
                }
                continue;
            }
            State::AfterQuote if byte == quote => {
                state = State::Quoted;
                continue;
            }
            _ => {}
        }

        if byte == delimiter || is_terminator {
            if bad {
                found.push(raw[start..idx].to_string());
            }
            state = State::Start;
            start = idx + 1;
            bad = false;
            continue;
        }

        state = match state {
            State::Start if byte == quote => State::Quoted,
            State::Start => State::Unquoted,
            State::Unquoted => {
                if byte == quote {
                    bad = true;
                }
                State::Unquoted
            }
            // Text after a closing quote.
            State::AfterQuote => {
                bad = true;
                State::Unquoted
            }
            State::Quoted => State::Quoted,
        };
    }

    if bad && start < bytes.len() {
        found.push(raw[start..].to_string());
    }
    found
}
