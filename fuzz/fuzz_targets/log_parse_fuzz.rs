#![no_main]
use deltarle::io::parse_log;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let parsed = parse_log(&text);
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match &parsed.terminator {
        None => {
            // Clean run: one value per token.
            assert_eq!(parsed.values.len(), tokens.len());
            for (value, token) in parsed.values.iter().zip(&tokens) {
                assert_eq!(token.parse::<i64>().ok(), Some(*value));
            }
        }
        Some(rest) => {
            // Parsing stops at the first token that is not a whole i64. That
            // token contributes nothing, or its leading integer with `rest`
            // being the unread remainder.
            let bad = tokens
                .iter()
                .position(|t| t.parse::<i64>().is_err())
                .unwrap();
            for (value, token) in parsed.values.iter().zip(&tokens[..bad]) {
                assert_eq!(token.parse::<i64>().ok(), Some(*value));
            }
            if parsed.values.len() == bad {
                assert_eq!(tokens[bad], rest.as_str());
            } else {
                assert_eq!(parsed.values.len(), bad + 1);
                let lead = tokens[bad].strip_suffix(rest.as_str()).unwrap();
                assert_eq!(lead.parse::<i64>().ok(), Some(parsed.values[bad]));
                assert!(!rest.is_empty());
            }
        }
    }
});
