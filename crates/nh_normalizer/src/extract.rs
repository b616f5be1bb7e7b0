use serde_json::Value;

/// Finds the JSON array embedded in `text` and returns its elements.
///
/// Only top-level balanced `[ ... ]` spans are considered, left to right.
/// Brackets inside JSON string literals are ignored while a span is open.
/// The first span holding at least one object wins, so footnotes such as
/// `[1]` or `[sic]` ahead of the payload are passed over; failing that, the
/// first span that parses as any array is returned.
///
/// An opening bracket that never closes is either stray prose (`[see below`)
/// or a truncated payload. The scan resumes right after it, but from then on
/// only object-bearing arrays are accepted so a fragment such as `["a"]` from
/// inside a truncated reply is never returned.
pub fn extract_json_array(text: &str) -> Option<Vec<Value>> {
    let bytes = text.as_bytes();
    let mut from = 0;
    let mut first_array = None;
    let mut unclosed = false;

    while let Some(offset) = bytes[from..].iter().position(|&b| b == b'[') {
        let start = from + offset;
        let Some(end) = balanced_end(bytes, start) else {
            unclosed = true;
            from = start + 1;
            continue;
        };
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&text[start..end]) {
            if items.iter().any(Value::is_object) {
                return Some(items);
            }
            if !unclosed {
                first_array.get_or_insert(items);
            }
        }
        from = end;
    }

    first_array
}

/// Exclusive end of the bracket span opened at `start`, or `None` if it never closes.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}
