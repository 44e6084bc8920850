//! Compact forms of names and states for the compact listing

/// Shorten a state-like string to the uppercased first letter of each word
///
/// ```text
/// "unavailable required" -> "UR"
/// ```
pub fn compact_state(input: &str) -> String {
    input
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Shorten a qualified class name: every dot separated segment but the last
/// is reduced to its first character
///
/// Commas and spaces separate names and are kept as is, so each name of a
/// multi-name declaration is shortened on its own.
///
/// ```text
/// "org.apache.felix.MyClass"   -> "o.a.f.MyClass"
/// "org.a.First, org.b.Second"  -> "o.a.First, o.b.Second"
/// ```
pub fn compact_name(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut segment_start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '.' => {
                if let Some(first) = input[segment_start..i].chars().next() {
                    output.push(first);
                }
                output.push('.');
                segment_start = i + 1;
            }
            ' ' | ',' => {
                output.push_str(&input[segment_start..i]);
                output.push(c);
                segment_start = i + 1;
            }
            _ => {}
        }
    }
    output.push_str(&input[segment_start..]);
    output
}
