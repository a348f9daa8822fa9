//! Minimal `{placeholder}` substitution for narrative lines.

/// Replaces every `{key}` occurrence with its value. Placeholders with no
/// matching key are left in the output untouched, which makes a missing
/// variable visible in the journal instead of silently eaten.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let key = &after_open[..close];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // Unclosed brace, emit literally.
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
