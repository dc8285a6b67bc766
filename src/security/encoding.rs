/// HTML entity encoding for user-supplied text.
///
/// Escapes the five characters that break out of HTML text and attribute
/// contexts. Applied by the encoded user listing so stored `<script>`
/// payloads render inert.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
