//! Minimal HTML slicing for the scholar profile pages. Case-insensitive on
//! tag and attribute text; assumes the elements we read are not nested in
//! themselves.

/// Find the next element whose opening tag contains `attr_fragment`
/// (e.g. `class="gsc_a_at"`), starting at byte `from`.
///
/// Returns `(open_tag, inner, end)` where `open_tag` is `<tag ...>`, `inner`
/// is the raw text up to the matching `</tag`, and `end` is the byte offset
/// just past the closing tag.
pub fn element_with_attr<'a>(s: &'a str, attr_fragment: &str, from: usize) -> Option<(&'a str, &'a str, usize)> {
    let lc = s.to_ascii_lowercase();
    let needle = attr_fragment.to_ascii_lowercase();

    let hit = lc.get(from..)?.find(&needle)? + from;
    let start = lc[..hit].rfind('<')?;
    let open_end = lc[hit..].find('>')? + hit + 1;

    let tag: String = lc[start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if tag.is_empty() {
        return None;
    }

    let close = format!("</{tag}");
    let close_at = lc[open_end..].find(&close)? + open_end;
    let end = lc[close_at..].find('>').map(|i| close_at + i + 1).unwrap_or(lc.len());

    Some((&s[start..open_end], &s[open_end..close_at], end))
}

/// Every element matching `attr_fragment`, in document order.
pub fn elements_with_attr<'a>(s: &'a str, attr_fragment: &str) -> Vec<(&'a str, &'a str)> {
    let mut out = Vec::new();
    let mut from = 0;
    while let Some((open, inner, end)) = element_with_attr(s, attr_fragment, from) {
        out.push((open, inner));
        from = end;
    }
    out
}

/// Value of attribute `name` in an opening tag, entity-decoded.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = open_tag.to_ascii_lowercase();
    let key = format!("{}=", name.to_ascii_lowercase());

    let mut search = 0;
    loop {
        let at = lc[search..].find(&key)? + search;
        // Must start a new attribute, not end another (`data-href=`).
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        let value_start = at + key.len();
        if !boundary {
            search = value_start;
            continue;
        }
        let rest = &open_tag[value_start..];
        let raw = match rest.chars().next()? {
            q @ ('"' | '\'') => {
                let body = &rest[1..];
                &body[..body.find(q)?]
            }
            _ => {
                let stop = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                &rest[..stop]
            }
        };
        return Some(decode_entities(raw));
    }
}

/// Drop tags, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the named entities scholar pages emit plus numeric references.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail.find(';').filter(|&semi| semi <= 10).and_then(|semi| {
            let ent = &tail[1..semi];
            let ch = match ent {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_entity(ent),
            }?;
            Some((ch, semi + 1))
        });
        match decoded {
            Some((ch, used)) => {
                out.push(ch);
                rest = &tail[used..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn numeric_entity(ent: &str) -> Option<char> {
    let digits = ent.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_element_by_class() {
        let html = r#"<td><A HREF="/x?a=1&amp;b=2" class="gsc_a_at">Deep <b>maps</b></A></td>"#;
        let (open, inner, end) = element_with_attr(html, r#"class="gsc_a_at""#, 0).unwrap();
        assert!(open.starts_with("<A"));
        assert_eq!(inner, "Deep <b>maps</b>");
        assert_eq!(&html[end..], "</td>");
        assert_eq!(attr_value(open, "href").as_deref(), Some("/x?a=1&b=2"));
        assert_eq!(strip_tags(inner), "Deep maps");
    }

    #[test]
    fn iterates_all_matches() {
        let html = r#"<span class="v">1</span><span class="v">2</span><span class="w">3</span>"#;
        let found: Vec<_> = elements_with_attr(html, r#"class="v""#)
            .into_iter()
            .map(|(_, inner)| inner)
            .collect();
        assert_eq!(found, vec!["1", "2"]);
    }

    #[test]
    fn attr_needs_word_boundary() {
        let tag = r#"<a data-href="no" href='yes'>"#;
        assert_eq!(attr_value(tag, "href").as_deref(), Some("yes"));
        assert_eq!(attr_value("<td class=x>", "class").as_deref(), Some("x"));
        assert_eq!(attr_value("<td>", "class"), None);
    }

    #[test]
    fn entities() {
        assert_eq!(decode_entities("R&amp;D &#8211; &#x41;&nbsp;&bogus"), "R&D – A &bogus");
        assert_eq!(strip_tags("  a\n<i>b</i>   c "), "a b c");
    }
}
