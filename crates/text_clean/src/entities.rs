//! HTML/XML character entity decoding

/// Named entities worth decoding in question bank text: the XML five plus
/// the Latin-1 accents and punctuation that show up in editor output.
fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{A0}',
        "iexcl" => '¡',
        "iquest" => '¿',
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "Aacute" => 'Á',
        "Eacute" => 'É',
        "Iacute" => 'Í',
        "Oacute" => 'Ó',
        "Uacute" => 'Ú',
        "ntilde" => 'ñ',
        "Ntilde" => 'Ñ',
        "uuml" => 'ü',
        "Uuml" => 'Ü',
        "ccedil" => 'ç',
        "Ccedil" => 'Ç',
        "deg" => '°',
        "middot" => '·',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "laquo" => '«',
        "raquo" => '»',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "euro" => '€',
        "pound" => '£',
        "times" => '×',
        "divide" => '÷',
        "plusmn" => '±',
        "frac12" => '½',
        "sup2" => '²',
        "sup3" => '³',
        _ => return None,
    };
    Some(c)
}

/// Decode a numeric reference body (after `#`): decimal `NNN` or hex
/// `xHH`/`XHH`.
fn numeric_entity(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

/// Decode HTML/XML character entities to their literal characters.
///
/// Unknown names, malformed numbers, and bare ampersands pass through
/// unchanged, so decoding can never fail.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // An entity is "&", an optional "#", up to ~10 name chars, ";".
        let decoded = tail[1..]
            .char_indices()
            .take_while(|&(i, c)| i < 12 && (c.is_ascii_alphanumeric() || c == '#'))
            .last()
            .and_then(|(end, _)| {
                let body = &tail[1..=end + 1];
                if !tail[end + 2..].starts_with(';') {
                    return None;
                }
                let c = match body.strip_prefix('#') {
                    Some(num) => numeric_entity(num)?,
                    None => named_entity(body)?,
                };
                Some((c, end + 3))
            });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_five() {
        assert_eq!(
            decode_entities("&lt;b&gt; &amp; &quot;x&quot; &apos;y&apos;"),
            "<b> & \"x\" 'y'"
        );
    }

    #[test]
    fn test_numeric_decimal_and_hex() {
        assert_eq!(decode_entities("&#65;&#x42;&#xe9;"), "ABé");
    }

    #[test]
    fn test_spanish_accents() {
        assert_eq!(
            decode_entities("&iquest;Cu&aacute;l es la f&oacute;rmula?"),
            "¿Cuál es la fórmula?"
        );
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(decode_entities("&bogus; & &#xZZ; &amp"), "&bogus; & &#xZZ; &amp");
    }

    #[test]
    fn test_adjacent_entities() {
        assert_eq!(decode_entities("&amp;&amp;"), "&&");
    }
}
