//! Query string helpers over absolute URL strings.
//!
//! The hash fragment is kept intact so router state survives a query update.

use url::Url;

pub fn get_query_param(url: &str, name: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Sets `name` to `value`, replacing the first occurrence in place and
/// dropping any duplicates.
pub fn set_query_param(url: &str, name: &str, value: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(url)?;
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, current) in parsed.query_pairs() {
        if key == name {
            if !replaced {
                pairs.push((key.into_owned(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), current.into_owned()));
        }
    }
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }
    write_pairs(&mut parsed, &pairs);
    Ok(parsed.into())
}

pub fn remove_query_param(url: &str, name: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(url)?;
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| key != name)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    write_pairs(&mut parsed, &pairs);
    Ok(parsed.into())
}

fn write_pairs(url: &mut Url, pairs: &[(String, String)]) {
    if pairs.is_empty() {
        url.set_query(None);
        return;
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://hub.example/index.html";

    #[test]
    fn test_get_query_param() {
        let url = format!("{}?filter=training&lang=hi#gallery", BASE);
        assert_eq!(get_query_param(&url, "filter").as_deref(), Some("training"));
        assert_eq!(get_query_param(&url, "lang").as_deref(), Some("hi"));
        assert_eq!(get_query_param(&url, "missing"), None);
        assert_eq!(get_query_param("not a url", "filter"), None);
    }

    #[test]
    fn test_set_query_param_keeps_fragment() {
        let url = format!("{}#gallery", BASE);
        let updated = set_query_param(&url, "filter", "events").unwrap();
        assert_eq!(updated, format!("{}?filter=events#gallery", BASE));

        let again = set_query_param(&updated, "filter", "all").unwrap();
        assert_eq!(again, format!("{}?filter=all#gallery", BASE));
    }

    #[test]
    fn test_set_query_param_replaces_in_place() {
        let url = format!("{}?filter=a&page=2&filter=b", BASE);
        let updated = set_query_param(&url, "filter", "c d").unwrap();
        assert_eq!(updated, format!("{}?filter=c+d&page=2", BASE));
    }

    #[test]
    fn test_remove_query_param() {
        let url = format!("{}?filter=events&page=2#gallery", BASE);
        let updated = remove_query_param(&url, "filter").unwrap();
        assert_eq!(updated, format!("{}?page=2#gallery", BASE));

        let bare = remove_query_param(&updated, "page").unwrap();
        assert_eq!(bare, format!("{}#gallery", BASE));
    }
}
