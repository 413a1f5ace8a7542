/// Read a cookie value out of a `document.cookie` string.
///
/// Returns `None` when the cookie is absent or appears more than once.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    let value = format!("; {}", cookies);
    let needle = format!("; {}=", name);
    let parts: Vec<&str> = value.split(needle.as_str()).collect();

    if parts.len() == 2 {
        parts[1].split(';').next().map(str::to_string)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_named_cookie() {
        let cookies = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(get_cookie(cookies, "csrftoken"), Some("tok123".to_string()));
        assert_eq!(get_cookie(cookies, "sessionid"), Some("abc".to_string()));
        assert_eq!(get_cookie(cookies, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(get_cookie("sessionid=abc", "csrftoken"), None);
        assert_eq!(get_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_prefix_name_does_not_match() {
        // "xcsrftoken" must not satisfy a lookup for "csrftoken"
        assert_eq!(get_cookie("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn test_duplicate_cookie_is_ambiguous() {
        assert_eq!(get_cookie("csrftoken=a; csrftoken=b", "csrftoken"), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_cookie("csrftoken=; other=1", "csrftoken"), Some(String::new()));
    }
}
