use std::collections::VecDeque;

/// Flattens raw recipient tokens into a single comma-joined address list.
///
/// Each token may itself hold several comma-separated addresses, with
/// arbitrary surrounding whitespace and stray CR/LF picked up from
/// copy-pasted address lists. Tokens are worked through as a queue:
/// everything after a token's first comma is pushed to the back and
/// handled after the remaining tokens, so the output order interleaves
/// rather than following a plain left-to-right flattening.
///
/// Duplicates are kept and addresses are not syntax-checked here; the
/// composer rejects anything the mail library cannot parse.
pub fn normalize_recipients<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut pending: VecDeque<String> =
        tokens.iter().map(|t| t.as_ref().to_string()).collect();
    let mut cleaned: Vec<String> = Vec::new();

    while let Some(entry) = pending.pop_front() {
        let head = match entry.split_once(',') {
            Some((head, rest)) => {
                pending.push_back(rest.to_string());
                head.to_string()
            }
            None => entry,
        };

        // CR/LF can appear mid-token, not only at the ends, so strip
        // them everywhere before trimming ordinary whitespace.
        let stripped: String = head.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        let trimmed = stripped.trim();
        if !trimmed.is_empty() {
            cleaned.push(trimmed.to_string());
        }
    }

    cleaned.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_single_address() {
        assert_eq!(
            normalize_recipients(&["email1@example.com"]),
            "email1@example.com"
        );
    }

    #[test]
    fn test_normalize_repeated_tokens() {
        assert_eq!(
            normalize_recipients(&["email1@example.com", "email2@example.com"]),
            "email1@example.com,email2@example.com"
        );
    }

    #[test]
    fn test_normalize_embedded_commas() {
        assert_eq!(
            normalize_recipients(&["email1@example.com,email2@example.com"]),
            "email1@example.com,email2@example.com"
        );
        assert_eq!(
            normalize_recipients(&[" email1@example.com , email2@example.com"]),
            "email1@example.com,email2@example.com"
        );
    }

    #[test]
    fn test_normalize_defers_tail_after_first_comma() {
        // The remainder of a multi-address token is processed after the
        // tokens that follow it, so email2 lands last here.
        assert_eq!(
            normalize_recipients(&[
                " email1@example.com\r\n, email2@example.com",
                "email3@example.com"
            ]),
            "email1@example.com,email3@example.com,email2@example.com"
        );
        assert_eq!(
            normalize_recipients(&["email1", "email2, email3", "email4"]),
            "email1,email2,email4,email3"
        );
    }

    #[test]
    fn test_normalize_strips_crlf_anywhere() {
        assert_eq!(
            normalize_recipients(&["email1@exam\rple.com\n"]),
            "email1@example.com"
        );
        assert_eq!(
            normalize_recipients(&["\r\nemail1@example.com\r\n"]),
            "email1@example.com"
        );
    }

    #[test]
    fn test_normalize_drops_empty_entries() {
        assert_eq!(normalize_recipients(&["email1@example.com,"]), "email1@example.com");
        assert_eq!(
            normalize_recipients(&[",email1@example.com,,email2@example.com,"]),
            "email1@example.com,email2@example.com"
        );
        assert_eq!(normalize_recipients(&["", "  ", "\r\n"]), "");
        assert_eq!(normalize_recipients(&[" , , ,"]), "");
    }

    #[test]
    fn test_normalize_keeps_duplicates() {
        assert_eq!(
            normalize_recipients(&["email1@example.com", "email1@example.com"]),
            "email1@example.com,email1@example.com"
        );
    }

    #[test]
    fn test_normalize_empty_input() {
        let tokens: [&str; 0] = [];
        assert_eq!(normalize_recipients(&tokens), "");
    }
}
