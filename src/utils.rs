use super::error::{Error, Result};

/// Turns a required identifier into a single path segment.
///
/// Fails with [`Error::IllegalArgument`] when the identifier is empty. Reserved characters are
/// percent-encoded, so `a#b` or `a/b` can't reach another resource.
pub fn path_segment(value: &str, what: &str) -> Result<String> {
    if value.is_empty() {
        Err(Error::IllegalArgument(format!("{} cannot be empty", what)))
    } else {
        Ok(urlencoding::encode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_is_illegal() {
        assert_eq!(
            path_segment("", "Username"),
            Err(Error::IllegalArgument(String::from("Username cannot be empty")))
        );
        assert_eq!(path_segment("alice", "Username"), Ok(String::from("alice")));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(path_segment("a#evil", "Username"), Ok(String::from("a%23evil")));
        assert_eq!(path_segment("a?b/c", "Username"), Ok(String::from("a%3Fb%2Fc")));
    }
}
