use super::errors::TokenError;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// Expects the form `Bearer <token>`; anything else is `Invalid`.
pub fn bearer_token(authorization: &str) -> Result<&str, TokenError> {
    let token = authorization
        .strip_prefix(BEARER_PREFIX)
        .ok_or(TokenError::Invalid)?
        .trim();

    if token.is_empty() {
        return Err(TokenError::Invalid);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), Err(TokenError::Invalid));
        assert_eq!(bearer_token("abc.def.ghi"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), Err(TokenError::Invalid));
        assert_eq!(bearer_token("Bearer    "), Err(TokenError::Invalid));
        assert_eq!(bearer_token(""), Err(TokenError::Invalid));
    }
}
