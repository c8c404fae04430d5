//! Avatar lookup URLs.

use url::Url;

use crate::error::ContentResult;

const AVATAR_PATH: &str = "api/avatars?objectType=user&email=";

/// URL of the avatar for `email`, resolved against `base`.
///
/// The path is relative, so it lands under the base's directory: both
/// `http://host/` and `http://host` give `http://host/api/avatars?...`, while
/// `http://host/app/` gives `http://host/app/api/avatars?...`. The email is
/// inserted as is; the join only encodes what a query cannot hold literally.
pub fn avatar_url(base: &Url, email: &str) -> ContentResult<String> {
    let url = base.join(&format!("{AVATAR_PATH}{email}"))?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar(base: &str, email: &str) -> String {
        avatar_url(&Url::parse(base).unwrap(), email).unwrap()
    }

    #[test]
    fn test_avatar_url_from_root_base() {
        assert_eq!(
            avatar("http://localhost:8080/", "a@linagora.com"),
            "http://localhost:8080/api/avatars?objectType=user&email=a@linagora.com"
        );
        assert_eq!(
            avatar("http://localhost:8080", "a@linagora.com"),
            "http://localhost:8080/api/avatars?objectType=user&email=a@linagora.com"
        );
    }

    #[test]
    fn test_avatar_url_replaces_base_query_and_file() {
        assert_eq!(
            avatar("https://esn.example.org/app/index.html?lang=fr", "a@linagora.com"),
            "https://esn.example.org/app/api/avatars?objectType=user&email=a@linagora.com"
        );
        assert_eq!(
            avatar("https://esn.example.org/app/", "a+b@linagora.com"),
            "https://esn.example.org/app/api/avatars?objectType=user&email=a+b@linagora.com"
        );
    }
}
