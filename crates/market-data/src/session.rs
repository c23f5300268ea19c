//! Session credential parsed from the upstream landing response.

/// An opaque session credential for one handshake.
///
/// Built from the landing response's `Set-Cookie` headers. Only the
/// leading `name=value` pair of each cookie is retained; path, expiry
/// and the other attributes are irrelevant to the follow-up call and
/// are discarded. Tokens are created fresh for every invocation and
/// never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken {
    cookies: Vec<String>,
}

impl SessionToken {
    /// Parse a token from raw `Set-Cookie` header values.
    ///
    /// Returns `None` when no usable cookie pair is present.
    pub fn from_set_cookie<'a, I>(headers: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cookies: Vec<String> = headers
            .into_iter()
            .filter_map(|raw| raw.split(';').next())
            .map(str::trim)
            .filter(|pair| pair.contains('=') && !pair.starts_with('='))
            .map(str::to_string)
            .collect();

        if cookies.is_empty() {
            None
        } else {
            Some(Self { cookies })
        }
    }

    /// Value for the outbound `Cookie` header.
    pub fn as_cookie_header(&self) -> String {
        self.cookies.join("; ")
    }
}
