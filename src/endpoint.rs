use std::fmt;

/// Canonical base path segments of the API resources.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Endpoint {
    Users,
    Photos,
    Collections,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Users => "users",
            Endpoint::Photos => "photos",
            Endpoint::Collections => "collections",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
