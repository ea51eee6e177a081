//! Path routing between the list and detail views

use super::user::UserId;

/// A resolved view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    UserList,
    /// `/user/:id`
    UserDetails(UserId),
}

impl Route {
    /// Resolve a path; unknown paths and non-numeric ids resolve to nothing
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return path.starts_with('/').then_some(Self::UserList);
        }

        let mut segments = trimmed.strip_prefix('/')?.split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some("user"), Some(id), None) => id.parse().ok().map(Self::UserDetails),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::UserList => "/".to_string(),
            Self::UserDetails(id) => format!("/user/{}", id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_route() {
        assert_eq!(Route::parse("/"), Some(Route::UserList));
        assert_eq!(Route::parse("//"), Some(Route::UserList));
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(
            Route::parse("/user/3"),
            Some(Route::UserDetails(UserId::new(3)))
        );
        assert_eq!(
            Route::parse("/user/3/"),
            Some(Route::UserDetails(UserId::new(3)))
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("user/3"), None);
        assert_eq!(Route::parse("/user"), None);
        assert_eq!(Route::parse("/user/abc"), None);
        assert_eq!(Route::parse("/user/3/posts"), None);
        assert_eq!(Route::parse("/users/3"), None);
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::UserDetails(UserId::new(12));
        assert_eq!(route.to_string(), "/user/12");
        assert_eq!(Route::parse(&route.path()), Some(route));
        assert_eq!(Route::UserList.path(), "/");
    }
}
