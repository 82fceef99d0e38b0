//! Page location and route resolution.

use std::fmt;

/// Current location: a path plus an optional fragment naming an anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub fragment: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            fragment: None,
        }
    }
}

impl Location {
    /// Parse `"/path#fragment"`. An empty path means `/`, an empty fragment none.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, fragment) = match input.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (input, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        }
    }

    /// Replace the fragment in place, without recording history
    pub fn replace_fragment(&mut self, anchor: &str) {
        let anchor = anchor.trim_start_matches('#');
        self.fragment = if anchor.is_empty() {
            None
        } else {
            Some(anchor.to_string())
        };
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.path, fragment),
            None => write!(f, "{}", self.path),
        }
    }
}

/// Views the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The portfolio page
    Home,
    /// Fallback for any other path
    NotFound(String),
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        match trimmed {
            "" | "/" | "/index.html" => Route::Home,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(Location::parse(""), Location::default());
        assert_eq!(
            Location::parse("/#skills"),
            Location {
                path: "/".into(),
                fragment: Some("skills".into())
            }
        );
        assert_eq!(Location::parse("#contact").path, "/");
        assert_eq!(Location::parse("blog").path, "/blog");
        assert_eq!(Location::parse("/#").fragment, None);
    }

    #[test]
    fn test_replace_fragment() {
        let mut loc = Location::parse("/#projects");
        loc.replace_fragment("#contact");
        assert_eq!(loc.to_string(), "/#contact");
        loc.replace_fragment("");
        assert_eq!(loc.to_string(), "/");
    }

    #[test]
    fn test_route_resolution() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Location::parse("/#skills").route(), Route::Home);
        assert_eq!(
            Route::resolve("/missing"),
            Route::NotFound("/missing".to_string())
        );
        assert!(Location::parse("/admin").route().is_not_found());
    }
}
