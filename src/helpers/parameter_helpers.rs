use crate::models::route_parameters::{ParamValue, RouteParameters};

pub const PAGE_PARAMETER: &str = "page";
pub const PER_PAGE_PARAMETER: &str = "pp";
pub const SORT_PARAMETER: &str = "sort";

/// Which rule decides the `page` parameter of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterRole {
    Previous,
    Next,
    /// The caller fills in `page` itself.
    Plain,
}

pub fn previous_page(current: u64) -> u64 {
    if current == 1 {
        1
    } else {
        current.saturating_sub(1)
    }
}

pub fn next_page(total_pages: u64, current: u64) -> u64 {
    if current == total_pages {
        total_pages
    } else {
        current.saturating_add(1)
    }
}

/// Route parameters for one link: the base parameters plus `page`, `pp` and, when
/// there is one, `sort`.
pub fn compose_parameters(
    base: &RouteParameters,
    total_pages: u64,
    current: u64,
    role: ParameterRole,
    per_page: u64,
    sort_token: &str,
) -> RouteParameters {
    let mut parameters = base.clone();

    let page = match role {
        ParameterRole::Previous => ParamValue::from(previous_page(current)),
        ParameterRole::Next => ParamValue::from(next_page(total_pages, current)),
        ParameterRole::Plain => ParamValue::Null,
    };
    parameters.insert(PAGE_PARAMETER, page);
    parameters.insert(PER_PAGE_PARAMETER, per_page);

    if !sort_token.is_empty() {
        parameters.insert(SORT_PARAMETER, sort_token);
    }

    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_page() {
        let parameters =
            compose_parameters(&RouteParameters::new(), 3, 3, ParameterRole::Previous, 10, "");

        assert_eq!(parameters.get("page"), Some(&ParamValue::UInt(2)));
        assert_eq!(parameters.get("pp"), Some(&ParamValue::UInt(10)));
        assert!(!parameters.contains_key("sort"));

        assert_eq!(previous_page(1), 1);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let parameters =
            compose_parameters(&RouteParameters::new(), 2, 2, ParameterRole::Next, 10, "");
        assert_eq!(parameters.get("page"), Some(&ParamValue::UInt(2)));

        let parameters =
            compose_parameters(&RouteParameters::new(), 2, 1, ParameterRole::Next, 10, "");
        assert_eq!(parameters.get("page"), Some(&ParamValue::UInt(2)));
    }

    #[test]
    fn test_plain_leaves_a_placeholder() {
        let parameters =
            compose_parameters(&RouteParameters::new(), 5, 2, ParameterRole::Plain, 10, "id:asc");

        assert_eq!(parameters.get("page"), Some(&ParamValue::Null));
        assert_eq!(parameters.get("sort"), Some(&ParamValue::Str("id:asc".to_string())));
    }

    #[test]
    fn test_base_parameters_come_first() {
        let base = RouteParameters::new().with("type", "foo");
        let parameters = compose_parameters(&base, 5, 2, ParameterRole::Next, 10, "name:desc");

        let keys: Vec<&str> = parameters.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["type", "page", "pp", "sort"]);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_base_page_is_overridden() {
        let base = RouteParameters::new().with("page", 7_i64).with("pp", 99_i64);
        let parameters = compose_parameters(&base, 9, 4, ParameterRole::Previous, 10, "");

        assert_eq!(parameters.get("page"), Some(&ParamValue::UInt(3)));
        assert_eq!(parameters.get("pp"), Some(&ParamValue::UInt(10)));
    }
}
