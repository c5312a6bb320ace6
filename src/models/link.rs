use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const ELLIPSIS_LABEL: &str = "...";
pub const ELLIPSIS_DESTINATION: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LinkRole {
    Previous,
    Page,
    Ellipsis,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub role: LinkRole,
    /// Page the link points at, when it points at one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    pub destination: String,
    pub label: String,
    pub active: bool,
}

impl Link {
    pub fn previous(destination: String, page: Option<u64>) -> Self {
        Self {
            role: LinkRole::Previous,
            page,
            destination,
            label: PREVIOUS_LABEL.to_string(),
            active: false,
        }
    }

    pub fn next(destination: String, page: Option<u64>) -> Self {
        Self {
            role: LinkRole::Next,
            page,
            destination,
            label: NEXT_LABEL.to_string(),
            active: false,
        }
    }

    pub fn page(page: u64, destination: String, active: bool) -> Self {
        Self {
            role: LinkRole::Page,
            page: Some(page),
            destination,
            label: page.to_string(),
            active,
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            role: LinkRole::Ellipsis,
            page: None,
            destination: ELLIPSIS_DESTINATION.to_string(),
            label: ELLIPSIS_LABEL.to_string(),
            active: false,
        }
    }
}

/// Ordered links for one pagination control: previous, the page window, next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkSet {
    links: Vec<Link>,
}

impl LinkSet {
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn previous(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.role == LinkRole::Previous)
    }

    pub fn next(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.role == LinkRole::Next)
    }

    /// Page and ellipsis entries, in display order.
    pub fn window(&self) -> impl Iterator<Item = &Link> {
        self.links
            .iter()
            .filter(|link| matches!(link.role, LinkRole::Page | LinkRole::Ellipsis))
    }

    pub fn active(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| link.active)
    }

    /// Looks a link up by its positional key: `prev`, `next`, or `l{n}` for the n-th window entry.
    pub fn get(&self, key: &str) -> Option<&Link> {
        match key {
            "prev" => self.previous(),
            "next" => self.next(),
            _ => key
                .strip_prefix('l')
                .and_then(|index| index.parse::<usize>().ok())
                .and_then(|index| self.window().nth(index)),
        }
    }

    /// Every link paired with its positional key.
    pub fn keyed(&self) -> Vec<(String, &Link)> {
        let mut window_index = 0;
        self.links
            .iter()
            .map(|link| {
                let key = match link.role {
                    LinkRole::Previous => "prev".to_string(),
                    LinkRole::Next => "next".to_string(),
                    LinkRole::Page | LinkRole::Ellipsis => {
                        window_index += 1;
                        format!("l{}", window_index - 1)
                    }
                };
                (key, link)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
