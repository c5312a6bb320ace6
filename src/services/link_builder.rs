use std::collections::HashMap;
use std::sync::Arc;

use lazy_regex::regex;
use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::models::route_parameters::{ParamValue, RouteParameters};

/// Turns a route identifier plus parameters into a link destination.
pub trait LinkBuilder {
    fn generate(&self, route_id: &str, parameters: &RouteParameters, absolute: bool)
        -> Result<String>;
}

impl<T: LinkBuilder + ?Sized> LinkBuilder for Arc<T> {
    fn generate(
        &self,
        route_id: &str,
        parameters: &RouteParameters,
        absolute: bool,
    ) -> Result<String> {
        (**self).generate(route_id, parameters, absolute)
    }
}

impl<T: LinkBuilder + ?Sized> LinkBuilder for &T {
    fn generate(
        &self,
        route_id: &str,
        parameters: &RouteParameters,
        absolute: bool,
    ) -> Result<String> {
        (**self).generate(route_id, parameters, absolute)
    }
}

/// Named path templates such as `/object/{type}/search`.
///
/// Placeholders take their value from the parameter of the same name; every other
/// non-null parameter is appended to the query string in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_route(mut self, route_id: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(route_id.into(), template.into());
        self
    }
}

impl LinkBuilder for RouteTable {
    fn generate(
        &self,
        route_id: &str,
        parameters: &RouteParameters,
        absolute: bool,
    ) -> Result<String> {
        let template = self.routes.get(route_id).ok_or_else(|| Error::RouteNotFound {
            route: route_id.to_string(),
        })?;

        let mut path = String::with_capacity(template.len());
        let mut consumed: Vec<&str> = Vec::new();
        let mut last = 0;

        for caps in regex!(r"\{(\w+)\}").captures_iter(template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let value = parameters
                .get(name.as_str())
                .and_then(ParamValue::as_text)
                .ok_or_else(|| Error::MissingRouteParameter {
                    route: route_id.to_string(),
                    parameter: name.as_str().to_string(),
                })?;

            path.push_str(&template[last..whole.start()]);
            path.push_str(&urlencoding::encode(&value));
            last = whole.end();
            consumed.push(name.as_str());
        }
        path.push_str(&template[last..]);

        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        for (key, value) in parameters.iter() {
            if consumed.contains(&key) {
                continue;
            }
            if let Some(text) = value.as_text() {
                query.append_pair(key, &text);
                has_query = true;
            }
        }

        if has_query {
            path.push('?');
            path.push_str(&query.finish());
        }

        if absolute {
            Ok(format!("{}{}", self.base_url, path))
        } else {
            Ok(path)
        }
    }
}
