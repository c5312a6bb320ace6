use crate::{
    config::PaginatorConfig,
    error::Result,
    helpers::{
        parameter_helpers::{
            compose_parameters, next_page, previous_page, ParameterRole, PAGE_PARAMETER,
        },
        window_helpers::{visible_pages, WindowEntry},
    },
    models::{
        link::{Link, LinkSet},
        pagination::{PaginationQuery, PaginationQueryBuilder, VisibleEntries},
    },
    services::link_builder::LinkBuilder,
};

/// Builds pagination links for a [`PaginationQuery`] through an injected [`LinkBuilder`].
#[derive(Debug, Clone)]
pub struct Paginator<B> {
    link_builder: B,
    config: PaginatorConfig,
}

impl<B: LinkBuilder> Paginator<B> {
    pub fn new(link_builder: B, config: PaginatorConfig) -> Self {
        Self {
            link_builder,
            config,
        }
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Starts a query pre-filled with the configured page size.
    pub fn query(&self) -> PaginationQueryBuilder {
        PaginationQuery::builder(self.config.per_page)
    }

    /// Links for `page` of `query`. Negative pages are read as their magnitude; pages past
    /// the last one are not clamped.
    pub fn get_links(&self, query: &PaginationQuery, page: i64) -> Result<LinkSet> {
        let current = page.unsigned_abs();
        let total_pages = query.total_pages();

        tracing::debug!(
            route = %query.route_id(),
            total = query.total(),
            per_page = query.per_page(),
            total_pages,
            current,
            "building pagination links"
        );

        if total_pages > 1 {
            self.multi_page_links(query, total_pages, current)
        } else {
            self.single_page_links(query)
        }
    }

    /// Range of results shown on `page`, e.g. 21-30 of 500.
    pub fn visible_entries(&self, query: &PaginationQuery, page: i64) -> VisibleEntries {
        let page = page.unsigned_abs().max(1);
        let per_page = query.per_page();
        let page_end = page.saturating_mul(per_page);

        VisibleEntries {
            first: (page - 1).saturating_mul(per_page).saturating_add(1),
            last: if query.total() > page_end {
                page_end
            } else {
                query.total()
            },
            total: query.total(),
        }
    }

    fn single_page_links(&self, query: &PaginationQuery) -> Result<LinkSet> {
        let destination =
            self.link_builder
                .generate(query.route_id(), query.route_parameters(), false)?;

        Ok(LinkSet::new(vec![
            Link::previous(destination.clone(), None),
            Link::page(1, destination.clone(), true),
            Link::next(destination, None),
        ]))
    }

    fn multi_page_links(
        &self,
        query: &PaginationQuery,
        total_pages: u64,
        current: u64,
    ) -> Result<LinkSet> {
        let sort_token = query.sort().encode();
        let compose = |role| {
            compose_parameters(
                query.route_parameters(),
                total_pages,
                current,
                role,
                query.per_page(),
                &sort_token,
            )
        };

        let visible = visible_pages(total_pages, current);
        let mut links = Vec::with_capacity(visible.len() + 2);

        let previous = self.link_builder.generate(
            query.route_id(),
            &compose(ParameterRole::Previous),
            false,
        )?;
        links.push(Link::previous(previous, Some(previous_page(current))));

        for entry in visible {
            match entry {
                WindowEntry::Ellipsis => links.push(Link::ellipsis()),
                WindowEntry::Page(page) => {
                    let mut parameters = compose(ParameterRole::Plain);
                    parameters.insert(PAGE_PARAMETER, page);

                    let destination =
                        self.link_builder
                            .generate(query.route_id(), &parameters, false)?;
                    links.push(Link::page(page, destination, page == current));
                }
            }
        }

        let next = self
            .link_builder
            .generate(query.route_id(), &compose(ParameterRole::Next), false)?;
        links.push(Link::next(next, Some(next_page(total_pages, current))));

        Ok(LinkSet::new(links))
    }
}
