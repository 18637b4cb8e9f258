use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::models::hotel::Hotel;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Rating,
    Price,
    Name,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "createdAt" | "created_at" => Some(SortField::CreatedAt),
            "rating" => Some(SortField::Rating),
            "price" => Some(SortField::Price),
            "name" => Some(SortField::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub min_rating: Option<f64>,
    pub max_price: Option<i64>,
    pub amenities: Vec<String>,
    pub sort: SortField,
    pub order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: None,
            city: None,
            state: None,
            country: None,
            min_rating: None,
            max_price: None,
            amenities: Vec::new(),
            sort: SortField::CreatedAt,
            order: SortOrder::Desc,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug)]
pub struct SearchPage {
    pub items: Vec<Hotel>,
    pub pagination: Pagination,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches(criteria: &SearchCriteria, hotel: &Hotel) -> bool {
    if let Some(q) = &criteria.query {
        if !contains_ci(&hotel.name, q) && !contains_ci(&hotel.description, q) {
            return false;
        }
    }
    if let Some(city) = &criteria.city {
        if !contains_ci(&hotel.address.city, city) {
            return false;
        }
    }
    if let Some(state) = &criteria.state {
        if !contains_ci(&hotel.address.state, state) {
            return false;
        }
    }
    if let Some(country) = &criteria.country {
        if !contains_ci(&hotel.address.country, country) {
            return false;
        }
    }
    if let Some(min_rating) = criteria.min_rating {
        if hotel.rating < min_rating {
            return false;
        }
    }
    if let Some(max_price) = criteria.max_price {
        if hotel.price_range.max > max_price {
            return false;
        }
    }
    if !criteria.amenities.is_empty() {
        let any = criteria.amenities.iter().any(|wanted| {
            hotel
                .amenities
                .iter()
                .any(|have| have.eq_ignore_ascii_case(wanted))
        });
        if !any {
            return false;
        }
    }

    true
}

/// Applies the full criteria to a candidate set: filter, sort, then slice
/// out the requested page. The repository pre-filters in SQL; this is the
/// single place where the search contract is enforced.
pub fn apply(criteria: &SearchCriteria, hotels: Vec<Hotel>) -> SearchPage {
    let mut matched: Vec<Hotel> = hotels
        .into_iter()
        .filter(|hotel| matches(criteria, hotel))
        .collect();

    matched.sort_by(|a, b| {
        let ordering = match criteria.sort {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
            SortField::Price => a.price_range.min.cmp(&b.price_range.min),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        };
        match criteria.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let limit = criteria.limit.clamp(1, MAX_PAGE_SIZE);
    let page = criteria.page.max(1);
    let total_items = matched.len() as u64;
    let total_pages = (total_items.div_ceil(limit as u64)) as u32;

    let start = (page as usize - 1) * limit as usize;
    let items: Vec<Hotel> = if start >= matched.len() {
        Vec::new()
    } else {
        matched.into_iter().skip(start).take(limit as usize).collect()
    };

    SearchPage {
        items,
        pagination: Pagination {
            page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
