//! Static endpoint descriptors.
//!
//! Each public operation owns one table naming its remote path and the
//! options it validates. Tables are independent: two endpoints that accept a
//! `limit` each declare it.

/// Shape an option must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    /// An integer, a list of integers, or a comma-separated string of them.
    /// Normalized to a comma-joined string.
    IntegerList,
    Boolean,
    String,
    /// An integer in the closed range `[min, max]`.
    BoundedInteger { min: i64, max: i64 },
}

impl FieldKind {
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Integer | FieldKind::BoundedInteger { .. } => "an integer value",
            FieldKind::IntegerList => "integer values",
            FieldKind::Boolean => "a boolean value",
            FieldKind::String => "a string value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// A remote method path and the rules for its options, checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub fields: &'static [FieldRule],
}

pub const LATEST_ACTIVITY: EndpointDescriptor = EndpointDescriptor {
    path: "Activity/LatestActivity",
    fields: &[
        FieldRule::optional("limit", FieldKind::Integer),
        FieldRule::optional("namespaces", FieldKind::IntegerList),
        FieldRule::optional("allowDuplicates", FieldKind::Boolean),
    ],
};

pub const RECENTLY_CHANGED_ARTICLES: EndpointDescriptor = EndpointDescriptor {
    path: "Activity/RecentlyChangedArticles",
    fields: &[
        FieldRule::optional("limit", FieldKind::Integer),
        FieldRule::optional("namespaces", FieldKind::IntegerList),
        FieldRule::optional("allowDuplicates", FieldKind::Boolean),
    ],
};

pub const NAVIGATION: EndpointDescriptor = EndpointDescriptor {
    path: "Navigation/Data",
    fields: &[],
};

pub const RECOMMENDATIONS_FOR_ARTICLE: EndpointDescriptor = EndpointDescriptor {
    path: "Recommendations/ForArticle",
    fields: &[
        FieldRule::optional("id", FieldKind::Integer),
        FieldRule::optional("limit", FieldKind::BoundedInteger { min: 1, max: 30 }),
    ],
};

pub const RELATED_PAGES: EndpointDescriptor = EndpointDescriptor {
    path: "RelatedPages/List",
    fields: &[
        FieldRule::required("ids", FieldKind::IntegerList),
        FieldRule::optional("limit", FieldKind::Integer),
    ],
};

pub const SEARCH_SUGGESTIONS: EndpointDescriptor = EndpointDescriptor {
    path: "SearchSuggestions/List",
    fields: &[FieldRule::required("query", FieldKind::String)],
};

pub const USER_DETAILS: EndpointDescriptor = EndpointDescriptor {
    path: "User/Details",
    fields: &[
        FieldRule::required("ids", FieldKind::IntegerList),
        FieldRule::optional("size", FieldKind::Integer),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_lookups_require_ids() {
        for descriptor in [RELATED_PAGES, USER_DETAILS] {
            let ids = descriptor.fields.iter().find(|f| f.name == "ids").unwrap();
            assert!(ids.required, "{}", descriptor.path);
            assert_eq!(ids.kind, FieldKind::IntegerList);
        }
    }

    #[test]
    fn recommendation_limit_is_bounded() {
        let limit = RECOMMENDATIONS_FOR_ARTICLE.fields[1];
        assert_eq!(limit.name, "limit");
        assert_eq!(limit.kind, FieldKind::BoundedInteger { min: 1, max: 30 });
    }
}
