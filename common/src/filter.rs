//! Page-local browse state for the partner directory and the learning hub:
//! a category filter, a free-text search and a toggled "spotlight" selection
//! over an immutable list.

use std::str::FromStr;

use crate::article::{Article, ArticleCategory};
use crate::partner::{Partner, PartnerType};
use crate::repository::Record;

/// Filter-button value that keeps every category.
pub const ALL_CATEGORIES: &str = "all";

/// Something that can be narrowed by category and searched by text.
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;

    /// Primary text matched by the search box.
    fn search_name(&self) -> &str;

    /// Secondary tag-like values, any of which may match the search box.
    fn search_tags(&self) -> &[String];
}

impl Categorized for Partner {
    type Category = PartnerType;

    fn category(&self) -> PartnerType {
        self.partner_type
    }

    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_tags(&self) -> &[String] {
        &self.waste_types
    }
}

impl Categorized for Article {
    type Category = ArticleCategory;

    fn category(&self) -> ArticleCategory {
        self.category
    }

    fn search_name(&self) -> &str {
        &self.title
    }

    fn search_tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    /// `"all"` keeps everything; anything else must name a category exactly.
    pub fn parse(value: &str) -> Result<Self, C::Err>
    where
        C: FromStr,
    {
        if value == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            value.parse().map(CategoryFilter::Only)
        }
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Category filter AND text search.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter<C> {
    pub category: CategoryFilter<C>,
    pub query: String,
}

impl<C> Default for ListFilter<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
        }
    }
}

impl<C: Copy + PartialEq> ListFilter<C> {
    pub fn matches<T: Categorized<Category = C>>(&self, item: &T) -> bool {
        self.category.matches(item.category()) && self.matches_query(item)
    }

    /// Filtered view of `items`, order preserved.
    pub fn apply<'a, T: Categorized<Category = C>>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    fn matches_query<T: Categorized<Category = C>>(&self, item: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.search_name().to_lowercase().contains(&needle)
            || item
                .search_tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// At most one spotlighted entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: PartialEq> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the selected entity clears; selecting another replaces.
    pub fn toggle(&mut self, id: Id) {
        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.as_ref() == Some(id)
    }
}

/// Everything a browse page keeps between renders.
///
/// The selection is independent of the filter: a spotlighted entity that the
/// filter hides stays selected and keeps its spotlight.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState<C> {
    pub filter: ListFilter<C>,
    pub selection: Selection<String>,
}

impl<C> Default for DirectoryState<C> {
    fn default() -> Self {
        Self {
            filter: ListFilter::default(),
            selection: Selection::default(),
        }
    }
}

impl<C: Copy + PartialEq> DirectoryState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: CategoryFilter<C>) {
        self.filter.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn select<T: Record>(&mut self, item: &T) {
        self.selection.toggle(item.record_id().to_string());
    }

    pub fn visible<'a, T: Categorized<Category = C>>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.filter.apply(items)
    }

    /// The selected entity, looked up in the full list rather than the
    /// filtered one.
    pub fn spotlight<'a, T: Record>(&self, items: &'a [T]) -> Option<&'a T> {
        let id = self.selection.selected()?;
        items.iter().find(|item| item.record_id() == id.as_str())
    }

    pub fn is_spotlit<T: Record>(&self, item: &T) -> bool {
        self.selection
            .selected()
            .is_some_and(|id| id.as_str() == item.record_id())
    }
}
