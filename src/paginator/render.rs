//! Turns a page of entries into a display object.
//!
//! Rendering is pure: nothing here talks to Discord. The messaging layer converts a
//! [`RenderedPage`] into an embed when it is sent or edited.

use super::pages::Page;

/// A display attribute that is either shared by every page or chosen per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageValue<T> {
    /// The same value on every page.
    Fixed(T),
    /// One value per page, indexed by the page being shown.
    PerPage(Vec<T>),
}

impl<T> PageValue<T> {
    /// Resolve the value for a 1-indexed page.
    ///
    /// Returns `None` for a per-page value without an item for `page`.
    pub fn resolve(&self, page: usize) -> Option<&T> {
        match self {
            PageValue::Fixed(value) => Some(value),
            PageValue::PerPage(values) => page.checked_sub(1).and_then(|i| values.get(i)),
        }
    }

    /// Number of per-page items, or `None` for a fixed value.
    pub fn per_page_len(&self) -> Option<usize> {
        match self {
            PageValue::Fixed(_) => None,
            PageValue::PerPage(values) => Some(values.len()),
        }
    }
}

impl<T: Default> Default for PageValue<T> {
    fn default() -> Self {
        PageValue::Fixed(T::default())
    }
}

impl From<&str> for PageValue<String> {
    fn from(value: &str) -> Self {
        PageValue::Fixed(value.to_string())
    }
}

impl From<String> for PageValue<String> {
    fn from(value: String) -> Self {
        PageValue::Fixed(value)
    }
}

impl From<Vec<String>> for PageValue<String> {
    fn from(values: Vec<String>) -> Self {
        PageValue::PerPage(values)
    }
}

impl From<u32> for PageValue<u32> {
    fn from(value: u32) -> Self {
        PageValue::Fixed(value)
    }
}

impl From<Vec<u32>> for PageValue<u32> {
    fn from(values: Vec<u32>) -> Self {
        PageValue::PerPage(values)
    }
}

/// Attributes applied to every rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageStyle {
    pub title: PageValue<String>,
    pub colour: PageValue<u32>,
    pub thumbnail: Option<PageValue<String>>,
    pub prefix: String,
    pub suffix: String,
}

/// The display object for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedPage {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub thumbnail: Option<String>,
    pub footer: Option<String>,
}

/// Render the 1-indexed `page` out of `pages`.
///
/// A page outside `pages` (only possible when there are no pages at all) renders an
/// empty description. The footer only appears when there is more than one page.
pub fn render_page(pages: &[Page], page: usize, style: &PageStyle) -> RenderedPage {
    let description = page
        .checked_sub(1)
        .and_then(|i| pages.get(i))
        .map(|entries| {
            entries
                .iter()
                .map(|entry| format!("{}{}{}", style.prefix, entry, style.suffix))
                .collect::<String>()
        })
        .unwrap_or_default();

    let footer = (pages.len() > 1).then(|| format!("Page {} of {}", page, pages.len()));

    RenderedPage {
        title: style.title.resolve(page).cloned().unwrap_or_default(),
        description,
        colour: style.colour.resolve(page).copied().unwrap_or_default(),
        thumbnail: style
            .thumbnail
            .as_ref()
            .and_then(|thumbnail| thumbnail.resolve(page))
            .cloned(),
        footer,
    }
}
