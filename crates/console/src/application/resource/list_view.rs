//! List area: item cards and pagination controls

use mediadmin_domain::common::format_display_date;
use mediadmin_domain::Resource;

/// Pagination state derived from the current page and item count.
///
/// No total is known, so "next" is always enabled. The controls stay visible
/// on an empty page past the first one so the user can go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub visible: bool,
}

impl PageControls {
    pub fn new(page: u32, item_count: usize) -> Self {
        Self {
            page,
            prev_enabled: page > 1,
            next_enabled: true,
            visible: item_count > 0 || page > 1,
        }
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.prev_enabled.then(|| self.page - 1)
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

/// Summary card for one item
#[derive(Debug, Clone, PartialEq)]
pub struct Card<R> {
    pub item: R,
    pub heading: String,
    pub subheading: Option<String>,
    pub badge: Option<String>,
    pub image_url: Option<String>,
    pub created: Option<String>,
}

impl<R: Resource> Card<R> {
    pub fn of(item: &R) -> Self {
        let created = &item.timestamps().created_at;
        Self {
            heading: item.heading(),
            subheading: item.subheading(),
            badge: item.relation().map(|r| r.name.clone()),
            image_url: item.image_url().map(str::to_string),
            created: (!created.is_empty()).then(|| format_display_date(created)),
            item: item.clone(),
        }
    }
}

/// One rendered page of the list
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R> {
    pub cards: Vec<Card<R>>,
    pub controls: PageControls,
}

impl<R: Resource> ListView<R> {
    pub fn new(items: &[R], page: u32) -> Self {
        Self {
            cards: items.iter().map(Card::of).collect(),
            controls: PageControls::new(page, items.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Placeholder shown instead of cards
    pub fn empty_message(&self) -> String {
        let plural = R::schema().plural.to_lowercase();
        if self.controls.page > 1 {
            format!("No more {plural} on this page.")
        } else {
            format!("No {plural} yet. Create the first one!")
        }
    }
}
