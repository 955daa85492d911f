//! Page-level controller: page number, selection and which dialog is open

use mediadmin_domain::Resource;

/// The dialog currently visible; form and detail never show together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    List,
    Form { edit: bool },
    Detail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceController<R> {
    current_page: u32,
    selected: Option<R>,
    form_open: bool,
    edit_mode: bool,
}

impl<R> Default for ResourceController<R> {
    fn default() -> Self {
        Self {
            current_page: 1,
            selected: None,
            form_open: false,
            edit_mode: false,
        }
    }
}

impl<R: Resource> ResourceController<R> {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn active_view(&self) -> ActiveView {
        if self.form_open {
            ActiveView::Form {
                edit: self.edit_mode,
            }
        } else if self.selected.is_some() {
            ActiveView::Detail
        } else {
            ActiveView::List
        }
    }

    pub fn open_create(&mut self) {
        self.selected = None;
        self.edit_mode = false;
        self.form_open = true;
    }

    pub fn open_edit(&mut self, item: R) {
        self.selected = Some(item);
        self.edit_mode = true;
        self.form_open = true;
    }

    pub fn open_detail(&mut self, item: R) {
        self.selected = Some(item);
        self.form_open = false;
    }

    /// Dismisses the form. The selection is kept, so an edit started from the
    /// detail dialog returns to it.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.edit_mode = false;
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Closes the form and drops the (now stale) selection. Returns the page to
    /// refetch.
    pub fn on_form_submitted(&mut self) -> u32 {
        self.form_open = false;
        self.edit_mode = false;
        self.selected = None;
        self.current_page
    }

    /// Drops the deleted selection. Returns the page to refetch.
    pub fn on_delete_confirmed(&mut self) -> u32 {
        self.selected = None;
        self.current_page
    }

    /// Moves to page `page` (clamped to 1). No upper bound is known.
    pub fn change_page(&mut self, page: u32) -> u32 {
        self.current_page = page.max(1);
        self.current_page
    }
}
