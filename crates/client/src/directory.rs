use shared_types::{total_pages, AppError, PageControls, UserListResponse, UserSummary};

pub const LOAD_ERROR: &str = "Error loading users";
pub const DELETE_ERROR: &str = "Error deleting user";
pub const UPDATE_ERROR: &str = "Error updating user";

/// A page fetch the view must perform. Carries the epoch it was issued under
/// so its response can be matched against the latest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub epoch: u64,
    pub page: u64,
    pub limit: u64,
}

/// State behind the admin user listing.
///
/// Every page change or refresh bumps the epoch; [`UserDirectory::apply`]
/// drops any response whose epoch is no longer current, so the last request
/// issued wins regardless of the order responses arrive in.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    page: u64,
    page_size: u64,
    epoch: u64,
    users: Vec<UserSummary>,
    total: u64,
    loading: bool,
    error: Option<String>,
}

impl UserDirectory {
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            epoch: 0,
            users: Vec::new(),
            total: 0,
            loading: true,
            error: None,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn users(&self) -> &[UserSummary] {
        &self.users
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// True until the first response (success or failure) has been applied.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.page_size)
    }

    pub fn controls(&self) -> PageControls {
        PageControls::new(self.page, self.total_pages())
    }

    /// Re-fetch the current page.
    pub fn refresh(&mut self) -> PageRequest {
        self.epoch += 1;
        PageRequest {
            epoch: self.epoch,
            page: self.page,
            limit: self.page_size,
        }
    }

    /// Move to the next page, unless the Next control is disabled.
    pub fn next(&mut self) -> Option<PageRequest> {
        if self.controls().next_disabled() {
            return None;
        }
        self.page += 1;
        Some(self.refresh())
    }

    /// Move to the previous page, unless the Previous control is disabled.
    pub fn previous(&mut self) -> Option<PageRequest> {
        if self.controls().prev_disabled() {
            return None;
        }
        self.page -= 1;
        Some(self.refresh())
    }

    /// Apply a page response. Returns `false` when the response was stale
    /// and has been discarded.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        result: Result<UserListResponse, AppError>,
    ) -> bool {
        if request.epoch != self.epoch {
            tracing::debug!(
                stale_epoch = request.epoch,
                current_epoch = self.epoch,
                "Discarding stale user page"
            );
            return false;
        }

        match result {
            Ok(list) => {
                self.users = list.users;
                self.total = list.total;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, page = request.page, "Failed to load users");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Step back to the last page when the listing shrank beneath the
    /// current one, typically after deleting the only row on the last page.
    /// Returns the fetch for the new page, or `None` when already in range.
    pub fn clamp_page(&mut self) -> Option<PageRequest> {
        let last = self.total_pages();
        if last == 0 || self.page <= last {
            return None;
        }
        tracing::debug!(from = self.page, to = last, "Current page is past the end");
        self.page = last;
        Some(self.refresh())
    }

    /// Outcome of a delete. Success asks for exactly one re-fetch of the
    /// current page; failure keeps the stale row and sets the banner.
    pub fn delete_finished(&mut self, result: Result<(), AppError>) -> Option<PageRequest> {
        self.mutation_finished(result, DELETE_ERROR)
    }

    /// Outcome of a status change; same contract as [`Self::delete_finished`].
    pub fn update_finished<T>(&mut self, result: Result<T, AppError>) -> Option<PageRequest> {
        self.mutation_finished(result.map(|_| ()), UPDATE_ERROR)
    }

    fn mutation_finished(
        &mut self,
        result: Result<(), AppError>,
        message: &str,
    ) -> Option<PageRequest> {
        match result {
            Ok(()) => Some(self.refresh()),
            Err(e) => {
                tracing::warn!(error = %e, "{message}");
                self.error = Some(message.to_string());
                None
            }
        }
    }
}
