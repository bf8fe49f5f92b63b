use std::time::{Duration, Instant};

use crate::config::SieveConfig;
use crate::data::categories::{extract_categories, CategoryIndex};
use crate::data::error::LoadError;
use crate::data::filter::{self, Selection};
use crate::data::model::{DecodedFile, Dataset};
use crate::data::preview::{self, Preview};

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Transient message shown in the top bar.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= ttl
    }
}

// ---------------------------------------------------------------------------
// Loaded file
// ---------------------------------------------------------------------------

/// Everything derived from one successfully loaded file.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub file_name: String,
    /// Validated rows; the base of every filter run.
    pub dataset: Dataset,
    /// Built from `dataset` once, never from a filtered view.
    pub categories: CategoryIndex,
    /// Selection currently applied to the preview.
    pub selection: Selection,
    /// Rows of `dataset` passing `selection`.
    pub matching: usize,
    pub preview: Preview,
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
///
/// `loaded == None` is the unloaded state: no dataset and filters disabled.
pub struct Session {
    pub config: SieveConfig,

    /// Loaded file (None until user loads one).
    loaded: Option<LoadedFile>,

    /// Selection being edited in the filter panel, not yet applied.
    pub pending: Selection,

    /// Whether the preview table is hidden ("Hide data").
    pub preview_hidden: bool,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pub notification: Option<Notification>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SieveConfig::default())
    }
}

impl Session {
    pub fn new(config: SieveConfig) -> Self {
        Self {
            config,
            loaded: None,
            pending: Selection::new(),
            preview_hidden: false,
            loading: false,
            notification: None,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedFile> {
        self.loaded.as_ref()
    }

    /// Category values for the filter widgets.
    pub fn categories(&self) -> Option<&CategoryIndex> {
        self.loaded.as_ref().map(|l| &l.categories)
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.loaded.as_ref().map(|l| &l.preview)
    }

    /// Install a decoded file, replacing all prior state.
    ///
    /// On error nothing changes: the previous file (if any) stays loaded.
    pub fn load_file(
        &mut self,
        file_name: &str,
        decoded: DecodedFile,
    ) -> Result<&LoadedFile, LoadError> {
        let kind = decoded.kind;
        let dataset = Dataset::from_decoded(decoded)?;
        let categories = extract_categories(&dataset.rows, &self.config.category_fields());
        let preview = preview::project(&dataset.rows, &dataset.headers, self.config.preview_limit);

        log::info!(
            "Loaded {file_name}: {} rows with columns {:?}",
            dataset.len(),
            dataset.headers
        );
        if dataset.is_empty() {
            log::warn!("{file_name} has no non-empty data rows");
        }

        self.pending.clear();
        self.preview_hidden = false;
        self.loading = false;
        self.notify(
            format!("{} file loaded.", kind.label()),
            NotificationLevel::Info,
        );

        let loaded = self.loaded.insert(LoadedFile {
            file_name: file_name.to_string(),
            matching: dataset.len(),
            dataset,
            categories,
            selection: Selection::new(),
            preview,
        });
        Ok(&*loaded)
    }

    /// Filter the original dataset by `selection` and rebuild the preview.
    /// `None` while no file is loaded.
    pub fn apply_filters(&mut self, selection: Selection) -> Option<&Preview> {
        let limit = self.config.preview_limit;
        let loaded = self.loaded.as_mut()?;

        let rows = filter::apply(&loaded.dataset.rows, &selection);
        log::debug!(
            "Filter {:?}: {} of {} rows match",
            selection,
            rows.len(),
            loaded.dataset.len()
        );

        loaded.matching = rows.len();
        loaded.preview = preview::project(&rows, &loaded.dataset.headers, limit);
        loaded.selection = selection;
        self.preview_hidden = false;
        Some(&loaded.preview)
    }

    /// Apply whatever is selected in the filter panel.
    pub fn apply_pending(&mut self) -> Option<&Preview> {
        let selection = self.pending.clone();
        self.apply_filters(selection)
    }

    /// Clear the selection and show the unfiltered dataset.
    pub fn reset_filters(&mut self) -> Option<&Preview> {
        self.pending.clear();
        self.apply_filters(Selection::new())
    }

    /// Add or remove `value` from the pending selection of `field`.
    pub fn toggle_selection(&mut self, field: &str, value: &str) {
        let selected = self.pending.entry(field.to_string()).or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        self.pending
            .get(field)
            .is_some_and(|vals| vals.contains(value))
    }

    /// Mark a load as started. `false` if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Hide the preview table; the dataset stays loaded.
    pub fn hide_preview(&mut self) {
        self.preview_hidden = true;
        self.notify("Data hidden.", NotificationLevel::Info);
    }

    /// Record a failed load. Prior state is left untouched.
    pub fn report_error(&mut self, err: &LoadError) {
        log::error!("Failed to load file: {err}");
        self.notify(err.to_string(), NotificationLevel::Error);
        self.loading = false;
    }

    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    /// Drop the notification once it has been visible long enough.
    pub fn expire_notification(&mut self, now: Instant) {
        let ttl = self.config.notification_duration();
        if self.notification.as_ref().is_some_and(|n| n.is_expired(ttl, now)) {
            self.notification = None;
        }
    }
}
