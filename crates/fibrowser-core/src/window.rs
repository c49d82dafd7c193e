//! Browser window state container
//!
//! The window owns every tab, the chrome state and the action log. Engine
//! pages and downloads never touch it directly: they post events that
//! [`BrowserWindow::process_events`] applies on the UI thread.

use std::sync::Arc;

use fibrowser_download::{DownloadHandle, DownloadListener, DownloadManager, DownloadUpdate};
use fibrowser_navigation::{InputResolution, InputResolver, SearchEngine};
use fibrowser_tabs::{PageEvent, PageFactory, PageListener, TabId, TabState, TabStrip};

use crate::action_log::ActionLog;
use crate::bookmarks::Bookmark;
use crate::config::Config;
use crate::events::{BrowserEvent, EventQueue, EventSender};
use crate::shortcuts::WindowCommand;
use crate::snapshot::WindowSnapshot;
use crate::theme::Theme;
use crate::widgets::{AddressBar, ProgressIndicator};
use crate::Result;

/// Main browser window
pub struct BrowserWindow {
    /// Configuration
    config: Config,
    /// Engine page factory
    factory: Box<dyn PageFactory>,
    /// Pending engine notifications
    events: EventQueue,
    /// Listener handed to pages and downloads
    sender: Arc<EventSender>,
    tabs: TabStrip,
    address_bar: AddressBar,
    progress: ProgressIndicator,
    /// Input resolver for address bar, holds the selected search engine
    resolver: InputResolver,
    theme: &'static Theme,
    stylesheet: String,
    downloads: DownloadManager,
    bookmarks_bar_visible: bool,
    dev_tools_visible: bool,
    log: ActionLog,
}

impl BrowserWindow {
    /// Open a window with one tab on the home page.
    pub fn new(config: Config, mut factory: Box<dyn PageFactory>) -> Result<Self> {
        config.validate()?;

        let events = EventQueue::new();
        let sender = Arc::new(events.sender());

        let page_listener: Arc<dyn PageListener> = sender.clone();
        let first = TabState::create(factory.as_mut(), &config.home_page, page_listener);

        let mut address_bar = AddressBar::new();
        address_bar.show_url(first.url());

        let resolver = InputResolver::with_search_engine(&config.search_engine);
        let theme = Theme::find_or_default(&config.theme);
        let log = ActionLog::new(config.action_log_capacity);

        let mut window = Self {
            factory,
            events,
            sender,
            tabs: TabStrip::new(first),
            address_bar,
            progress: ProgressIndicator::default(),
            resolver,
            theme,
            stylesheet: theme.stylesheet(),
            downloads: DownloadManager::new(),
            bookmarks_bar_visible: false,
            dev_tools_visible: false,
            log,
            config,
        };

        window.log_action("Browser started");
        let theme_name = window.config.theme.clone();
        window.apply_theme(&theme_name);

        tracing::info!(home = %window.config.home_page, "Browser window opened");

        Ok(window)
    }

    // === Engine events ===

    /// Apply every pending engine notification in arrival order.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.events.try_next() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: BrowserEvent) {
        match event {
            BrowserEvent::Page { tab, event } => self.handle_page_event(tab, event),
            BrowserEvent::Download { handle, update } => self.handle_download_update(handle, update),
        }
    }

    fn handle_page_event(&mut self, tab: TabId, event: PageEvent) {
        // The tab may have been closed after the page posted the event
        if !self.tabs.contains(tab) {
            tracing::debug!(tab_id = %tab, event = ?event, "Ignoring event for closed tab");
            return;
        }

        match event {
            PageEvent::UrlChanged(url) => self.on_url_changed(tab, url),
            PageEvent::TitleChanged(title) => self.on_title_changed(tab, &title),
            PageEvent::IconChanged(icon) => self.on_icon_changed(tab, icon),
            PageEvent::LoadProgress(percent) => self.progress.set(percent),
            PageEvent::DownloadRequested(item) => {
                let listener: Arc<dyn DownloadListener> = self.sender.clone();
                let handle = self.downloads.add(item, listener);
                self.downloads.show();

                let file_name = self
                    .downloads
                    .get(handle)
                    .map(|record| record.file_name())
                    .unwrap_or_default();
                self.log_action(format!("Download started: {file_name}"));
            }
        }
    }

    fn on_url_changed(&mut self, tab: TabId, url: String) {
        // Any tab's navigation rewrites the address bar, current or not
        self.address_bar.show_url(&url);
        self.log_action(format!("Navigated to: {url}"));

        if let Ok(state) = self.tabs.get_mut(tab) {
            state.set_url(url);
        }
    }

    fn on_title_changed(&mut self, tab: TabId, title: &str) {
        if let Ok(state) = self.tabs.get_mut(tab) {
            state.set_title(title);
        }
    }

    fn on_icon_changed(&mut self, tab: TabId, icon: Option<String>) {
        if let Ok(state) = self.tabs.get_mut(tab) {
            state.set_favicon(icon);
        }
    }

    fn handle_download_update(&mut self, handle: DownloadHandle, update: DownloadUpdate) {
        if let Err(e) = self.downloads.apply(handle, update) {
            // Cleared from the list while the engine was still reporting
            tracing::debug!(error = %e, "Ignoring download update");
        }
    }

    // === Tab operations ===

    /// Open a tab on `url` (home page when `None`) and make it current.
    pub fn add_tab(&mut self, url: Option<&str>) -> TabId {
        let url = url.unwrap_or(&self.config.home_page).to_string();
        let listener: Arc<dyn PageListener> = self.sender.clone();
        let tab = TabState::create(self.factory.as_mut(), &url, listener);
        let id = tab.id();

        let index = self.tabs.push(tab);
        self.switch_to_tab(index);
        self.address_bar.focus();

        self.log_action(format!("New tab opened: {}", index + 1));
        id
    }

    /// Close the tab at `index`; the last remaining tab stays open.
    pub fn close_tab(&mut self, index: usize) {
        let before = self.tabs.current().id();

        match self.tabs.close(index) {
            Ok(_) => {
                self.log_action(format!("Tab closed: {}", index + 1));
                if self.tabs.current().id() != before {
                    self.sync_address_bar();
                }
            }
            Err(e) => tracing::debug!(error = %e, index, "Tab not closed"),
        }
    }

    pub fn close_current_tab(&mut self) {
        self.close_tab(self.tabs.current_index());
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
        self.sync_address_bar();
    }

    pub fn previous_tab(&mut self) {
        self.tabs.previous();
        self.sync_address_bar();
    }

    pub fn switch_to_tab(&mut self, index: usize) {
        match self.tabs.set_current(index).map(|_| ()) {
            Ok(()) => self.sync_address_bar(),
            Err(e) => tracing::debug!(error = %e, "Tab not switched"),
        }
    }

    fn sync_address_bar(&mut self) {
        let url = self.tabs.current().url().to_string();
        self.address_bar.show_url(&url);
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn current_tab(&self) -> &TabState {
        self.tabs.current()
    }

    // === Navigation ===

    pub fn back(&mut self) {
        self.tabs.current_mut().page_mut().back();
    }

    pub fn forward(&mut self) {
        self.tabs.current_mut().page_mut().forward();
    }

    pub fn refresh(&mut self) {
        self.tabs.current_mut().page_mut().reload();
    }

    /// Same reload as [`refresh`](Self::refresh); the engine keeps its cache.
    pub fn hard_refresh(&mut self) {
        self.tabs.current_mut().page_mut().reload();
        self.log_action("Hard refresh performed");
    }

    pub fn go_home(&mut self) {
        let home = self.config.home_page.clone();
        self.navigate_to(&home);
    }

    /// Load `url` as-is in the current tab
    pub fn navigate_to(&mut self, url: &str) {
        tracing::debug!(url = %url, tab_id = %self.tabs.current().id(), "Navigate");
        self.tabs.current_mut().page_mut().navigate(url);
    }

    /// Text typed into the address bar
    pub fn set_address_text(&mut self, text: &str) {
        self.address_bar.set_input(text);
    }

    /// Resolve the address bar text and load the result in the current tab.
    pub fn submit_address_bar(&mut self) -> InputResolution {
        let resolution = self.resolver.resolve(self.address_bar.text());
        self.navigate_to(resolution.url());
        resolution
    }

    pub fn open_bookmark(&mut self, title: &str) -> bool {
        match Bookmark::find(title) {
            Some(bookmark) => {
                self.navigate_to(bookmark.url);
                true
            }
            None => {
                tracing::debug!(bookmark = %title, "Unknown bookmark");
                false
            }
        }
    }

    pub fn focus_address_bar(&mut self) {
        self.address_bar.focus();
        self.address_bar.select_all();
    }

    pub fn address_bar(&self) -> &AddressBar {
        &self.address_bar
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    // === Search engine and theme ===

    pub fn set_search_engine(&mut self, name: &str) {
        let engine = self.resolver.set_search_engine(name);
        self.log_action(format!("Search engine changed to: {}", engine.name));
    }

    pub fn search_engine(&self) -> &'static SearchEngine {
        self.resolver.search_engine()
    }

    /// Text of the engine selector button
    pub fn search_selector_label(&self) -> String {
        format!("{} ▼", self.search_engine().name)
    }

    /// Apply a theme by name; unknown names get the default palette.
    pub fn apply_theme(&mut self, name: &str) {
        self.theme = Theme::find_or_default(name);
        self.stylesheet = self.theme.stylesheet();
        self.log_action(format!("Theme applied: {name}"));
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    // === Panels ===

    pub fn toggle_bookmarks_bar(&mut self) {
        self.bookmarks_bar_visible = !self.bookmarks_bar_visible;
        let state = if self.bookmarks_bar_visible { "shown" } else { "hidden" };
        self.log_action(format!("Bookmarks bar {state}"));
    }

    /// No settings dialog yet; the entry point toggles the bookmarks bar.
    pub fn show_settings(&mut self) {
        self.log_action("Settings opened");
        self.toggle_bookmarks_bar();
    }

    pub fn toggle_dev_tools(&mut self) {
        self.dev_tools_visible = !self.dev_tools_visible;
        let state = if self.dev_tools_visible { "shown" } else { "hidden" };
        self.log_action(format!("Developer tools {state}"));
    }

    /// Placeholder until history is tracked
    pub fn show_history(&mut self) {
        self.log_action("History viewed");
    }

    pub fn bookmarks_bar_visible(&self) -> bool {
        self.bookmarks_bar_visible
    }

    pub fn dev_tools_visible(&self) -> bool {
        self.dev_tools_visible
    }

    // === Downloads ===

    pub fn show_downloads(&mut self) {
        self.downloads.show();
    }

    pub fn hide_downloads(&mut self) {
        self.downloads.hide();
    }

    pub fn clear_completed_downloads(&mut self) -> usize {
        self.downloads.clear_completed()
    }

    pub fn cancel_download(&mut self, handle: DownloadHandle) -> Result<()> {
        Ok(self.downloads.cancel(handle)?)
    }

    pub fn downloads(&self) -> &DownloadManager {
        &self.downloads
    }

    // === Commands ===

    pub fn execute(&mut self, command: WindowCommand) {
        match command {
            WindowCommand::NewTab => {
                self.add_tab(None);
            }
            WindowCommand::CloseTab => self.close_current_tab(),
            WindowCommand::NextTab => self.next_tab(),
            WindowCommand::PreviousTab => self.previous_tab(),
            WindowCommand::FocusAddressBar => self.focus_address_bar(),
            WindowCommand::Refresh => self.refresh(),
            WindowCommand::HardRefresh => self.hard_refresh(),
            WindowCommand::ShowHistory => self.show_history(),
            WindowCommand::ToggleDevTools => self.toggle_dev_tools(),
        }
    }

    /// Run the command bound to a key sequence; false when nothing is bound.
    pub fn handle_shortcut(&mut self, keys: &str) -> bool {
        match WindowCommand::from_keys(keys) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    // === Action log ===

    pub fn log_action(&mut self, message: impl Into<String>) {
        self.log.record(message);
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Single-line status text, mirrors the newest log entry
    pub fn status(&self) -> &str {
        self.log.status()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot::capture(self)
    }
}
