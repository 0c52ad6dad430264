//! Recording mock collaborators and a strip harness for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::mpsc::Sender;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton};

use crate::config::{FileSettingsStore, SettingsOption, TabBarSettings};
use crate::core::{Icon, Thumbnail, WindowId};
use crate::gui::{StripSignal, TabDrag, TabStrip};
use crate::host::{
    ActionDefinition, ActionDispatcher, ActionId, ActionParameters, GestureContext, GestureInput,
    GestureRouter, IconTheme, PreviewFactory, PreviewPopup, Prompt, Services, SettingsStore,
    StripId, StripNotification, UrlOpenConfirmation, UrlOpenPrompt, WindowChange, WindowInfo,
    WindowRegistry,
};

pub const STRIP: StripId = StripId(1);
pub const STRIP_WIDTH: u32 = 1000;
pub const STRIP_HEIGHT: u32 = 28;

// ── Window registry ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockWindows {
    pub windows: RefCell<HashMap<WindowId, WindowInfo>>,
    pub moved: RefCell<Vec<(WindowId, StripId, usize)>>,
    pub opened: RefCell<Vec<(String, usize)>>,
    pub closed: RefCell<Vec<WindowId>>,
    pub released: RefCell<Vec<WindowId>>,
    pub unsubscribed: RefCell<Vec<WindowId>>,
    senders: RefCell<HashMap<WindowId, Sender<StripNotification>>>,
}

impl MockWindows {
    pub fn insert(&self, info: WindowInfo) {
        self.windows.borrow_mut().insert(info.id, info);
    }

    pub fn update(&self, id: WindowId, f: impl FnOnce(&mut WindowInfo)) {
        if let Some(info) = self.windows.borrow_mut().get_mut(&id) {
            f(info);
        }
    }

    /// Sends a change notification the way a real window would.
    pub fn notify(&self, id: WindowId, change: WindowChange) {
        if let Some(tx) = self.senders.borrow().get(&id) {
            let _ = tx.send(StripNotification::Window { window: id, change });
        }
    }

    pub fn is_subscribed(&self, id: WindowId) -> bool {
        self.senders.borrow().contains_key(&id)
    }
}

impl WindowRegistry for MockWindows {
    fn window(&self, _strip: StripId, id: WindowId) -> Option<WindowInfo> {
        self.windows.borrow().get(&id).cloned()
    }

    fn owner_of(&self, id: WindowId) -> Option<StripId> {
        self.windows.borrow().contains_key(&id).then_some(STRIP)
    }

    fn move_window(&self, id: WindowId, target: StripId, index: usize) -> bool {
        self.moved.borrow_mut().push((id, target, index));
        true
    }

    fn open_url(&self, _target: StripId, url: &str, index: usize) -> bool {
        self.opened.borrow_mut().push((url.to_owned(), index));
        true
    }

    fn close_window(&self, id: WindowId) {
        self.closed.borrow_mut().push(id);
    }

    fn release_window(&self, id: WindowId) {
        self.released.borrow_mut().push(id);
    }

    fn subscribe(&self, id: WindowId, sender: Sender<StripNotification>) {
        self.senders.borrow_mut().insert(id, sender);
    }

    fn unsubscribe(&self, id: WindowId) {
        self.senders.borrow_mut().remove(&id);
        self.unsubscribed.borrow_mut().push(id);
    }
}

// ── Actions ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockActions {
    pub triggered: RefCell<Vec<(ActionId, ActionParameters)>>,
    pub disabled: RefCell<HashSet<ActionId>>,
    pub shortcuts: RefCell<HashMap<ActionId, Vec<String>>>,
}

impl MockActions {
    pub fn triggered_of(&self, action: ActionId) -> Vec<ActionParameters> {
        self.triggered
            .borrow()
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, p)| *p)
            .collect()
    }
}

impl ActionDispatcher for MockActions {
    fn definition(&self, action: ActionId) -> Option<ActionDefinition> {
        Some(ActionDefinition {
            action,
            shortcuts: self.shortcuts.borrow().get(&action).cloned().unwrap_or_default(),
        })
    }

    fn is_enabled(&self, action: ActionId) -> bool {
        !self.disabled.borrow().contains(&action)
    }

    fn trigger(&self, action: ActionId, parameters: &ActionParameters) {
        self.triggered.borrow_mut().push((action, *parameters));
    }
}

// ── Gestures ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockGestures {
    pub consume: Cell<bool>,
    pub offered: RefCell<Vec<(GestureInput, Vec<GestureContext>, ActionParameters)>>,
}

impl GestureRouter for MockGestures {
    fn start_gesture(
        &self,
        input: &GestureInput,
        contexts: &[GestureContext],
        parameters: &ActionParameters,
    ) -> bool {
        self.offered
            .borrow_mut()
            .push((*input, contexts.to_vec(), *parameters));
        self.consume.get()
    }
}

// ── Icons ────────────────────────────────────────────────────────────

pub struct MockIcons;

impl IconTheme for MockIcons {
    fn icon(&self, name: &str) -> Icon {
        Icon::named(name)
    }
}

// ── Preview popup ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PreviewLog {
    pub visible: bool,
    pub title: String,
    pub had_thumbnail: bool,
    pub shown_at: Vec<PhysicalPosition<i32>>,
    pub animated_to: Vec<PhysicalPosition<i32>>,
    pub hides: usize,
}

pub struct MockPreview {
    log: Rc<RefCell<PreviewLog>>,
}

impl PreviewPopup for MockPreview {
    fn set_preview(&mut self, title: &str, thumbnail: Option<&Thumbnail>) {
        let mut log = self.log.borrow_mut();
        log.title = title.to_owned();
        log.had_thumbnail = thumbnail.is_some();
    }

    fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(200, 150)
    }

    fn is_visible(&self) -> bool {
        self.log.borrow().visible
    }

    fn show_at(&mut self, position: PhysicalPosition<i32>) {
        let mut log = self.log.borrow_mut();
        log.visible = true;
        log.shown_at.push(position);
    }

    fn animate_to(&mut self, position: PhysicalPosition<i32>) {
        self.log.borrow_mut().animated_to.push(position);
    }

    fn hide(&mut self) {
        let mut log = self.log.borrow_mut();
        log.visible = false;
        log.hides += 1;
    }
}

#[derive(Default)]
pub struct MockPreviewFactory {
    pub created: Cell<usize>,
    pub log: Rc<RefCell<PreviewLog>>,
}

impl PreviewFactory for MockPreviewFactory {
    fn create(&self) -> Box<dyn PreviewPopup> {
        self.created.set(self.created.get() + 1);
        Box::new(MockPreview {
            log: self.log.clone(),
        })
    }
}

// ── Prompt ───────────────────────────────────────────────────────────

pub struct MockPrompt {
    pub answer: Cell<UrlOpenConfirmation>,
    pub asked: RefCell<Vec<UrlOpenPrompt>>,
}

impl Default for MockPrompt {
    fn default() -> Self {
        Self {
            answer: Cell::new(UrlOpenConfirmation {
                proceed: true,
                dont_ask_again: false,
            }),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompt for MockPrompt {
    fn confirm_open_urls(&self, prompt: &UrlOpenPrompt) -> UrlOpenConfirmation {
        self.asked.borrow_mut().push(prompt.clone());
        self.answer.get()
    }
}

// ── Harness ──────────────────────────────────────────────────────────

pub struct Harness {
    pub strip: TabStrip,
    pub windows: Rc<MockWindows>,
    pub actions: Rc<MockActions>,
    pub gestures: Rc<MockGestures>,
    pub settings: Rc<FileSettingsStore>,
    pub previews: Rc<MockPreviewFactory>,
    pub prompts: Rc<MockPrompt>,
    pub signals: Rc<RefCell<Vec<StripSignal>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(TabBarSettings::default())
    }

    /// A strip 1000x28 px wide whose store starts from `settings`.
    pub fn with_settings(settings: TabBarSettings) -> Self {
        let store = Rc::new(FileSettingsStore::with_path(None));
        for &option in SettingsOption::ALL {
            store.set_value(option, settings.value(option));
        }

        let windows = Rc::new(MockWindows::default());
        let actions = Rc::new(MockActions::default());
        let gestures = Rc::new(MockGestures::default());
        let previews = Rc::new(MockPreviewFactory::default());
        let prompts = Rc::new(MockPrompt::default());
        let services = Services {
            windows: windows.clone(),
            actions: actions.clone(),
            gestures: gestures.clone(),
            settings: store.clone(),
            icons: Rc::new(MockIcons),
            previews: previews.clone(),
            prompts: prompts.clone(),
        };

        let mut strip = TabStrip::new(STRIP, services);
        strip.resize(PhysicalSize::new(STRIP_WIDTH, STRIP_HEIGHT));
        let signals = Rc::new(RefCell::new(Vec::new()));
        let sink = signals.clone();
        strip.connect(move |signal| sink.borrow_mut().push(signal.clone()));

        Self {
            strip,
            windows,
            actions,
            gestures,
            settings: store,
            previews,
            prompts,
            signals,
        }
    }

    /// Harness with `count` unpinned tabs for windows 1..=count.
    pub fn with_tabs(count: u64) -> Self {
        let mut harness = Self::new();
        for id in 1..=count {
            harness.add_window(id, false);
        }
        harness
    }

    /// Registers window `id` and appends a tab for it.
    pub fn add_window(&mut self, id: u64, pinned: bool) -> WindowId {
        let window = WindowId(id);
        let mut info = WindowInfo::new(window, format!("Page {id}"), format!("https://{id}.test/"));
        info.is_pinned = pinned;
        self.windows.insert(info);
        let count = self.strip.count();
        assert!(self.strip.add_tab(count, window));
        window
    }

    /// Window ids in strip order.
    pub fn order(&self) -> Vec<u64> {
        (0..self.strip.count())
            .filter_map(|i| self.strip.window_at(i))
            .map(|w| w.0)
            .collect()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> Option<TabDrag> {
        self.strip.on_cursor_moved(PhysicalPosition::new(x, y))
    }

    pub fn press_at(&mut self, x: f64, y: f64) -> bool {
        self.move_to(x, y);
        self.strip
            .on_mouse_input(ElementState::Pressed, MouseButton::Left)
    }

    pub fn release(&mut self) {
        self.strip
            .on_mouse_input(ElementState::Released, MouseButton::Left);
    }

    pub fn take_signals(&self) -> Vec<StripSignal> {
        std::mem::take(&mut *self.signals.borrow_mut())
    }

    /// Center of tab `index` in strip coordinates.
    pub fn tab_center(&self, index: usize) -> (f64, f64) {
        let rect = self.strip.tab_rect(index).unwrap_or_default();
        (
            rect.x as f64 + rect.w as f64 / 2.0,
            rect.y as f64 + rect.h as f64 / 2.0,
        )
    }
}
