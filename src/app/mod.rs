// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring an [`OverlaySession`] to a window.
//!
//! The `App` struct owns the session and translates Iced events into session
//! calls: ticks advance the clock, focus changes become lifecycle states, the
//! window width feeds the swipe threshold and pointer drags become swipes.

mod message;
mod subscription;

pub use message::{Flags, Message, Preset};

use crate::action::ActionRunner;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::toast::{ToastDraft, ToastId};
use crate::error::{BoxError, Result};
use crate::lifecycle::AppState;
use crate::queue::Action;
use crate::session::OverlaySession;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::DragState;
use crate::ui::{self, Toast};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, window, Element, Length, Point, Subscription, Task, Theme};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Payloads carried by the demo's action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    Undo,
    Retry,
}

pub struct App {
    session: OverlaySession<DemoAction>,
    diagnostics: DiagnosticsCollector,
    drag: DragState,
    cursor: Point,
    started: Instant,
    /// Passes that brought in an error toast.
    error_alerts: Rc<Cell<u32>>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        Config::default()
    })
}

fn demo_runner() -> Arc<dyn ActionRunner<DemoAction>> {
    Arc::new(|action: DemoAction| async move {
        match action {
            DemoAction::Undo => {
                tracing::info!("undo requested");
                Ok(())
            }
            DemoAction::Retry => Err::<(), BoxError>("upload endpoint unreachable".into()),
        }
    })
}

fn report<T>(result: Result<T>) {
    if let Err(err) = result {
        tracing::warn!(%err, "overlay session rejected update");
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        let diagnostics = DiagnosticsCollector::default();
        let error_alerts = Rc::new(Cell::new(0));
        let counter = Rc::clone(&error_alerts);

        let mut session = OverlaySession::new(&config)
            .with_action_runner(demo_runner())
            .with_diagnostics(diagnostics.handle())
            .on_new_error(move || counter.set(counter.get() + 1));
        report(session.set_screen_width(WINDOW_DEFAULT_WIDTH));
        if flags.allowed {
            report(session.set_allowed(true));
        }

        let app = Self {
            session,
            diagnostics,
            drag: DragState::default(),
            cursor: Point::ORIGIN,
            started: Instant::now(),
            error_alerts,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.error_alerts.get() {
            0 => "Toasts".to_string(),
            n => format!("Toasts ({n} error alerts)"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let busy = self.session.is_animating() || self.session.next_deadline().is_some();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(busy || self.drag.is_dragging()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        report(self.session.advance_to(self.started.elapsed()));

        let task = match message {
            Message::Tick(now) => {
                report(self.session.advance_to(now.saturating_duration_since(self.started)));
                Task::none()
            }
            Message::Push(preset) => {
                report(self.session.dispatch(Action::Push(draft(preset))));
                Task::none()
            }
            Message::HideAll => {
                report(self.session.dispatch(Action::HideAll));
                Task::none()
            }
            Message::ToggleAllowed => {
                let allowed = self.session.is_allowed().unwrap_or(false);
                report(self.session.set_allowed(!allowed));
                Task::none()
            }
            Message::Toast(message) => self.handle_toast(message),
            Message::CursorMoved(position) => {
                self.cursor = position;
                if let Some((id, dx)) = self.drag.displacement(position) {
                    report(self.session.move_swipe(&id, dx));
                }
                Task::none()
            }
            Message::MouseReleased => {
                if let Some((id, dx)) = self.drag.stop(self.cursor) {
                    report(self.session.end_swipe(&id, dx));
                }
                Task::none()
            }
            Message::WindowFocused(focused) => {
                let state = if focused {
                    AppState::Active
                } else {
                    AppState::Inactive
                };
                report(self.session.set_app_state(state));
                Task::none()
            }
            Message::WindowResized(size) => {
                report(self.session.set_screen_width(size.width));
                Task::none()
            }
            Message::ActionFinished(succeeded) => {
                tracing::debug!(succeeded, "toast action finished");
                Task::none()
            }
        };

        self.report_heights();
        self.diagnostics.process_pending();
        task
    }

    fn handle_toast(&mut self, message: ui::Message) -> Task<Message> {
        match message {
            ui::Message::Dismiss(id) => {
                report(self.session.dismiss(&id));
                Task::none()
            }
            ui::Message::Action(id) => match self.session.press_action(&id) {
                Ok(Some(task)) => Task::perform(task, |result| Message::ActionFinished(result.is_ok())),
                Ok(None) => Task::none(),
                Err(err) => {
                    tracing::warn!(%err, "overlay session rejected action press");
                    Task::none()
                }
            },
            ui::Message::Pressed(id) => {
                if self.session.start_swipe(&id).unwrap_or(false) {
                    self.drag.start(id, self.cursor);
                }
                Task::none()
            }
        }
    }

    /// Feeds layout estimates for rendered toasts back to the reconciler.
    fn report_heights(&mut self) {
        let heights: Vec<(ToastId, f32)> = self
            .session
            .reconciler()
            .cached()
            .iter()
            .map(|toast| (toast.id().clone(), ui::estimated_height(toast)))
            .collect();
        for (id, height) in heights {
            report(self.session.report_height(&id, height));
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let presets = Preset::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, preset| {
            row.push(button(text(preset.label()).size(typography::BODY)).on_press(Message::Push(*preset)))
        });

        let allowed = self.session.is_allowed().unwrap_or(false);
        let gate_label = if allowed { "Suspend overlay" } else { "Allow overlay" };
        let controls = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Hide all").size(typography::BODY)).on_press(Message::HideAll))
            .push(button(text(gate_label).size(typography::BODY)).on_press(Message::ToggleAllowed));

        let queued = self.session.queue().map(<[_]>::len).unwrap_or(0);
        let status = text(format!(
            "queued: {queued}  rendered: {}  events logged: {}",
            self.session.reconciler().tracked_count(),
            self.diagnostics.len(),
        ))
        .size(typography::CAPTION);

        let panel = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(presets)
                .push(controls)
                .push(status),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG);

        let views = self.session.views().unwrap_or_default();
        let screen_width = self.session.reconciler().layout().screen_width;
        let dragging = self.drag.toast.as_ref();
        let overlay = Toast::view_overlay(views, screen_width, dragging).map(Message::Toast);

        Stack::new().push(panel).push(overlay).into()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.session.teardown();
        self.diagnostics.process_pending();
        match self.diagnostics.export_json() {
            Ok(json) => tracing::debug!(events = self.diagnostics.len(), %json, "toast diagnostics"),
            Err(err) => tracing::warn!(%err, "could not export toast diagnostics"),
        }
    }
}

fn draft(preset: Preset) -> ToastDraft<DemoAction> {
    match preset {
        Preset::Success => ToastDraft::success("Settings saved").auto_dismiss(),
        Preset::Error => ToastDraft::error("Could not reach the server"),
        Preset::Warning => ToastDraft::warning("Battery below 15%").auto_dismiss(),
        Preset::Info => ToastDraft::info("A new version is available").auto_dismiss(),
        Preset::Undo => ToastDraft::warning("Message archived")
            .auto_dismiss()
            .with_action("Undo", DemoAction::Undo),
        Preset::Retry => ToastDraft::error("Upload failed")
            .with_action("Retry", DemoAction::Retry)
            .with_dismiss_label("Later"),
    }
}
