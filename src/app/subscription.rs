// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window focus and size changes plus the pointer events swipes need.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocused(true)),
        event::Event::Window(window::Event::Unfocused) => Some(Message::WindowFocused(false)),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::MouseReleased)
        }
        _ => None,
    })
}

/// Ticks only while the overlay has work pending.
pub fn create_tick_subscription(busy: bool) -> Subscription<Message> {
    if busy {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
