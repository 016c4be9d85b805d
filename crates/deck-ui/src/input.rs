//! Bridges egui input events to the core input adapters

use deck_core::{DeckSettings, KeyboardAdapter, NavKey, SwipeAdapter, TouchPoint};
use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, TouchPhase};
use tracing::trace;

/// Map an egui key to the keyboard adapter's key set
pub fn nav_key_for(key: Key) -> NavKey {
    match key {
        Key::ArrowRight => NavKey::ArrowRight,
        Key::ArrowLeft => NavKey::ArrowLeft,
        Key::Space => NavKey::Space,
        Key::PageDown => NavKey::PageDown,
        Key::PageUp => NavKey::PageUp,
        Key::Home => NavKey::Home,
        Key::End => NavKey::End,
        Key::Escape => NavKey::Escape,
        _ => NavKey::Other,
    }
}

fn touch_point(pos: Pos2) -> TouchPoint {
    TouchPoint::new(pos.x, pos.y)
}

/// Feeds one frame of egui input to the keyboard and swipe adapters
///
/// Keys whose default the adapter suppresses are consumed, so focused buttons
/// and scroll areas never act on them. Touch events are only observed.
#[derive(Debug, Clone, Default)]
pub struct InputBridge {
    /// Treat primary mouse drags as swipes (desktop stand-in for touch)
    mouse_swipe: bool,
}

impl InputBridge {
    pub fn new(settings: &DeckSettings) -> Self {
        Self {
            mouse_swipe: settings.mouse_swipe,
        }
    }

    pub fn process(&self, ctx: &Context, keyboard: &KeyboardAdapter, swipe: &mut SwipeAdapter) {
        let events = ctx.input(|i| i.events.clone());

        for event in &events {
            match event {
                Event::Key { key, pressed: true, modifiers, .. } if modifiers.is_none() => {
                    let nav_key = nav_key_for(*key);
                    if nav_key == NavKey::Other {
                        continue;
                    }

                    let outcome = keyboard.handle(nav_key);
                    if outcome.suppress_default {
                        ctx.input_mut(|i| i.consume_key(Modifiers::NONE, *key));
                    }
                }
                Event::Touch { phase, pos, .. } => match phase {
                    TouchPhase::Start => swipe.touch_start(touch_point(*pos)),
                    TouchPhase::End => {
                        swipe.touch_end(touch_point(*pos));
                    }
                    TouchPhase::Cancel => swipe.touch_cancel(),
                    TouchPhase::Move => {}
                },
                Event::PointerButton { pos, button: PointerButton::Primary, pressed, .. }
                    if self.mouse_swipe =>
                {
                    if *pressed {
                        swipe.touch_start(touch_point(*pos));
                    } else {
                        swipe.touch_end(touch_point(*pos));
                    }
                }
                _ => {}
            }
        }

        trace!(events = events.len(), "input processed");
    }
}
