//! Centralized geometry for the shell regions and resize handles
//!
//! This module provides a single source of truth for layout calculations that
//! is shared between renderers and the resize logic (which needs the live
//! position of the right handle).
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of any rendering infrastructure.

use serde::Serialize;

use crate::config::ChromeConfig;
use crate::model::{ShellMode, SlotItem};

/// Width and height of the drawer reveal button
pub const DRAWER_BUTTON_SIZE: (f32, f32) = (20.0, 30.0);
/// Gap between the drawer button and the right window edge
pub const DRAWER_BUTTON_RIGHT_INSET: f32 = 25.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Resolved rectangles for one frame of the shell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShellGeometry {
    pub title_bar: Rect,
    pub main: Rect,
    pub player_bar: Rect,
    pub content: Rect,
    pub left_sidebar: Option<Rect>,
    pub left_handle: Option<Rect>,
    pub side_panel: Option<Rect>,
    pub right_handle: Option<Rect>,
    pub drawer: Option<Rect>,
    pub drawer_button: Option<Rect>,
}

impl ShellGeometry {
    /// Lay out the three-row shell and whatever occupies the right slot
    ///
    /// `mounted` is the slot occupant in any phase: a panel that is still
    /// animating out keeps its rectangle (and its handle) until it unmounts.
    pub fn compute(
        window: (f32, f32),
        left_width: f32,
        right_width: f32,
        mode: ShellMode,
        mounted: Option<SlotItem>,
        chrome: &ChromeConfig,
    ) -> Self {
        let (width, height) = (window.0.max(0.0), window.1.max(0.0));

        let title_bar = Rect::new(0.0, 0.0, width, chrome.title_bar_height.min(height));
        let player_height = chrome
            .player_bar_height
            .min((height - title_bar.height).max(0.0));
        let player_bar = Rect::new(0.0, height - player_height, width, player_height);
        let main = Rect::new(
            0.0,
            title_bar.bottom(),
            width,
            (player_bar.y - title_bar.bottom()).max(0.0),
        );

        let mut geometry = ShellGeometry {
            title_bar,
            main,
            player_bar,
            content: main,
            ..Self::default()
        };

        if mode == ShellMode::Shell {
            return geometry;
        }

        let left = left_width.min(width);
        let left_sidebar = Rect::new(0.0, main.y, left, main.height);
        geometry.left_sidebar = Some(left_sidebar);
        geometry.left_handle = Some(Rect::new(
            left_sidebar.right() - chrome.handle_width,
            main.y,
            chrome.handle_width,
            main.height,
        ));

        let mut content_right = width;
        match mounted {
            Some(SlotItem::SidePanel) => {
                let panel_width = right_width.min((width - left).max(0.0));
                let panel = Rect::new(width - panel_width, main.y, panel_width, main.height);
                geometry.right_handle = Some(Rect::new(
                    panel.x,
                    main.y,
                    chrome.handle_width,
                    main.height,
                ));
                geometry.side_panel = Some(panel);
                content_right = panel.x;
            }
            Some(SlotItem::Drawer) => {
                let drawer_width = (width * chrome.drawer_width_fraction)
                    .max(chrome.drawer_min_width)
                    .min(width);
                geometry.drawer = Some(Rect::new(
                    width - drawer_width,
                    main.y,
                    drawer_width,
                    (main.height - chrome.drawer_vertical_inset).max(0.0),
                ));
            }
            Some(SlotItem::DrawerButton) => {
                let (button_width, button_height) = DRAWER_BUTTON_SIZE;
                geometry.drawer_button = Some(Rect::new(
                    width - DRAWER_BUTTON_RIGHT_INSET - button_width,
                    main.y + main.height / 2.0,
                    button_width,
                    button_height,
                ));
            }
            None => {}
        }

        geometry.content = Rect::new(left, main.y, (content_right - left).max(0.0), main.height);
        geometry
    }
}
