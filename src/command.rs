//! Decoded remote control commands

use crate::color::Rgb;

const BUTTON_NAME_BTN1: &str = "1";
const BUTTON_NAME_BTN2: &str = "2";
const BUTTON_NAME_BTN3: &str = "3";
const BUTTON_NAME_BTN4: &str = "4";
const BUTTON_NAME_UP: &str = "up";
const BUTTON_NAME_DOWN: &str = "down";
const BUTTON_NAME_LEFT: &str = "left";
const BUTTON_NAME_RIGHT: &str = "right";

const BUTTON_CODE_BTN1: u8 = b'1';
const BUTTON_CODE_BTN2: u8 = b'2';
const BUTTON_CODE_BTN3: u8 = b'3';
const BUTTON_CODE_BTN4: u8 = b'4';
const BUTTON_CODE_UP: u8 = b'5';
const BUTTON_CODE_DOWN: u8 = b'6';
const BUTTON_CODE_LEFT: u8 = b'7';
const BUTTON_CODE_RIGHT: u8 = b'8';

/// Control pad buttons of the remote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonId {
    /// Power toggle
    Btn1 = BUTTON_CODE_BTN1,
    /// Next playlist entry
    Btn2 = BUTTON_CODE_BTN2,
    /// Flash now
    Btn3 = BUTTON_CODE_BTN3,
    /// Toggle reactive flash
    Btn4 = BUTTON_CODE_BTN4,
    /// Brighter
    Up = BUTTON_CODE_UP,
    /// Dimmer
    Down = BUTTON_CODE_DOWN,
    /// Slower
    Left = BUTTON_CODE_LEFT,
    /// Faster
    Right = BUTTON_CODE_RIGHT,
}

impl ButtonId {
    /// Parse the control pad code (ASCII `'1'..='8'`)
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            BUTTON_CODE_BTN1 => Self::Btn1,
            BUTTON_CODE_BTN2 => Self::Btn2,
            BUTTON_CODE_BTN3 => Self::Btn3,
            BUTTON_CODE_BTN4 => Self::Btn4,
            BUTTON_CODE_UP => Self::Up,
            BUTTON_CODE_DOWN => Self::Down,
            BUTTON_CODE_LEFT => Self::Left,
            BUTTON_CODE_RIGHT => Self::Right,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Btn1 => BUTTON_NAME_BTN1,
            Self::Btn2 => BUTTON_NAME_BTN2,
            Self::Btn3 => BUTTON_NAME_BTN3,
            Self::Btn4 => BUTTON_NAME_BTN4,
            Self::Up => BUTTON_NAME_UP,
            Self::Down => BUTTON_NAME_DOWN,
            Self::Left => BUTTON_NAME_LEFT,
            Self::Right => BUTTON_NAME_RIGHT,
        }
    }
}

/// Command record delivered by the wireless link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteCommand {
    /// Show one color on every pixel
    ColorSet(Rgb),
    /// Control pad button edge
    Button { id: ButtonId, pressed: bool },
}

impl RemoteCommand {
    /// Shorthand for a pressed button
    pub const fn press(id: ButtonId) -> Self {
        Self::Button { id, pressed: true }
    }
}
