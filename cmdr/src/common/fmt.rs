/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::fmt::Display;

use crossterm::style::{Color, Stylize};

/// Text styles shared by both binaries. `NO_COLOR` is honored by `crossterm`.
#[rustfmt::skip]
pub mod palette {
    use super::Color;

    pub const SILVER_METALLIC: Color = Color::Rgb { r: 213, g: 217, b: 220 };
    pub const SOFT_PINK: Color =       Color::Rgb { r: 255, g: 140, b: 170 };
    pub const LIZARD_GREEN: Color =    Color::Rgb { r: 20,  g: 244, b: 0   };
    pub const SLATE_GRAY: Color =      Color::Rgb { r: 94,  g: 103, b: 111 };
    pub const FROZEN_BLUE: Color =     Color::Rgb { r: 171, g: 204, b: 242 };
    pub const ORANGE: Color =          Color::Rgb { r: 255, g: 140, b: 0   };
    pub const MOONLIGHT_BLUE: Color =  Color::Rgb { r: 31,  g: 36,  b: 46  };
}

#[must_use]
pub fn colon() -> String { dim(":") }

#[must_use]
pub fn comma() -> String { dim(",") }

#[must_use]
pub fn period() -> String { dim(".") }

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> String {
    arg_text.to_string().with(palette::SILVER_METALLIC).to_string()
}

/// Error text style.
pub fn error(arg_text: impl Display) -> String {
    arg_text.to_string().with(palette::SOFT_PINK).to_string()
}

pub fn warning(arg_text: impl Display) -> String {
    arg_text.to_string().with(palette::ORANGE).to_string()
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display) -> String {
    arg_text.to_string().with(palette::LIZARD_GREEN).to_string()
}

pub fn emphasis_delete(arg_text: impl Display) -> String {
    arg_text
        .to_string()
        .with(palette::SOFT_PINK)
        .bold()
        .to_string()
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display) -> String {
    arg_text.to_string().with(palette::SLATE_GRAY).to_string()
}

/// Column headers and section titles.
pub fn header(arg_text: impl Display) -> String {
    arg_text
        .to_string()
        .with(palette::FROZEN_BLUE)
        .on(palette::MOONLIGHT_BLUE)
        .bold()
        .to_string()
}

/// The part of a prompt that tells the user what to type, e.g.: `Senha `.
pub fn prompt_seg_normal(arg_text: impl Display) -> String {
    arg_text.to_string().with(palette::FROZEN_BLUE).to_string()
}

/// The part of a prompt that gives bailout directions, e.g.: `(Ctrl+C sai)`.
pub fn prompt_seg_bail(arg_text: impl Display) -> String {
    arg_text
        .to_string()
        .with(palette::SOFT_PINK)
        .italic()
        .on(palette::MOONLIGHT_BLUE)
        .to_string()
}
