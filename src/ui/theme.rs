// src/ui/theme.rs
use crate::answer::{Feedback, OptionMark};
use egui::{Color32, Context};

#[derive(Clone, Copy, Debug)]
pub struct OptionStyle {
    pub fill: Color32,
    pub border: Color32,
    pub text: Color32,
    pub strong: bool,
}

/// Tabla única de colores de la pantalla.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: Color32,
    pub card_fill: Color32,
    pub card_border: Color32,
    pub prompt: Color32,
    pub subject: Color32,
    pub muted: Color32,
    pub error: Color32,
    pub chip_fill: Color32,
    pub chip_text: Color32,
    pub chip_selected_fill: Color32,
    pub chip_selected_text: Color32,
    pub feedback_fill: Color32,
    pub idle: OptionStyle,
    pub correct: OptionStyle,
    pub wrong: OptionStyle,
    pub attempted: OptionStyle,
}

pub static LIGHT: Theme = Theme {
    background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    card_fill: Color32::WHITE,
    card_border: Color32::from_rgb(0xe0, 0xe0, 0xe0),
    prompt: Color32::from_rgb(0x33, 0x33, 0x33),
    subject: Color32::from_rgb(0x66, 0x66, 0x66),
    muted: Color32::from_rgb(0x66, 0x66, 0x66),
    error: Color32::from_rgb(0xf4, 0x43, 0x36),
    chip_fill: Color32::from_rgb(0xf0, 0xf0, 0xf0),
    chip_text: Color32::from_rgb(0x66, 0x66, 0x66),
    chip_selected_fill: Color32::from_rgb(0x21, 0x96, 0xf3),
    chip_selected_text: Color32::WHITE,
    feedback_fill: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    idle: OptionStyle {
        fill: Color32::from_rgb(0xf8, 0xf9, 0xfa),
        border: Color32::from_rgb(0xe0, 0xe0, 0xe0),
        text: Color32::from_rgb(0x44, 0x44, 0x44),
        strong: false,
    },
    correct: OptionStyle {
        fill: Color32::from_rgb(0xe8, 0xf5, 0xe9),
        border: Color32::from_rgb(0x4c, 0xaf, 0x50),
        text: Color32::from_rgb(0x2e, 0x7d, 0x32),
        strong: true,
    },
    wrong: OptionStyle {
        fill: Color32::from_rgb(0xff, 0xeb, 0xee),
        border: Color32::from_rgb(0xf4, 0x43, 0x36),
        text: Color32::from_rgb(0xc6, 0x28, 0x28),
        strong: true,
    },
    attempted: OptionStyle {
        fill: Color32::from_rgb(0xff, 0xf3, 0xe0),
        border: Color32::from_rgb(0xff, 0xb7, 0x4d),
        text: Color32::from_rgb(0xf5, 0x7c, 0x00),
        strong: true,
    },
};

pub static DARK: Theme = Theme {
    background: Color32::from_rgb(0x1b, 0x1b, 0x1b),
    card_fill: Color32::from_rgb(0x27, 0x27, 0x27),
    card_border: Color32::from_rgb(0x3c, 0x3c, 0x3c),
    prompt: Color32::from_rgb(0xee, 0xee, 0xee),
    subject: Color32::from_rgb(0xa0, 0xa0, 0xa0),
    muted: Color32::from_rgb(0xa0, 0xa0, 0xa0),
    error: Color32::from_rgb(0xef, 0x53, 0x50),
    chip_fill: Color32::from_rgb(0x33, 0x33, 0x33),
    chip_text: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    chip_selected_fill: Color32::from_rgb(0x19, 0x76, 0xd2),
    chip_selected_text: Color32::WHITE,
    feedback_fill: Color32::from_rgb(0x20, 0x20, 0x20),
    idle: OptionStyle {
        fill: Color32::from_rgb(0x30, 0x30, 0x30),
        border: Color32::from_rgb(0x44, 0x44, 0x44),
        text: Color32::from_rgb(0xdd, 0xdd, 0xdd),
        strong: false,
    },
    correct: OptionStyle {
        fill: Color32::from_rgb(0x1b, 0x3a, 0x1e),
        border: Color32::from_rgb(0x4c, 0xaf, 0x50),
        text: Color32::from_rgb(0x81, 0xc7, 0x84),
        strong: true,
    },
    wrong: OptionStyle {
        fill: Color32::from_rgb(0x3e, 0x1c, 0x1c),
        border: Color32::from_rgb(0xf4, 0x43, 0x36),
        text: Color32::from_rgb(0xef, 0x9a, 0x9a),
        strong: true,
    },
    attempted: OptionStyle {
        fill: Color32::from_rgb(0x3e, 0x2e, 0x12),
        border: Color32::from_rgb(0xff, 0xb7, 0x4d),
        text: Color32::from_rgb(0xff, 0xb7, 0x4d),
        strong: true,
    },
};

impl Theme {
    pub fn option(&self, mark: OptionMark) -> OptionStyle {
        match mark {
            OptionMark::Idle => self.idle,
            OptionMark::Correct => self.correct,
            OptionMark::Wrong => self.wrong,
            OptionMark::Attempted => self.attempted,
        }
    }

    pub fn feedback(&self, feedback: Feedback) -> Color32 {
        match feedback {
            Feedback::Correct => self.correct.text,
            Feedback::TryAgain => self.wrong.text,
        }
    }
}

pub fn current(ctx: &Context) -> &'static Theme {
    if ctx.style().visuals.dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mark_has_a_distinct_style() {
        for theme in [&LIGHT, &DARK] {
            let fills = [
                theme.option(OptionMark::Idle).fill,
                theme.option(OptionMark::Correct).fill,
                theme.option(OptionMark::Wrong).fill,
                theme.option(OptionMark::Attempted).fill,
            ];
            for (i, a) in fills.iter().enumerate() {
                for b in &fills[i + 1..] {
                    assert_ne!(a, b);
                }
            }
            assert!(!theme.option(OptionMark::Idle).strong);
            assert_eq!(theme.feedback(Feedback::Correct), theme.correct.text);
        }
    }
}
