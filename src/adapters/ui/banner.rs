//! Start-up banner for the interactive menu.
//! Figlet title shaded left to right, then a tagline naming the personas.

use crate::domain::Persona;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "RESUME-AI";

/// Neon Purple (#bc13fe).
pub(crate) const NEON_PURPLE: (u8, u8, u8) = (0xbc, 0x13, 0xfe);
/// Cyber Green (#0ff0fc).
pub(crate) const CYBER_GREEN: (u8, u8, u8) = (0x0f, 0xf0, 0xfc);

/// Color of column `col` on a purple-to-green ramp `width` columns wide.
fn ramp(col: usize, width: usize) -> Color {
    let t = if width < 2 {
        1.0
    } else {
        col.min(width - 1) as f32 / (width - 1) as f32
    };
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb {
        r: mix(NEON_PURPLE.0, CYBER_GREEN.0),
        g: mix(NEON_PURPLE.1, CYBER_GREEN.1),
        b: mix(NEON_PURPLE.2, CYBER_GREEN.2),
    }
}

/// Title in figlet's bundled standard font; the bare title if rendering fails.
fn title_art() -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .map(|art| {
            art.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|lines| !lines.is_empty())
        .unwrap_or_else(|| vec![TITLE.to_string()])
}

fn tagline() -> String {
    let personas: Vec<&str> = Persona::ALL.iter().map(|p| p.as_str()).collect();
    format!(
        "v{}  review, score and rewrite resumes as {}",
        env!("CARGO_PKG_VERSION"),
        personas.join(" or ")
    )
}

/// Prints the banner. Terminal write errors are ignored.
pub fn print_welcome() {
    let art = title_art();
    let width = art.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let mut out = stdout();

    for line in &art {
        for (col, ch) in line.chars().enumerate() {
            let _ = queue!(out, SetForegroundColor(ramp(col, width)), Print(ch));
        }
        let _ = queue!(out, ResetColor, Print("\r\n"));
    }
    let _ = queue!(
        out,
        SetForegroundColor(ramp(width, width)),
        Print(tagline()),
        ResetColor,
        Print("\r\n")
    );
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: (u8, u8, u8)) -> Color {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }

    #[test]
    fn test_ramp_runs_purple_to_green() {
        assert_eq!(ramp(0, 40), rgb(NEON_PURPLE));
        assert_eq!(ramp(39, 40), rgb(CYBER_GREEN));
        assert_eq!(ramp(500, 40), rgb(CYBER_GREEN));
        assert_eq!(ramp(0, 1), rgb(CYBER_GREEN));
    }

    #[test]
    fn test_title_art_is_multiline() {
        let art = title_art();
        assert!(art.len() > 1);
        assert!(art.iter().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn test_tagline_names_every_persona() {
        let line = tagline();
        for persona in Persona::ALL {
            assert!(line.contains(persona.as_str()));
        }
    }
}
