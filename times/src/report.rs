use std::fmt::{Display, Formatter, Result};

use anstyle::{AnsiColor, Color, Style};

use crate::verify::{Acceptance, Violation};

const FIELD: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightYellow)));
const TIME: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightMagenta)));
const POSITIVE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const NEGATIVE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
const ADDITIONS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));

/// Human readable rendering of a rule chain outcome for the terminal.
pub struct Report<'a>(pub &'a std::result::Result<Acceptance, Violation>);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.0 {
            Ok(acceptance) => {
                write!(f, "{}ok{}", POSITIVE.render(), POSITIVE.render_reset())?;
                match acceptance {
                    Acceptance::FutureDate => write!(
                        f,
                        " {}(future date, times not checked){}",
                        ADDITIONS.render(),
                        ADDITIONS.render_reset()
                    )?,
                    Acceptance::Blank => write!(
                        f,
                        " {}(blank entry){}",
                        ADDITIONS.render(),
                        ADDITIONS.render_reset()
                    )?,
                    Acceptance::Complete { work } => write!(
                        f,
                        " {}->{} {}{work}{}",
                        ADDITIONS.render(),
                        ADDITIONS.render_reset(),
                        TIME.render(),
                        TIME.render_reset()
                    )?,
                }
            }
            Err(violation) => write!(
                f,
                "{}error{} {}{}{}: {violation}",
                NEGATIVE.render(),
                NEGATIVE.render_reset(),
                FIELD.render(),
                violation.field(),
                FIELD.render_reset()
            )?,
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use crate::report::{Report, ADDITIONS, FIELD, NEGATIVE, POSITIVE, TIME};
    use crate::verify::{Acceptance, Violation};
    use crate::Minutes;

    #[test]
    fn test_report() {
        let ok = format!("{}ok{}", POSITIVE.render(), POSITIVE.render_reset());

        let complete = Ok(Acceptance::Complete {
            work: Minutes::from(480),
        });
        assert_eq!(
            Report(&complete).to_string(),
            format!(
                "{ok} {}->{} {}8:00{}\n",
                ADDITIONS.render(),
                ADDITIONS.render_reset(),
                TIME.render(),
                TIME.render_reset()
            )
        );
        assert_eq!(
            Report(&Ok(Acceptance::Blank)).to_string(),
            format!(
                "{ok} {}(blank entry){}\n",
                ADDITIONS.render(),
                ADDITIONS.render_reset()
            )
        );
        assert_eq!(
            Report(&Err(Violation::NegativeBreak)).to_string(),
            format!(
                "{}error{} {}break_minutes{}: 休憩時間がマイナスです\n",
                NEGATIVE.render(),
                NEGATIVE.render_reset(),
                FIELD.render(),
                FIELD.render_reset()
            )
        );
    }
}
