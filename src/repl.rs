use vinculum_core::{decode_double, decode_fraction, fmt_fraction, fmt_overline, Error, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub overline: bool,
    pub crlf: bool,
    /// Decoded values as `1, 1/6` rather than `1.1666…`.
    pub fraction: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overline: false,
            crlf: false,
            fraction: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Setting {
    Overline,
    Crlf,
    Fraction,
}

impl Setting {
    fn flag(self, settings: &mut Settings) -> &mut bool {
        match self {
            Self::Overline => &mut settings.overline,
            Self::Crlf => &mut settings.crlf,
            Self::Fraction => &mut settings.fraction,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command<'a> {
    Nothing,
    Help,
    Quit,
    Toggle(Setting),
    Encode(Value),
    Decode(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let line = line.trim();
        let command = match line {
            "" => Self::Nothing,
            ":help" | ":h" | "?" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":overline" => Self::Toggle(Setting::Overline),
            ":crlf" => Self::Toggle(Setting::Crlf),
            ":fraction" => Self::Toggle(Setting::Fraction),
            _ if line.starts_with(':') => return Err(Error::InvalidSyntax),
            _ if Value::looks_numeric(line) => Self::Encode(line.parse()?),
            _ => Self::Decode(line),
        };
        Ok(command)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
    Nothing,
}

#[derive(Debug, Default)]
pub struct Repl {
    pub settings: Settings,
}

impl Repl {
    pub const HELP: &'static str = "\
42, -3.25, 10,-59   encode an integer, a decimal or `int,twelfths`
XLII, -_IV_S..      decode a numeral
:overline           toggle drawing the vinculum as an overline
:crlf               toggle CRLF line endings for overlines
:fraction           toggle decoded output between `1, 1/6` and decimals
:quit               leave";

    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn eval(&mut self, line: &str) -> Outcome {
        match self.run(line) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("{line:?}: {err:?}");
                Outcome::Print(format!("error: {err}"))
            }
        }
    }

    fn run(&mut self, line: &str) -> Result<Outcome, Error> {
        let text = match Command::parse(line)? {
            Command::Nothing => return Ok(Outcome::Nothing),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => Self::HELP.to_string(),

            Command::Toggle(setting) => {
                let flag = setting.flag(&mut self.settings);
                *flag = !*flag;
                log::info!("{setting:?} is now {}", if *flag { "on" } else { "off" });
                format!("{setting:?}: {}", if *flag { "on" } else { "off" }).to_lowercase()
            }

            Command::Encode(value) => {
                let numeral = value.encode()?;
                if self.settings.overline {
                    fmt_overline(&numeral, self.settings.crlf)?.to_string()
                } else {
                    numeral.to_string()
                }
            }

            Command::Decode(numeral) if self.settings.fraction => {
                fmt_fraction(decode_fraction(numeral)?)?.to_string()
            }
            Command::Decode(numeral) => decode_double(numeral)?.to_string(),
        };
        Ok(Outcome::Print(text))
    }
}
