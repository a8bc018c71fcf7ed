use gumdrop::Options;
use vinculum_core::{
    decode_fraction, fmt_fraction, fmt_overline, Error, Fraction, FractionText, Numeral, Value,
};

mod bench;
mod rand;

use crate::rand::Rand;

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print this message")]
    help: bool,

    #[options(help = "log every conversion")]
    verbose: bool,

    #[options(help = "encode a number: 42, -3.25 or 10,-59", meta = "VALUE")]
    encode: Vec<String>,

    #[options(help = "decode a numeral", meta = "NUMERAL")]
    decode: Vec<String>,

    #[options(help = "draw the vinculum as an overline")]
    overline: bool,

    #[options(help = "end overlined rows with CRLF")]
    crlf: bool,

    #[options(help = "print one JSON object per conversion")]
    json: bool,

    #[options(help = "round-trip N random values and report the rate", meta = "N")]
    bench: Option<usize>,

    #[options(help = "seed the random values used by --bench", meta = "SEED")]
    seed: Option<u64>,

    #[options(free, help = "numbers or numerals, told apart by their first character")]
    free: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Job<'a> {
    Encode(&'a str),
    Decode(&'a str),
}

impl<'a> Job<'a> {
    fn guess(input: &'a str) -> Self {
        if Value::looks_numeric(input) {
            Self::Encode(input)
        } else {
            Self::Decode(input)
        }
    }

    const fn input(&self) -> &'a str {
        match self {
            Self::Encode(input) | Self::Decode(input) => input,
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    input: &'a str,
    numeral: Numeral,
    int_part: i32,
    twelfths: i32,
    value: f64,
    fraction: FractionText,
}

impl<'a> Report<'a> {
    fn new(job: Job<'a>) -> Result<Self, Error> {
        let fraction = match job {
            Job::Encode(input) => input.parse::<Value>()?.to_fraction()?,
            Job::Decode(input) => decode_fraction(input)?,
        };
        let Fraction {
            int_part,
            twelfths,
        } = fraction;

        Ok(Self {
            input: job.input(),
            numeral: vinculum_core::encode_fraction(fraction)?,
            int_part,
            twelfths,
            value: fraction.to_f64()?,
            fraction: fmt_fraction(fraction)?,
        })
    }

    fn render(&self, job: Job<'_>, args: &Args) -> Result<String, Error> {
        if args.json {
            return to_json(self);
        }
        Ok(match job {
            Job::Encode(..) if args.overline => fmt_overline(&self.numeral, args.crlf)?.to_string(),
            Job::Encode(..) => self.numeral.to_string(),
            Job::Decode(..) => self.fraction.to_string(),
        })
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|err| {
        log::debug!("cannot serialize: {err}");
        Error::InvalidSyntax
    })
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let args = Args::parse_args_default_or_exit();
    init_logger(args.verbose);

    if let Some(count) = args.bench {
        let rng = args.seed.map(Rand::seed).unwrap_or_default();
        let rendered = bench::run(count, &rng).and_then(|summary| {
            if args.json {
                to_json(&summary)
            } else {
                Ok(summary.to_string())
            }
        });
        match rendered {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1)
            }
        }
        return;
    }

    let jobs = args
        .encode
        .iter()
        .map(|s| Job::Encode(s))
        .chain(args.decode.iter().map(|s| Job::Decode(s)))
        .chain(args.free.iter().map(|s| Job::guess(s)))
        .collect::<Vec<_>>();

    if jobs.is_empty() {
        eprintln!("{}", Args::usage());
        std::process::exit(2)
    }

    let mut failed = 0;
    for job in jobs {
        match Report::new(job).and_then(|report| report.render(job, &args)) {
            Ok(line) => {
                log::debug!("{job:?} -> {line:?}");
                println!("{line}")
            }
            Err(err) => {
                log::debug!("{job:?} failed: {err:?}");
                eprintln!("error: {input}: {err}", input = job.input());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flags: &[&str]) -> Args {
        Args::parse_args_default(flags).unwrap()
    }

    #[test]
    fn guesses_the_direction() {
        assert_eq!(Job::guess("42"), Job::Encode("42"));
        assert_eq!(Job::guess("-1.5"), Job::Encode("-1.5"));
        assert_eq!(Job::guess("XLII"), Job::Decode("XLII"));
        assert_eq!(Job::guess("."), Job::Decode("."));
    }

    #[test]
    fn renders_text() {
        let plain = args(&[]);
        let overline = args(&["--overline", "--crlf"]);

        let job = Job::Encode("-120008");
        let report = Report::new(job).unwrap();
        assert_eq!(report.render(job, &plain).unwrap(), "-_CXX_VIII");
        assert_eq!(report.render(job, &overline).unwrap(), " ___\r\n-CXXVIII");

        let job = Job::Decode("-xix s.....");
        assert_eq!(Report::new(job).unwrap_err(), Error::InvalidSyntax);

        let job = Job::Decode("-XIXS.....");
        let report = Report::new(job).unwrap();
        assert_eq!(report.render(job, &plain).unwrap(), "-19, -11/12");
    }

    #[test]
    fn renders_json() {
        let job = Job::Encode("10,-59");
        let report = Report::new(job).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(job, &args(&["--json"])).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "10,-59",
                "numeral": "V.",
                "int_part": 5,
                "twelfths": 1,
                "value": 5.0 + 1.0 / 12.0,
                "fraction": "5, 1/12",
            })
        );
    }

    #[test]
    fn json_failures_are_errors() {
        let unrepresentable = std::collections::HashMap::from([((1, 2), 3)]);
        assert_eq!(to_json(&unrepresentable), Err(Error::InvalidSyntax));
        assert_eq!(to_json(&[1, 2]), Ok("[1,2]".to_string()));
    }

    #[test]
    fn reports_errors() {
        assert_eq!(Report::new(Job::Encode("4000000")).unwrap_err(), Error::ValueOutOfRange);
        assert_eq!(Report::new(Job::Decode("IC")).unwrap_err(), Error::InvalidSyntax);
        assert_eq!(Report::new(Job::Decode("_I_M")).unwrap_err(), Error::MAfterVinculum);
    }

    #[test]
    fn parses_flags() {
        let args = args(&["-e", "42", "--decode", "XLII", "--bench", "10", "--seed", "3", "IV"]);
        assert_eq!(args.encode, ["42"]);
        assert_eq!(args.decode, ["XLII"]);
        assert_eq!(args.bench, Some(10));
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.free, ["IV"]);
    }
}
