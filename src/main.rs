use std::process::ExitCode;

use id3tree::prelude::*;
use id3tree::logging;


const DEFAULT_FILE: &str = "titanic-homework.csv";
const DEFAULT_TARGET: &str = "Survived";
const DEFAULT_NUMERIC: &str = "Age";
const DEFAULT_DROP: [&str; 2] = ["PassengerId", "Name"];
const USAGE: &str = "\
[USAGE] id3tree [CSV] [--target NAME] [--numeric NAME | --no-numeric] \
[--drop COLUMN]... [--age-buckets B1,B2,...] [--dot FILE]";


/// Command line options.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    file:    String,
    target:  String,
    numeric: Option<String>,
    drop:    Vec<String>,
    buckets: Option<Vec<f64>>,
    dot:     Option<String>,
}


impl Default for Options {
    fn default() -> Self {
        Self {
            file:    DEFAULT_FILE.to_string(),
            target:  DEFAULT_TARGET.to_string(),
            numeric: Some(DEFAULT_NUMERIC.to_string()),
            drop:    DEFAULT_DROP.iter().map(|s| s.to_string()).collect(),
            buckets: None,
            dot:     None,
        }
    }
}


/// Parses the arguments following the program name.
/// Any `--drop` replaces the default dropped columns.
/// `--age-buckets` applies to the numeric attribute,
/// so it cannot be combined with `--no-numeric`.
fn parse_args<I>(args: I) -> Result<Options, String>
    where I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut drop = Vec::new();
    let mut file = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| format!("`{flag}` expects a value"))
        };
        match arg.as_str() {
            "--target"      => { options.target = value(&arg)?; },
            "--numeric"     => { options.numeric = Some(value(&arg)?); },
            "--no-numeric"  => { options.numeric = None; },
            "--drop"        => { drop.push(value(&arg)?); },
            "--dot"         => { options.dot = Some(value(&arg)?); },
            "--age-buckets" => {
                let bounds = value(&arg)?
                    .split(',')
                    .map(|b| {
                        b.trim().parse::<f64>()
                            .map_err(|_| format!("invalid bucket bound `{b}`"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                options.buckets = Some(bounds);
            },
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option `{flag}`"));
            },
            _ => {
                if file.replace(arg).is_some() {
                    return Err("more than one input file given".to_string());
                }
            },
        }
    }

    if let Some(file) = file {
        options.file = file;
    }
    if !drop.is_empty() {
        options.drop = drop;
    }
    if options.numeric.is_none() && options.buckets.is_some() {
        return Err("`--age-buckets` needs a numeric attribute; drop `--no-numeric`".to_string());
    }
    Ok(options)
}


fn run(options: &Options) -> id3tree::Result<()> {
    let mut reader = DatasetReader::default()
        .file(&options.file)
        .has_header(true);
    for column in options.drop.iter() {
        reader = reader.drop_column(column);
    }
    let mut dataset = reader.read()?;

    let mut builder = Id3Builder::new(&options.target);
    builder = match (&options.numeric, &options.buckets) {
        (Some(numeric), Some(bounds)) => {
            // Fixed categories replace the median split.
            dataset = dataset.categorize(numeric, bounds)?;
            builder.without_numeric_attribute()
        },
        (Some(numeric), None) => builder.numeric_attribute(numeric),
        (None, _) => builder.without_numeric_attribute(),
    };
    let id3 = builder.build();
    tracing::debug!("{id3}");

    let tree = id3.build(dataset)?;
    tree.print();

    if let Some(dot) = options.dot.as_ref() {
        tree.to_dot_file(dot)?;
        tracing::info!("wrote {dot}");
    }
    Ok(())
}


fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::FAILURE;
        },
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse_args(Vec::new()).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.drop, vec!["PassengerId", "Name"]);
    }

    #[test]
    fn explicit_options() {
        let options = parse_args(args(&[
            "data.csv",
            "--target", "Class",
            "--drop", "Id",
            "--age-buckets", "20, 40",
            "--dot", "tree.dot",
        ])).unwrap();

        assert_eq!(options.file, "data.csv");
        assert_eq!(options.target, "Class");
        assert_eq!(options.drop, vec!["Id"]);
        assert_eq!(options.buckets, Some(vec![20f64, 40f64]));
        assert_eq!(options.dot.as_deref(), Some("tree.dot"));
        assert_eq!(options.numeric.as_deref(), Some("Age"));
    }

    #[test]
    fn no_numeric_flag() {
        let options = parse_args(args(&["--no-numeric"])).unwrap();
        assert!(options.numeric.is_none());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args(&["--target"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["a.csv", "b.csv"])).is_err());
        assert!(parse_args(args(&["--age-buckets", "20,x"])).is_err());
    }

    #[test]
    fn buckets_need_a_numeric_attribute() {
        assert!(parse_args(args(&["--no-numeric", "--age-buckets", "20,40"])).is_err());
        assert!(parse_args(args(&["--age-buckets", "20,40", "--no-numeric"])).is_err());

        let options = parse_args(args(&[
            "--no-numeric", "--numeric", "Fare", "--age-buckets", "20,40",
        ])).unwrap();
        assert_eq!(options.numeric.as_deref(), Some("Fare"));
        assert_eq!(options.buckets, Some(vec![20f64, 40f64]));
    }
}
