//! Simple command that prints one or '-n count' identifier strings, optionally followed by their
//! fields with '-t'

use std::{env, io, io::Write, process::ExitCode};

#[derive(Debug, Default, PartialEq)]
struct Options {
    count: Option<usize>,
    show_fields: bool,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {message}");
                eprintln!(
                    "Usage: {} [-n count] [-t]",
                    program.as_deref().unwrap_or("xid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let e = xid::xid();
        if opts.show_fields {
            let [m0, m1, m2] = e.machine_id();
            writeln!(
                buf,
                "{e} time={} machine={m0:02x}{m1:02x}{m2:02x} pid={} counter={}",
                e.timestamp(),
                e.pid(),
                e.counter()
            )?;
        } else {
            writeln!(buf, "{e}")?;
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-t" => opts.show_fields = true,
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{n_arg}'"));
                };
                opts.count.replace(c);
            }
            _ => return Err(format!("unrecognized argument '{arg}'")),
        }
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Options};

    fn parse(args: &[&str]) -> Result<Options, String> {
        parse_args(args.iter().map(|&s| s.to_owned()))
    }

    /// Parses count and field flag in any order
    #[test]
    fn parses_count_and_field_flag_in_any_order() {
        let expected = Options {
            count: Some(3),
            show_fields: true,
        };
        assert_eq!(parse(&["-n", "3", "-t"]), Ok(expected));
        assert_eq!(
            parse(&["-t", "-n", "3"]),
            Ok(Options {
                count: Some(3),
                show_fields: true,
            })
        );
        assert_eq!(parse(&[]), Ok(Options::default()));
    }

    /// Rejects malformed arguments
    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse(&["-x"]).is_err());
        assert!(parse(&["-n"]).is_err());
        assert!(parse(&["-n", "abc"]).is_err());
        assert!(parse(&["-n", "1", "-n", "2"]).is_err());
    }
}
