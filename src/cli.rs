// src/cli.rs
use std::{env, io::Write, path::PathBuf};

use crate::{
    config::options::{AppOptions, Source},
    data::{FilmRecord, FilmTable},
    error::{Error, Result},
    log, picker,
    progress::Progress,
    scrape,
    session::Session,
    store::{FileStorage, SavedList},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pick,
    Add,
    List,
    Saved,
    Save(String),
    Remove(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub options: AppOptions,
    pub force: bool,
}

/// Step counter for the fetch, written to stderr so stdout stays pipeable.
pub struct CliProgress<W: Write> {
    err: W,
    total: usize,
    done: usize,
}

impl<W: Write> CliProgress<W> {
    pub fn new(err: W) -> Self {
        Self { err, total: 0, done: 0 }
    }
}

impl<W: Write> Progress for CliProgress<W> {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.err, "{msg}");
    }
    fn item_done(&mut self, detail: &str) {
        self.done += 1;
        let _ = writeln!(self.err, "[{}/{}] {detail}", self.done, self.total);
    }
    fn finish(&mut self) {
        if self.done < self.total {
            let _ = writeln!(self.err, "stopped after {}/{} steps", self.done, self.total);
        }
    }
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    log::init(&args.options.store_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)
}

pub fn execute(args: &CliArgs, out: &mut dyn Write) -> Result<()> {
    let opts = &args.options;
    logf!("CLI: {:?} source={}", args.command, opts.source.describe());

    match &args.command {
        Command::Help => {
            write!(out, "{}", include_str!("cli_help.txt"))?;
        }
        Command::Saved => {
            let saved = open_saved(opts)?;
            for t in saved.titles() {
                writeln!(out, "{t}")?;
            }
        }
        Command::Remove(title) => {
            let mut session = open_session(opts, FilmTable::new())?;
            if session.remove(title)? {
                writeln!(out, "Removed: {title}")?;
            } else {
                writeln!(out, "Not saved: {title}")?;
            }
        }
        Command::Save(title) => {
            let films = if args.force { FilmTable::new() } else { fetch(opts)? };
            if !args.force && films.find_title(title).is_none() {
                return Err(Error::Usage(format!(
                    "'{title}' is not on the listing (use --force to save anyway)"
                )));
            }
            let mut session = open_session(opts, films)?;
            if session.add(title)? {
                writeln!(out, "Saved: {title}")?;
            } else {
                writeln!(out, "Already saved: {title}")?;
            }
        }
        Command::List => {
            let films = fetch(opts)?;
            for rec in films.iter() {
                writeln!(out, "{}", tsv_row(&rec))?;
            }
        }
        Command::Pick => {
            // Read-only: the saved list is never opened here.
            let films = fetch(opts)?;
            let mut rng = picker::make_rng(opts.seed);
            match picker::pick_index(films.len(), &mut rng).and_then(|i| films.get(i)) {
                Some(rec) => write_record(out, &rec)?,
                None => writeln!(out, "No films to pick from")?,
            }
        }
        Command::Add => {
            let films = fetch(opts)?;
            let mut session = open_session(opts, films)?;
            let title = match session.randomize() {
                Some(rec) => {
                    write_record(out, &rec)?;
                    rec.title.map(String::from)
                }
                None => {
                    writeln!(out, "No films to pick from")?;
                    None
                }
            };
            match (session.add_current()?, title) {
                (true, Some(t)) => writeln!(out, "Saved: {t}")?,
                (false, Some(t)) => writeln!(out, "Already saved: {t}")?,
                (_, None) => {}
            }
        }
    }
    Ok(())
}

fn fetch(opts: &AppOptions) -> Result<FilmTable> {
    let mut prog = CliProgress::new(std::io::stderr());
    scrape::collect_films(&opts.source, Some(&mut prog))
}

fn open_saved(opts: &AppOptions) -> Result<SavedList> {
    SavedList::load(Box::new(FileStorage::new(&opts.store_dir)))
}

fn open_session(opts: &AppOptions, films: FilmTable) -> Result<Session> {
    Ok(Session::new(films, open_saved(opts)?, picker::make_rng(opts.seed)))
}

fn write_record(out: &mut dyn Write, rec: &FilmRecord<'_>) -> Result<()> {
    writeln!(out, "{}", rec.headline())?;
    let byline = rec.byline();
    if !byline.is_empty() {
        writeln!(out, "{byline}")?;
    }
    if let Some(url) = rec.url {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

fn tsv_row(rec: &FilmRecord<'_>) -> String {
    [rec.title, rec.director, rec.country, rec.year, rec.url, rec.image]
        .into_iter()
        .map(|f| f.unwrap_or("").replace('\t', " "))
        .collect::<Vec<_>>()
        .join("\t")
}

pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<CliArgs> {
    let mut options = AppOptions::default();
    let mut command: Option<Command> = None;
    let mut force = false;

    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => options.source = Source::Remote(value(&mut args, "--url")?),
            "--html" => options.source = Source::File(PathBuf::from(value(&mut args, "--html")?)),
            "--store" => options.store_dir = PathBuf::from(value(&mut args, "--store")?),
            "--seed" => {
                let v = value(&mut args, "--seed")?;
                let seed = v.parse::<u64>()
                    .map_err(|_| Error::Usage(format!("Invalid seed: {v}")))?;
                options.seed = Some(seed);
            }
            "--force" => force = true,
            "-h" | "--help" => command = Some(Command::Help),
            other if other.starts_with('-') => {
                return Err(Error::Usage(format!("Unknown arg: {other}")));
            }
            word => {
                if command.is_some() {
                    return Err(Error::Usage(format!("Unexpected argument: {word}")));
                }
                command = Some(match word {
                    "pick" => Command::Pick,
                    "add" => Command::Add,
                    "list" => Command::List,
                    "saved" => Command::Saved,
                    "save" => Command::Save(value(&mut args, "save")?),
                    "remove" => Command::Remove(value(&mut args, "remove")?),
                    other => return Err(Error::Usage(format!("Unknown command: {other}"))),
                });
            }
        }
    }

    Ok(CliArgs { command: command.unwrap_or(Command::Pick), options, force })
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(v: &[&str]) -> Result<CliArgs> {
        parse_args(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_picks_from_listing() {
        let a = parse(&[]).unwrap();
        assert_eq!(a.command, Command::Pick);
        assert_eq!(a.options, AppOptions::default());
    }

    #[test]
    fn flags_and_command_in_any_order() {
        let a = parse(&["--store", "/tmp/s", "save", "Tokyo Story", "--seed", "9", "--force"]).unwrap();
        assert_eq!(a.command, Command::Save(s!("Tokyo Story")));
        assert_eq!(a.options.store_dir, PathBuf::from("/tmp/s"));
        assert_eq!(a.options.seed, Some(9));
        assert!(a.force);
    }

    #[test]
    fn html_overrides_url() {
        let a = parse(&["--html", "page.html", "list"]).unwrap();
        assert_eq!(a.options.source, Source::File(PathBuf::from("page.html")));
        assert_eq!(a.command, Command::List);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse(&["--bogus"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["remove"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--seed", "x"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["pick", "list"]), Err(Error::Usage(_))));
    }

    #[test]
    fn progress_counts_steps_on_stderr() {
        let mut err = Vec::new();
        {
            let mut p = CliProgress::new(&mut err);
            p.begin(2);
            p.log("Fetching page");
            p.item_done("fetched 10 bytes");
            p.item_done("parsed 3 films");
            p.finish();
        }
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Fetching page\n[1/2] fetched 10 bytes\n[2/2] parsed 3 films\n"
        );
    }

    #[test]
    fn progress_notes_an_early_stop() {
        let mut err = Vec::new();
        {
            let mut p = CliProgress::new(&mut err);
            p.begin(2);
            p.finish();
        }
        assert_eq!(String::from_utf8(err).unwrap(), "stopped after 0/2 steps\n");
    }

    #[test]
    fn tsv_blanks_missing_fields() {
        let rec = FilmRecord {
            index: 0,
            title: Some("M"),
            director: None,
            country: Some("Germany,"),
            year: Some("1931"),
            url: None,
            image: None,
        };
        assert_eq!(tsv_row(&rec), "M\t\tGermany,\t1931\t\t");
    }
}
