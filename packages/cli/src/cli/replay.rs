use super::*;

use std::{rc::Rc, str::FromStr};
use waypoint_router::prelude::{MemoryHistory, Navigator};

/// Replay a sequence of navigation steps against an in-memory history.
///
/// Steps are `push:/path`, `replace:/path`, `name:Route Name`, `back` and `forward`. The location
/// after every step is printed on its own line.
#[derive(Clone, Debug, Parser)]
pub(crate) struct Replay {
    #[clap(flatten)]
    pub(crate) routes: RoutesArg,

    /// The path the history starts at
    #[clap(long)]
    pub(crate) start: Option<String>,

    /// The steps to replay, in order
    pub(crate) steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Push(String),
    Replace(String),
    Name(String),
    Back,
    Forward,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => return Ok(Step::Back),
            "forward" => return Ok(Step::Forward),
            _ => {}
        }

        match s.split_once(':') {
            Some(("push", path)) => Ok(Step::Push(path.to_string())),
            Some(("replace", path)) => Ok(Step::Replace(path.to_string())),
            Some(("name", name)) => Ok(Step::Name(name.to_string())),
            _ => Err(format!(
                "unknown step `{s}`, expected push:<path>, replace:<path>, name:<route>, back or forward"
            )),
        }
    }
}

impl Replay {
    pub(crate) fn replay(self) -> anyhow::Result<()> {
        let table = load_table(&self.routes.routes)?;
        for line in run_steps(table, self.start.as_deref(), &self.steps)? {
            println!("{line}");
        }
        Ok(())
    }
}

fn run_steps(table: RouteTable, start: Option<&str>, steps: &[Step]) -> anyhow::Result<Vec<String>> {
    let history = Rc::new(match start {
        Some(path) => MemoryHistory::with_initial_path(path),
        None => MemoryHistory::default(),
    });
    let mut navigator = Navigator::new(table, history.clone());

    let mut lines = vec![describe(navigator.start()?)];
    for step in steps {
        tracing::debug!(?step, "replaying");
        match step {
            Step::Push(path) => {
                navigator
                    .push(path)
                    .with_context(|| format!("step `push:{path}` failed"))?;
            }
            Step::Replace(path) => {
                navigator
                    .replace(path)
                    .with_context(|| format!("step `replace:{path}` failed"))?;
            }
            Step::Name(name) => {
                navigator
                    .navigate_by_name::<&str, &str>(name, &[])
                    .with_context(|| format!("step `name:{name}` failed"))?;
            }
            Step::Back => navigator.go_back(),
            Step::Forward => navigator.go_forward(),
        }

        if let Some(location) = navigator.location() {
            lines.push(describe(location));
        }
    }

    tracing::info!(entries = history.len(), "replay finished");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jokes() -> RouteTable {
        RouteTable::builder()
            .route("/", "Home", "HomePage".into())
            .route("/randomjokes", "Random Jokes", "RandomJokesPage".into())
            .route(
                "/randomjokesbytype",
                "Random Jokes By Type",
                "RandomJokesByTypePage".into(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn parses_steps() {
        assert_eq!("back".parse(), Ok(Step::Back));
        assert_eq!("forward".parse(), Ok(Step::Forward));
        assert_eq!("push:/a?b=c".parse(), Ok(Step::Push(String::from("/a?b=c"))));
        assert_eq!(
            "name:Random Jokes".parse(),
            Ok(Step::Name(String::from("Random Jokes")))
        );
        assert!("jump:/a".parse::<Step>().is_err());
    }

    #[test]
    fn replays_a_session() {
        let steps = ["push:/randomjokes", "name:Random Jokes By Type", "back", "push:/missing"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect::<Vec<Step>>();

        let lines = run_steps(jokes(), None, &steps).unwrap();

        assert_eq!(
            lines,
            vec![
                "/ -> HomePage (Home)",
                "/randomjokes -> RandomJokesPage (Random Jokes)",
                "/randomjokesbytype -> RandomJokesByTypePage (Random Jokes By Type)",
                "/randomjokes -> RandomJokesPage (Random Jokes)",
                "/missing -> not found",
            ]
        );
    }

    #[test]
    fn starts_at_the_given_path() {
        let lines = run_steps(jokes(), Some("/randomjokes"), &[Step::Replace(String::from("/"))])
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "/randomjokes -> RandomJokesPage (Random Jokes)",
                "/ -> HomePage (Home)",
            ]
        );
    }

    #[test]
    fn refused_path_fails() {
        let err = run_steps(jokes(), None, &[Step::Push(String::from("//elsewhere"))]).unwrap_err();
        assert!(err.to_string().contains("push://elsewhere"));
    }

    #[test]
    fn unknown_name_fails() {
        let err = run_steps(jokes(), None, &[Step::Name(String::from("Nope"))]).unwrap_err();
        assert!(err.to_string().contains("name:Nope"));
    }
}
