use super::*;

/// Resolve paths against a route table without touching any history.
#[derive(Clone, Debug, Parser)]
pub(crate) struct Resolve {
    #[clap(flatten)]
    pub(crate) routes: RoutesArg,

    /// The paths to resolve
    #[clap(required = true)]
    pub(crate) paths: Vec<String>,
}

impl Resolve {
    pub(crate) fn resolve(self) -> anyhow::Result<()> {
        let table = load_table(&self.routes.routes)?;
        for path in &self.paths {
            println!("{}", resolve_line(&table, path));
        }
        Ok(())
    }
}

fn resolve_line(table: &RouteTable, path: &str) -> String {
    match table.resolve(path) {
        Some(route) => format!("{path} -> {} ({})", route.view(), route.name()),
        None => format!("{path} -> not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_and_reports_misses() {
        let table = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/randomjokesbytype"
            name = "Random Jokes By Type"
            view = "RandomJokesByTypePage"
            "#,
        )
        .unwrap();

        assert_eq!(
            resolve_line(&table, "/randomjokesbytype"),
            "/randomjokesbytype -> RandomJokesByTypePage (Random Jokes By Type)"
        );
        assert_eq!(resolve_line(&table, "/nope"), "/nope -> not found");
    }
}
