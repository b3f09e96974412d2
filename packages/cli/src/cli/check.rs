//! Validate a route table.

use super::*;

/// Check a route table for duplicate paths or names and list its routes.
#[derive(Clone, Debug, Parser)]
pub(crate) struct Check {
    #[clap(flatten)]
    pub(crate) routes: RoutesArg,
}

impl Check {
    pub(crate) fn check(self) -> anyhow::Result<()> {
        let table = load_table(&self.routes.routes)?;
        for line in listing(&table) {
            println!("{line}");
        }
        tracing::info!(routes = table.len(), "route table is valid");
        Ok(())
    }
}

fn listing(table: &RouteTable) -> Vec<String> {
    table
        .iter()
        .map(|route| {
            let mut line = format!("{} -> {} ({})", route.path(), route.view(), route.name());
            if route.is_parameterized() {
                let keys: Vec<_> = route.parameter_keys().collect();
                line.push_str(&format!(" [params: {}]", keys.join(", ")));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_routes_in_order() {
        let table = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/"
            name = "Home"
            view = "HomePage"

            [[routes]]
            path = "/randomjokes"
            name = "Random Jokes"
            view = "RandomJokesPage"
            "#,
        )
        .unwrap();

        assert_eq!(
            listing(&table),
            vec![
                "/ -> HomePage (Home)",
                "/randomjokes -> RandomJokesPage (Random Jokes)"
            ]
        );
    }

    #[test]
    fn lists_parameter_keys() {
        let table = RouteTable::from_toml_str(
            r#"
            [[routes]]
            path = "/jokes/:kind/:id"
            name = "Joke"
            view = "JokePage"
            "#,
        )
        .unwrap();

        assert_eq!(
            listing(&table),
            vec!["/jokes/:kind/:id -> JokePage (Joke) [params: kind, id]"]
        );
    }

    #[test]
    fn load_failure_names_the_file() {
        let err = load_table(Path::new("/no/such/routes.toml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/routes.toml"));
    }
}
