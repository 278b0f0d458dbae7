use std::io::{self, IsTerminal, Read, Write};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use nu_ansi_term::Color::{Red, Yellow};
use textkit::{
    clipboard::{copy_with_notice, Clipboard, SystemClipboard},
    config::MainConfig,
    debug,
    error::*,
    params::Params,
    sitemap::SitemapGenerator,
    string_utils::pad_to_width,
    transforms::{Category, Outcome, TransformManager, TransformRegistry},
};

pub struct App {
    pub matches: ArgMatches,
}

/// How the result of a transform chain is delivered
pub struct Delivery<'a> {
    pub newline: bool,
    pub clipboard: Option<&'a dyn Clipboard>,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        nu_ansi_term::enable_ansi_support().ok();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Retrieves the values of a multiple argument
    fn values(&self, id: &str) -> Vec<String> {
        self.matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Reads the text to transform from the command line arguments or, when
    /// missing, from the standard input.
    fn read_input(&self) -> Result<String> {
        let text = self.values("TEXT");
        if !text.is_empty() {
            return Ok(text.join(" "));
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(Error::ArgsProcessingError(
                "No input text supplied (pass it as argument or through the standard input)"
                    .to_string(),
            ));
        }
        let mut input = String::new();
        stdin.lock().read_to_string(&mut input)?;
        Ok(strip_trailing_newline(input))
    }

    /// Start the application, bootstraps the configuration and dispatches the request.
    ///
    /// # Returns
    /// `Ok(false)` when the transform chain failed on the given input.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new()?;
        let config = bootstrap.get_config();
        let registry = TransformManager::get().registry();

        match self.matches.subcommand() {
            Some(("list", args)) => {
                let category = args.get_one::<String>("category").map(|s| s.as_str());
                list_transforms(registry, category, &mut io::stdout().lock())?;
                Ok(true)
            }
            Some(("sitemap", _)) => {
                let path = SitemapGenerator::new(&config.sitemap, registry)?.write()?;
                println!("{} {}", Yellow.paint("Sitemap written to"), path.display());
                Ok(true)
            }
            _ => {
                let names = self.values("transform");
                if names.is_empty() {
                    return Err(Error::ArgsProcessingError(
                        "No transform supplied (use -t <NAME>, see `textkit list`)".to_string(),
                    ));
                }
                let params = build_params(&self.values("set"), &names, config)?;
                let text = self.read_input()?;

                let system_clipboard;
                let copy = self.matches.get_flag("copy") || config.defaults.copy;
                let delivery = Delivery {
                    newline: config.defaults.newline && !self.matches.get_flag("no-newline"),
                    clipboard: if copy {
                        system_clipboard = SystemClipboard::new();
                        Some(&system_clipboard as &dyn Clipboard)
                    } else {
                        None
                    },
                };

                run_chain(
                    registry,
                    &names,
                    &text,
                    &params,
                    &delivery,
                    &mut io::stdout().lock(),
                    &mut io::stderr().lock(),
                )
            }
        }
    }
}

fn strip_trailing_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

/// Builds the parameters of the chain. Command line assignments take precedence
/// over the defaults configured for each transform, and earlier transforms of
/// the chain take precedence over later ones.
fn build_params(assignments: &[String], names: &[String], config: &MainConfig) -> Result<Params> {
    let mut params = Params::new();
    for assignment in assignments {
        params.insert_assignment(assignment)?;
    }
    for name in names {
        params.append(
            config
                .params_for(name)
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
    }
    Ok(params)
}

/// Runs the transform chain and delivers its outcome.
///
/// Unknown transforms are fatal errors, while failures of the transforms
/// themselves are reported on `err` and turn into `Ok(false)`.
fn run_chain(
    registry: &TransformRegistry,
    names: &[String],
    text: &str,
    params: &Params,
    delivery: &Delivery,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool> {
    if let Some(unknown) = names.iter().find(|name| registry.get(name).is_none()) {
        return Err(Error::UnknownTransform(unknown.to_string()));
    }
    debug!("Running chain [{}] with {:?}", names.join(", "), params);

    match Outcome::from(registry.process(names, text, params)) {
        Outcome::Success(output) => {
            write!(out, "{}", output)?;
            if delivery.newline {
                writeln!(out)?;
            }
            out.flush()?;
            if let Some(clipboard) = delivery.clipboard {
                copy_with_notice(clipboard, &output, err);
            }
            Ok(true)
        }
        Outcome::Failure(message) => {
            writeln!(err, "{}: {}", Red.paint("[input error]"), message)?;
            Ok(false)
        }
    }
}

/// Prints the transforms grouped by category
fn list_transforms(
    registry: &TransformRegistry,
    category: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let categories = match category {
        Some(name) => vec![Category::from_name(name).ok_or_else(|| {
            Error::ArgsProcessingError(format!(
                "Unknown category \"{}\" (available : {})",
                name,
                Category::ALL
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?],
        None => Category::ALL.to_vec(),
    };

    let width = registry.entries().map(|e| e.name.len()).max().unwrap_or(0) + 2;
    let mut first = true;
    for category in categories {
        let entries: Vec<_> = registry.entries().filter(|e| e.category == category).collect();
        if entries.is_empty() {
            continue;
        }
        if !first {
            writeln!(out)?;
        }
        first = false;
        writeln!(out, "{}", Yellow.bold().paint(category.to_string()))?;
        for entry in entries {
            writeln!(out, "  {}{}", pad_to_width(entry.name, width), entry.summary)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use textkit::clipboard::MemoryClipboard;

    fn run(names: &[&str], text: &str, params: &Params, delivery: &Delivery) -> (Result<bool>, String, String) {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_chain(
            TransformManager::get().registry(),
            &names,
            text,
            params,
            delivery,
            &mut out,
            &mut err,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("text\n".to_string()), "text");
        assert_eq!(strip_trailing_newline("text\r\n".to_string()), "text");
        assert_eq!(strip_trailing_newline("text\n\n".to_string()), "text\n");
        assert_eq!(strip_trailing_newline("text".to_string()), "text");
    }

    #[test]
    fn test_build_params_precedence() {
        let config = MainConfig::from_toml(
            "[params.caesar]\nshift = \"5\"\n\n[params.json-format]\nindent = \"4\"\n",
            "textkit.toml",
        )
        .unwrap();
        let names = vec!["caesar".to_string(), "json-format".to_string()];

        let params = build_params(&[], &names, &config).unwrap();
        assert_eq!(params.get("shift"), Some("5"));
        assert_eq!(params.get("indent"), Some("4"));

        let params = build_params(&["shift=1".to_string()], &names, &config).unwrap();
        assert_eq!(params.get("shift"), Some("1"));

        assert!(matches!(
            build_params(&["shift".to_string()], &names, &config),
            Err(Error::ArgsProcessingError(_))
        ));
    }

    #[test]
    fn test_run_chain_prints_output() {
        let delivery = Delivery {
            newline: true,
            clipboard: None,
        };
        let (result, out, err) = run(&["uppercase", "reverse-text"], "abc", &Params::new(), &delivery);
        assert!(result.unwrap());
        assert_eq!(out, "CBA\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_chain_copies_result() {
        let clipboard = MemoryClipboard::new();
        let delivery = Delivery {
            newline: false,
            clipboard: Some(&clipboard),
        };
        let (result, out, err) = run(&["rot13"], "hello", &Params::new(), &delivery);
        assert!(result.unwrap());
        assert_eq!(out, "uryyb");
        assert_eq!(clipboard.contents().as_deref(), Some("uryyb"));
        assert!(err.contains("Copied to clipboard"));
    }

    #[test]
    fn test_run_chain_reports_failures() {
        let clipboard = MemoryClipboard::new();
        let delivery = Delivery {
            newline: true,
            clipboard: Some(&clipboard),
        };
        let (result, out, err) = run(&["base64-decode"], "not-valid-base64!!", &Params::new(), &delivery);
        assert!(!result.unwrap());
        assert!(out.is_empty());
        assert!(err.contains("[input error]"));
        assert!(err.contains("base64-decode"));
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_run_chain_unknown_transform() {
        let delivery = Delivery {
            newline: true,
            clipboard: None,
        };
        let (result, out, _) = run(&["rot13", "nope"], "x", &Params::new(), &delivery);
        assert!(matches!(result, Err(Error::UnknownTransform(name)) if name == "nope"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_list_transforms() {
        let registry = TransformManager::get().registry();
        let mut out = Vec::new();
        list_transforms(registry, Some("json"), &mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();
        assert!(listing.contains("JSON"));
        assert!(listing.contains("json-format"));
        assert!(!listing.contains("rot13"));

        let mut out = Vec::new();
        list_transforms(registry, None, &mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();
        assert!(listing.contains("rot13"));
        assert!(listing.contains("insert-curse-words"));

        assert!(matches!(
            list_transforms(registry, Some("colors"), &mut Vec::new()),
            Err(Error::ArgsProcessingError(_))
        ));
    }
}
