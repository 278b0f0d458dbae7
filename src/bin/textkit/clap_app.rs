use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .allow_hyphen_values(true)
    .args_conflicts_with_subcommands(true)
    .arg_required_else_help(true)
    .arg(
        arg!(-t --transform <NAME> ... "Transform to apply to the text.")
        .long_help(
            "Name of the transform to apply (see `textkit list`). \
                    When specifying multiple transforms, they are chained \
                    following the same occurrence order, each one receiving \
                    the output of the previous one.",
        ),
    )
    .arg(
        arg!([TEXT] ... "The text to transform.")
        .long_help(
            "The text to transform. Multiple values are joined with spaces. \
                    When no text is supplied it is read from the standard input.",
        ),
    )
    .arg(
        arg!(-s --set <VALUE> ... "Sets the value of a parameter (key=value).")
        .long_help(
            "Specifies the value of a parameter used by the transforms by supplying \
                    the name of the parameter and the associated value in (key=value) format. \
                    Command line values override the defaults of the configuration file.",
        ),
    )
    .arg(
        arg!(-c --copy "Copies the result to the clipboard.")
        .long_help("Copies the transformed text to the system clipboard in addition to printing it.")
    )
    .arg(
        arg!(-n --"no-newline" "Supress new line after the result.")
        .long_help("Prevents writing a carriage return after the transformed text.")
    )
    .subcommand(build_list_command())
    .subcommand(
        Command::new("sitemap")
        .about("Generates the sitemap of the site.")
        .long_about(
            "Generates the sitemap 0.9 document listing the home page, one page per \
                    transform, the static sections and the configured blog posts. \
                    The base URL and the output path are read from the [sitemap] section \
                    of the configuration file.",
        ),
    )
}

/// Builds the list command
///
/// # Returns
/// A `Command` object representing the list command.
fn build_list_command() -> Command {
    Command::new("list")
    .alias("ls")
    .about("List the available transforms.")
    .long_about("Displays the available transforms grouped by category along with a short description.")
    .arg(
        arg!(-C --category <CATEGORY> "Only list the transforms of the given category")
        .long_help("Restricts the listing to the given category (e.g. Cipher, Encoding, JSON)."),
    )
}
